//! Session-owned storage for node and edge instances
//!
//! Graphs never own nodes or edges. They hold [`NodeId`]/[`EdgeId`] handles
//! into an arena, so the same edge instance can sit in many graphs at once
//! and a graph copy is just a new set of handles.

use super::edge::{EdgeId, HyperEdge};
use super::node::{Node, NodeId};

#[derive(Debug, Default)]
pub struct Arena {
    nodes: Vec<Node>,
    edges: Vec<HyperEdge>,
}

impl Arena {
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocates a new node instance. Names are not deduplicated here;
    /// that is the job of each graph's interning table.
    pub fn add_node(&mut self, name: impl Into<String>) -> NodeId {
        self.nodes.push(Node::new(name));
        NodeId(self.nodes.len() - 1)
    }

    pub fn add_edge(&mut self, edge: HyperEdge) -> EdgeId {
        self.edges.push(edge);
        EdgeId(self.edges.len() - 1)
    }

    /// Panics if `id` was not issued by this arena.
    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }

    /// Panics if `id` was not issued by this arena.
    pub fn edge(&self, id: EdgeId) -> &HyperEdge {
        &self.edges[id.0]
    }

    pub fn edge_mut(&mut self, id: EdgeId) -> &mut HyperEdge {
        &mut self.edges[id.0]
    }

    pub fn node_name(&self, id: NodeId) -> &str {
        self.nodes[id.0].name()
    }

    /// Nodes-by-name comparison used everywhere identity matters.
    pub fn same_node(&self, a: NodeId, b: NodeId) -> bool {
        a == b || self.node_name(a) == self.node_name(b)
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_node_allocates_distinct_instances() {
        let mut arena = Arena::new();
        let a1 = arena.add_node("A");
        let a2 = arena.add_node("A");
        assert_ne!(a1, a2);
        assert!(arena.same_node(a1, a2));
        assert_eq!(arena.node_count(), 2);
    }

    #[test]
    fn test_edge_mut_updates_weight_in_place() {
        let mut arena = Arena::new();
        let id = arena.add_edge(HyperEdge::with_weight("r", 1.0));
        arena.edge_mut(id).set_weight(7.5);
        assert_eq!(arena.edge(id).weight(), 7.5);
        assert_eq!(arena.edge_count(), 1);
    }
}
