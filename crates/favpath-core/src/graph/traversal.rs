use super::arena::Arena;
use super::edge::EdgeId;
use super::hypergraph::HyperGraph;
use super::node::NodeId;

/// Trait for providing hypergraph adjacency to the searches
pub trait GraphProvider {
    fn outbound_edges(&self, node: NodeId) -> Vec<EdgeId>;
    fn inbound_edges(&self, node: NodeId) -> Vec<EdgeId>;
    fn edge_sources(&self, edge: EdgeId) -> &[NodeId];
    fn edge_targets(&self, edge: EdgeId) -> &[NodeId];
    fn node_name(&self, node: NodeId) -> &str;
    fn node_count(&self) -> usize;
}

/// A graph read through the arena that stores its nodes and edges.
#[derive(Clone, Copy)]
pub struct GraphView<'a> {
    pub arena: &'a Arena,
    pub graph: &'a HyperGraph,
}

impl<'a> GraphView<'a> {
    pub fn new(arena: &'a Arena, graph: &'a HyperGraph) -> Self {
        Self { arena, graph }
    }
}

impl GraphProvider for GraphView<'_> {
    fn outbound_edges(&self, node: NodeId) -> Vec<EdgeId> {
        self.graph.edges_with_source(self.arena, node)
    }

    fn inbound_edges(&self, node: NodeId) -> Vec<EdgeId> {
        self.graph.edges_with_target(self.arena, node)
    }

    fn edge_sources(&self, edge: EdgeId) -> &[NodeId] {
        self.arena.edge(edge).sources()
    }

    fn edge_targets(&self, edge: EdgeId) -> &[NodeId] {
        self.arena.edge(edge).targets()
    }

    fn node_name(&self, node: NodeId) -> &str {
        self.arena.node_name(node)
    }

    fn node_count(&self) -> usize {
        self.graph.node_count()
    }
}
