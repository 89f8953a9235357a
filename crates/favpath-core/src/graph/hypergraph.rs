//! Hypergraph with name-interned nodes and name-deduplicated edges

use std::collections::HashMap;
use std::fmt;

use super::arena::Arena;
use super::edge::EdgeId;
use super::node::NodeId;

/// Insertion-ordered set of edges plus the canonical node of every name
/// those edges mention.
///
/// Adding an edge rewrites its endpoints (inside the arena) to the graph's
/// canonical node instances, so all edges of one graph that share a node
/// name share one [`NodeId`].
#[derive(Debug, Clone, Default)]
pub struct HyperGraph {
    nodes: Vec<NodeId>,
    edges: Vec<EdgeId>,
    node_index: HashMap<String, NodeId>,
    edge_index: HashMap<String, EdgeId>,
}

#[derive(Clone, Copy)]
enum Side {
    Sources,
    Targets,
}

impl HyperGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy constructor: re-adds every edge of `graph`, in order, through
    /// [`HyperGraph::add_edge`]. Edges stay shared arena entries.
    pub fn copy_of(arena: &mut Arena, graph: &HyperGraph) -> Self {
        let mut copy = HyperGraph {
            nodes: Vec::with_capacity(graph.nodes.len()),
            edges: Vec::with_capacity(graph.edges.len()),
            node_index: HashMap::with_capacity(graph.nodes.len()),
            edge_index: HashMap::with_capacity(graph.edges.len()),
        };
        for &edge in &graph.edges {
            copy.add_edge(arena, edge);
        }
        copy
    }

    pub fn edges(&self) -> &[EdgeId] {
        &self.edges
    }

    pub fn nodes(&self) -> &[NodeId] {
        &self.nodes
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty() && self.nodes.is_empty()
    }

    /// Adds an edge and interns its endpoints, sources first.
    ///
    /// Returns `false` without touching anything if an edge with the same
    /// name is already present.
    pub fn add_edge(&mut self, arena: &mut Arena, edge: EdgeId) -> bool {
        let name = arena.edge(edge).name();
        if self.edge_index.contains_key(name) {
            return false;
        }
        self.edge_index.insert(name.to_string(), edge);
        self.edges.push(edge);

        self.intern_side(arena, edge, Side::Sources);
        self.intern_side(arena, edge, Side::Targets);
        true
    }

    fn intern_side(&mut self, arena: &mut Arena, edge: EdgeId, side: Side) {
        let len = match side {
            Side::Sources => arena.edge(edge).source_count(),
            Side::Targets => arena.edge(edge).target_count(),
        };
        for i in 0..len {
            let node = match side {
                Side::Sources => arena.edge(edge).sources[i],
                Side::Targets => arena.edge(edge).targets[i],
            };
            let name = arena.node_name(node);
            match self.node_index.get(name) {
                Some(&canonical) => {
                    let slot = match side {
                        Side::Sources => &mut arena.edge_mut(edge).sources[i],
                        Side::Targets => &mut arena.edge_mut(edge).targets[i],
                    };
                    *slot = canonical;
                }
                None => {
                    self.node_index.insert(name.to_string(), node);
                    self.nodes.push(node);
                }
            }
        }
    }

    pub fn contains_edge(&self, arena: &Arena, edge: EdgeId) -> bool {
        self.edge_index.contains_key(arena.edge(edge).name())
    }

    /// Edges, in insertion order, whose source list names `node`.
    pub fn edges_with_source(&self, arena: &Arena, node: NodeId) -> Vec<EdgeId> {
        self.edges
            .iter()
            .copied()
            .filter(|&e| arena.edge(e).is_source(arena, node))
            .collect()
    }

    /// Edges, in insertion order, whose target list names `node`.
    pub fn edges_with_target(&self, arena: &Arena, node: NodeId) -> Vec<EdgeId> {
        self.edges
            .iter()
            .copied()
            .filter(|&e| arena.edge(e).is_target(arena, node))
            .collect()
    }

    /// Canonical node with the given name, if any edge mentions it.
    pub fn node(&self, name: &str) -> Option<NodeId> {
        self.node_index.get(name).copied()
    }

    pub fn edge(&self, name: &str) -> Option<EdgeId> {
        self.edge_index.get(name).copied()
    }
}

/// Edge names separated by `", "`.
pub struct GraphDisplay<'a> {
    arena: &'a Arena,
    graph: &'a HyperGraph,
}

impl<'a> GraphDisplay<'a> {
    pub fn new(arena: &'a Arena, graph: &'a HyperGraph) -> Self {
        Self { arena, graph }
    }
}

impl fmt::Display for GraphDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, edge) in self.graph.edges.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            f.write_str(self.arena.edge(*edge).name())?;
        }
        Ok(())
    }
}
