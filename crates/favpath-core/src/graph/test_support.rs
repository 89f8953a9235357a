//! Graph builders shared by the unit tests

use super::{Arena, EdgeId, HyperEdge, HyperGraph, NodeId};

/// Build a graph from `(name, weight, sources, targets)` tuples.
///
/// Every endpoint mention gets its own node instance so interning is
/// exercised the same way an importer would exercise it.
pub fn build(arena: &mut Arena, edges: &[(&str, f64, &[&str], &[&str])]) -> HyperGraph {
    let mut graph = HyperGraph::new();
    for (name, weight, sources, targets) in edges {
        let id = edge(arena, name, *weight, sources, targets);
        graph.add_edge(arena, id);
    }
    graph
}

pub fn edge(arena: &mut Arena, name: &str, weight: f64, from: &[&str], to: &[&str]) -> EdgeId {
    let mut edge = HyperEdge::with_weight(name, weight);
    for n in from {
        let id = arena.add_node(*n);
        edge.add_source(id);
    }
    for n in to {
        let id = arena.add_node(*n);
        edge.add_target(id);
    }
    arena.add_edge(edge)
}

pub fn node(graph: &HyperGraph, name: &str) -> NodeId {
    graph
        .node(name)
        .unwrap_or_else(|| panic!("node {} not in graph", name))
}

pub fn edge_names(arena: &Arena, graph: &HyperGraph) -> Vec<String> {
    graph
        .edges()
        .iter()
        .map(|e| arena.edge(*e).name().to_string())
        .collect()
}
