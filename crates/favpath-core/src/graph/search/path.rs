//! Path reconstruction utilities for hypergraph search

use super::Discovery;
use crate::graph::edge::EdgeId;
use crate::graph::node::NodeId;
use crate::graph::traversal::GraphProvider;
use std::collections::HashSet;

/// How a node was first reached during discovery.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PredecessorInfo {
    pub edge: EdgeId,
    pub predecessor: NodeId,
}

/// Follow predecessor links from `target` back to `source`, collecting the
/// edges on the way. Stops immediately when the two share a name.
pub fn walk_back(
    provider: &dyn GraphProvider,
    discovery: &Discovery<'_>,
    source: NodeId,
    target: NodeId,
) -> HashSet<EdgeId> {
    let source_name = provider.node_name(source);
    let mut edges = HashSet::new();
    let mut current = target;

    while provider.node_name(current) != source_name {
        match discovery.predecessors.get(provider.node_name(current)) {
            Some(info) => {
                edges.insert(info.edge);
                current = info.predecessor;
            }
            None => break,
        }
    }

    edges
}
