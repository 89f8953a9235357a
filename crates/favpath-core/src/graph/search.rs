//! Depth-first searches over a hypergraph
//!
//! Two LIFO traversals with different visited timing:
//! - [`reachable`] marks a node visited when it is popped. A node can sit on
//!   the frontier several times before its first pop. Used for the yes/no
//!   reachability test.
//! - [`discover`] marks a node visited when it is pushed and records the edge
//!   and predecessor that first reached it. Used for path reconstruction.
//!
//! On graphs with parallel routes the two visit nodes in different orders, so
//! they are kept separate.

mod path;

use std::collections::{HashMap, HashSet};

use crate::graph::arena::Arena;
use crate::graph::hypergraph::HyperGraph;
use crate::graph::node::NodeId;
use crate::graph::traversal::{GraphProvider, GraphView};
pub use path::PredecessorInfo;

/// Nodes reachable from `root`, in first-visit order.
///
/// Nodes are compared by name. A node popped a second time is expanded
/// again; only its first visit is reported.
pub fn reachable(provider: &dyn GraphProvider, root: NodeId) -> Vec<NodeId> {
    let mut visited: HashSet<&str> = HashSet::with_capacity(provider.node_count());
    let mut order: Vec<NodeId> = Vec::with_capacity(provider.node_count());
    let mut frontier: Vec<NodeId> = vec![root];

    while let Some(current) = frontier.pop() {
        if visited.insert(provider.node_name(current)) {
            order.push(current);
        }
        for edge in provider.outbound_edges(current) {
            for &next in provider.edge_targets(edge) {
                if !visited.contains(provider.node_name(next)) {
                    frontier.push(next);
                }
            }
        }
    }

    order
}

/// Whether `target` is reachable from `source` along directed edges.
///
/// Always true when `source` and `target` share a name.
pub fn path_exists(provider: &dyn GraphProvider, source: NodeId, target: NodeId) -> bool {
    let target_name = provider.node_name(target);
    reachable(provider, source)
        .iter()
        .any(|&n| provider.node_name(n) == target_name)
}

/// Result of a visited-on-push traversal.
pub struct Discovery<'a> {
    /// Discovered nodes in discovery order. The root is only present if a
    /// cycle led back to it.
    pub visited: Vec<NodeId>,
    /// First-discovery predecessor for every visited node, keyed by name
    pub predecessors: HashMap<&'a str, PredecessorInfo>,
}

impl Discovery<'_> {
    pub fn contains(&self, name: &str) -> bool {
        self.predecessors.contains_key(name)
    }
}

/// LIFO traversal from `root` that records how each node was first reached.
pub fn discover<'a>(provider: &'a dyn GraphProvider, root: NodeId) -> Discovery<'a> {
    let mut visited: Vec<NodeId> = Vec::with_capacity(provider.node_count());
    let mut predecessors: HashMap<&'a str, PredecessorInfo> = HashMap::new();
    let mut frontier: Vec<NodeId> = vec![root];

    while let Some(current) = frontier.pop() {
        for edge in provider.outbound_edges(current) {
            for &next in provider.edge_targets(edge) {
                let name = provider.node_name(next);
                if predecessors.contains_key(name) {
                    continue;
                }
                frontier.push(next);
                visited.push(next);
                predecessors.insert(
                    name,
                    PredecessorInfo {
                        edge,
                        predecessor: current,
                    },
                );
            }
        }
    }

    Discovery {
        visited,
        predecessors,
    }
}

/// Extract one path from `source` to `target` inside `graph`.
///
/// Returns an empty graph when `target` is not discovered, or when `source`
/// and `target` share a name. The returned edges keep `graph`'s edge order,
/// not the order of the backward walk.
#[tracing::instrument(skip(arena, graph), fields(
    source = %arena.node_name(source),
    target = %arena.node_name(target),
    edges = graph.edge_count(),
))]
pub fn get_path(
    arena: &mut Arena,
    graph: &HyperGraph,
    source: NodeId,
    target: NodeId,
) -> HyperGraph {
    let selected = {
        let view = GraphView::new(arena, graph);
        let discovery = discover(&view, source);
        if !discovery.contains(view.node_name(target)) {
            tracing::debug!("target not discovered");
            return HyperGraph::new();
        }
        path::walk_back(&view, &discovery, source, target)
    };

    let mut result = HyperGraph::new();
    for &edge in graph.edges() {
        if selected.contains(&edge) {
            result.add_edge(arena, edge);
        }
    }
    result
}

#[cfg(test)]
mod tests;
