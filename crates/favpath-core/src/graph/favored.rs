//! Favored-path selection over weight tiers
//!
//! Edges are consumed one weight tier at a time, best tier first. Each outer
//! round starts from a copy of the committed baseline and keeps layering
//! tiers onto it until the source reaches the target or the queue runs dry.
//! Tiers that did not connect are retried next round against the larger
//! baseline. Whatever tier ended the round is committed to the baseline,
//! whether or not it connected.
//!
//! The selected path is not guaranteed to be weight- or length-optimal.

use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

use crate::graph::arena::Arena;
use crate::graph::edge::EdgeId;
use crate::graph::hypergraph::HyperGraph;
use crate::graph::node::NodeId;
use crate::graph::search::{get_path, path_exists};
use crate::graph::traversal::GraphView;
use crate::graph::types::WeightPreference;

/// One edge waiting in the tier queue.
///
/// `seq` is the edge's position in the input graph, so edges of one tier
/// always come out in input order.
#[derive(Debug, Clone, Copy)]
pub struct QueuedEdge {
    pub edge: EdgeId,
    pub weight: f64,
    pub seq: usize,
    preference: WeightPreference,
}

impl PartialEq for QueuedEdge {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for QueuedEdge {}

impl PartialOrd for QueuedEdge {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for QueuedEdge {
    /// Favored weight sorts first, then input order.
    fn cmp(&self, other: &Self) -> Ordering {
        self.preference
            .compare(self.weight, other.weight)
            .then_with(|| self.seq.cmp(&other.seq))
    }
}

/// Priority queue of edges that pops whole weight tiers.
#[derive(Debug)]
pub struct TierQueue {
    heap: BinaryHeap<Reverse<QueuedEdge>>,
    preference: WeightPreference,
}

impl TierQueue {
    pub fn new(preference: WeightPreference) -> Self {
        Self {
            heap: BinaryHeap::new(),
            preference,
        }
    }

    /// Queue every edge of `graph`, snapshotting current weights.
    pub fn from_graph(arena: &Arena, graph: &HyperGraph, preference: WeightPreference) -> Self {
        let mut queue = Self::new(preference);
        queue.heap.reserve(graph.edge_count());
        for (seq, &edge) in graph.edges().iter().enumerate() {
            queue.heap.push(Reverse(QueuedEdge {
                edge,
                weight: arena.edge(edge).weight(),
                seq,
                preference,
            }));
        }
        queue
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Re-queue previously popped edges, keeping their original positions.
    pub fn extend(&mut self, edges: impl IntoIterator<Item = QueuedEdge>) {
        let preference = self.preference;
        self.heap.extend(
            edges
                .into_iter()
                .map(|q| Reverse(QueuedEdge { preference, ..q })),
        );
    }

    /// Pop the best edge and every following edge of exactly equal weight.
    ///
    /// Returns an empty tier only when the queue is empty.
    pub fn pop_tier(&mut self) -> Vec<QueuedEdge> {
        let Some(Reverse(first)) = self.heap.pop() else {
            return Vec::new();
        };
        let mut tier = vec![first];
        while let Some(Reverse(next)) = self.heap.peek() {
            if next.weight != first.weight {
                break;
            }
            let next = *next;
            self.heap.pop();
            tier.push(next);
        }
        tier
    }
}

/// Favored path drawing from the heaviest tiers first.
pub fn favored_path_high_weights(
    arena: &mut Arena,
    input: &HyperGraph,
    source: NodeId,
    target: NodeId,
) -> HyperGraph {
    favored_path(arena, input, source, target, WeightPreference::High)
}

/// Favored path drawing from the lightest tiers first.
pub fn favored_path_low_weights(
    arena: &mut Arena,
    input: &HyperGraph,
    source: NodeId,
    target: NodeId,
) -> HyperGraph {
    favored_path(arena, input, source, target, WeightPreference::Low)
}

/// Find the favored path from `source` to `target` in `input`.
///
/// Returns an empty graph when no path exists, and also when `source` and
/// `target` name the same node.
#[tracing::instrument(skip(arena, input), fields(
    source = %arena.node_name(source),
    target = %arena.node_name(target),
    preference = %preference,
    edges = input.edge_count(),
))]
pub fn favored_path(
    arena: &mut Arena,
    input: &HyperGraph,
    source: NodeId,
    target: NodeId,
    preference: WeightPreference,
) -> HyperGraph {
    let mut committed = HyperGraph::new();
    let mut pending = TierQueue::from_graph(arena, input, preference);
    let mut path_found = false;
    let mut round = 0usize;

    while !pending.is_empty() {
        round += 1;
        tracing::debug!(
            round,
            pending = pending.len(),
            committed = committed.edge_count(),
            "round_start"
        );

        let mut trial = HyperGraph::copy_of(arena, &committed);
        let mut deferred = TierQueue::new(preference);

        let last_tier = loop {
            let tier = pending.pop_tier();
            for queued in &tier {
                trial.add_edge(arena, queued.edge);
            }
            path_found = path_exists(&GraphView::new(arena, &trial), source, target);
            tracing::trace!(
                round,
                weight = tier[0].weight,
                size = tier.len(),
                reachable = path_found,
                "tier"
            );

            // The tier that exhausts the queue is committed below, never retried
            if path_found || pending.is_empty() {
                break tier;
            }
            deferred.extend(tier);
        };

        for queued in &last_tier {
            committed.add_edge(arena, queued.edge);
        }
        pending = deferred;
    }

    if !path_found {
        tracing::debug!(rounds = round, "no path");
        return HyperGraph::new();
    }

    tracing::debug!(
        rounds = round,
        committed = committed.edge_count(),
        "reconstructing path"
    );
    get_path(arena, &committed, source, target)
}
