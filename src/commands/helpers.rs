//! Helper functions shared across commands

use std::path::Path;
use std::time::Instant;

use favpath_core::document::{load_graph, LoadedGraph};
use favpath_core::error::{FavpathError, Result};
use favpath_core::graph::{HyperGraph, NodeId};
use favpath_core::trace_time;

/// Load a graph document, timing the load
pub fn load(file: &Path) -> Result<LoadedGraph> {
    let start = Instant::now();
    let loaded = load_graph(file)?;
    trace_time!(start, "load_graph", edges = loaded.graph.edge_count());
    Ok(loaded)
}

/// Look up a node by name, failing with a data error when the graph lacks it
pub fn resolve_node(graph: &HyperGraph, name: &str) -> Result<NodeId> {
    graph.node(name).ok_or_else(|| FavpathError::NodeNotFound {
        name: name.to_string(),
    })
}
