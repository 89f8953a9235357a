//! Graph documents: the on-disk form favpath reads reaction networks from
//!
//! A document is a flat list of edges. Node names are taken from the edge
//! endpoint lists; there is no separate node table.
//!
//! ```toml
//! [[edges]]
//! name = "r1"
//! weight = 5.0
//! sources = ["A"]
//! targets = ["B"]
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::bail_unsupported;
use crate::error::{FavpathError, Result};
use crate::graph::{Arena, HyperEdge, HyperGraph};

/// One edge as written in a document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EdgeSpec {
    pub name: String,
    #[serde(default)]
    pub weight: f64,
    /// Either bound marks the edge as ranged
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_weight: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_weight: Option<f64>,
    #[serde(default)]
    pub sources: Vec<String>,
    #[serde(default)]
    pub targets: Vec<String>,
}

impl EdgeSpec {
    fn to_edge(&self, arena: &mut Arena) -> HyperEdge {
        let mut edge = if self.min_weight.is_some() || self.max_weight.is_some() {
            let mut ranged = HyperEdge::ranged(self.name.as_str());
            ranged.set_min_weight(self.min_weight.unwrap_or_default());
            ranged.set_max_weight(self.max_weight.unwrap_or_default());
            ranged.set_weight(self.weight);
            ranged
        } else {
            HyperEdge::with_weight(self.name.as_str(), self.weight)
        };
        // Fresh instances per mention; the graph interns them
        for name in &self.sources {
            edge.add_source(arena.add_node(name.as_str()));
        }
        for name in &self.targets {
            edge.add_target(arena.add_node(name.as_str()));
        }
        edge
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GraphDocument {
    #[serde(default)]
    pub edges: Vec<EdgeSpec>,
}

/// Serialization formats a document can be read from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Json,
    Toml,
    Yaml,
}

impl DocumentFormat {
    pub const SUPPORTED: &'static str = "json, toml, yaml, yml";

    pub fn from_path(path: &Path) -> Result<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_lowercase())
            .unwrap_or_default();
        match ext.as_str() {
            "json" => Ok(DocumentFormat::Json),
            "toml" => Ok(DocumentFormat::Toml),
            "yaml" | "yml" => Ok(DocumentFormat::Yaml),
            _ => bail_unsupported!(
                "graph document format",
                path.display(),
                Self::SUPPORTED
            ),
        }
    }
}

/// A graph together with the arena that owns its nodes and edges
#[derive(Debug)]
pub struct LoadedGraph {
    pub arena: Arena,
    pub graph: HyperGraph,
}

impl GraphDocument {
    pub fn parse(content: &str, format: DocumentFormat) -> Result<Self> {
        let doc = match format {
            DocumentFormat::Json => serde_json::from_str(content)?,
            DocumentFormat::Toml => toml::from_str(content)?,
            DocumentFormat::Yaml => serde_yaml::from_str(content)?,
        };
        Ok(doc)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let format = DocumentFormat::from_path(path)?;
        let content = fs::read_to_string(path)
            .map_err(|e| FavpathError::io_operation("read", path.display(), e))?;
        let doc = Self::parse(&content, format)?;
        doc.validate(path)?;
        Ok(doc)
    }

    fn validate(&self, path: &Path) -> Result<()> {
        if let Some(pos) = self.edges.iter().position(|e| e.name.trim().is_empty()) {
            return Err(FavpathError::invalid_document(
                path,
                format!("edge #{} has an empty name", pos + 1),
            ));
        }
        Ok(())
    }

    /// Add every edge to a new graph in document order.
    ///
    /// Edges whose name repeats an earlier edge are dropped by the graph.
    pub fn build(&self, arena: &mut Arena) -> HyperGraph {
        let mut graph = HyperGraph::new();
        for spec in &self.edges {
            let edge = spec.to_edge(arena);
            let id = arena.add_edge(edge);
            if !graph.add_edge(arena, id) {
                debug!(edge = %spec.name, "duplicate edge name ignored");
            }
        }
        graph
    }

    pub fn into_graph(self) -> LoadedGraph {
        let mut arena = Arena::new();
        let graph = self.build(&mut arena);
        LoadedGraph { arena, graph }
    }
}

/// Read a graph document from `path` and build its graph.
#[tracing::instrument]
pub fn load_graph(path: &Path) -> Result<LoadedGraph> {
    let loaded = GraphDocument::load(path)?.into_graph();
    debug!(
        nodes = loaded.graph.node_count(),
        edges = loaded.graph.edge_count(),
        "loaded graph"
    );
    Ok(loaded)
}
