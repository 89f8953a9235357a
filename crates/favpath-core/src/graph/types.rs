use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use super::arena::Arena;
use super::edge::{format_weight, EdgeId, Equation};
use super::hypergraph::HyperGraph;

pub const PREFER_HIGH: &str = "high";
pub const PREFER_LOW: &str = "low";

/// Which end of the weight order a favored path draws from first
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeightPreference {
    /// Heaviest tier first
    #[default]
    High,
    /// Lightest tier first
    Low,
}

impl WeightPreference {
    /// Order two weights so that the favored one sorts first.
    pub fn compare(&self, a: f64, b: f64) -> Ordering {
        match self {
            WeightPreference::High => b.total_cmp(&a),
            WeightPreference::Low => a.total_cmp(&b),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            WeightPreference::High => PREFER_HIGH,
            WeightPreference::Low => PREFER_LOW,
        }
    }
}

impl std::str::FromStr for WeightPreference {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            PREFER_HIGH => Ok(WeightPreference::High),
            PREFER_LOW => Ok(WeightPreference::Low),
            other => Err(format!(
                "unknown weight preference '{}' (expected: high, low)",
                other
            )),
        }
    }
}

impl std::fmt::Display for WeightPreference {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

pub const DIRECTION_OUT: &str = "out";
pub const DIRECTION_IN: &str = "in";
pub const DIRECTION_BOTH: &str = "both";

/// Direction for adjacency listing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Edges consuming the node (node is a source)
    Out,
    /// Edges producing the node (node is a target)
    In,
    #[default]
    /// Both directions
    Both,
}

impl Direction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Out => DIRECTION_OUT,
            Direction::In => DIRECTION_IN,
            Direction::Both => DIRECTION_BOTH,
        }
    }
}

impl std::str::FromStr for Direction {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            DIRECTION_OUT => Ok(Direction::Out),
            DIRECTION_IN => Ok(Direction::In),
            DIRECTION_BOTH => Ok(Direction::Both),
            other => Err(format!(
                "unknown direction '{}' (expected: out, in, both)",
                other
            )),
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Serializable view of one edge
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EdgeSummary {
    pub name: String,
    pub weight: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_weight: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_weight: Option<f64>,
    pub sources: Vec<String>,
    pub targets: Vec<String>,
    pub equation: String,
}

impl EdgeSummary {
    pub fn from_edge(arena: &Arena, id: EdgeId) -> Self {
        let edge = arena.edge(id);
        let names = |ids: &[super::NodeId]| -> Vec<String> {
            ids.iter()
                .map(|n| arena.node_name(*n).to_string())
                .collect()
        };
        EdgeSummary {
            name: edge.name().to_string(),
            weight: edge.weight(),
            min_weight: edge.range().map(|r| r.min),
            max_weight: edge.range().map(|r| r.max),
            sources: names(edge.sources()),
            targets: names(edge.targets()),
            equation: Equation::new(arena, edge).to_string(),
        }
    }

    /// Weight label as shown in human output: `5.0` or `1.0,4.5`
    pub fn weight_label(&self) -> String {
        match (self.min_weight, self.max_weight) {
            (Some(min), Some(max)) => format!("{},{}", format_weight(min), format_weight(max)),
            _ => format_weight(self.weight),
        }
    }
}

/// Favored path result
#[derive(Debug, Clone, Serialize)]
pub struct PathResult {
    pub from: String,
    pub to: String,
    pub preference: String,
    pub found: bool,
    pub nodes: Vec<String>,
    pub edges: Vec<EdgeSummary>,
    pub path_length: usize,
}

impl PathResult {
    pub fn from_graph(
        arena: &Arena,
        path: &HyperGraph,
        from: &str,
        to: &str,
        preference: WeightPreference,
    ) -> Self {
        let edges: Vec<EdgeSummary> = path
            .edges()
            .iter()
            .map(|e| EdgeSummary::from_edge(arena, *e))
            .collect();
        PathResult {
            from: from.to_string(),
            to: to.to_string(),
            preference: preference.to_string(),
            found: !edges.is_empty(),
            nodes: path
                .nodes()
                .iter()
                .map(|n| arena.node_name(*n).to_string())
                .collect(),
            path_length: edges.len(),
            edges,
        }
    }
}
