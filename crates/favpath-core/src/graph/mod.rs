//! Hypergraph model and favored-path search
//!
//! - Node and edge instances live in an [`Arena`]; graphs hold handles
//! - [`HyperGraph`] interns nodes by name and deduplicates edges by name
//! - LIFO searches for reachability and path reconstruction
//! - Favored-path selection over weight tiers

pub mod arena;
pub mod edge;
pub mod favored;
pub mod hypergraph;
pub mod node;
pub mod search;
pub mod traversal;
pub mod types;

#[cfg(test)]
pub(crate) mod test_support;

pub use arena::Arena;
pub use edge::{format_weight, EdgeDisplay, EdgeId, Equation, HyperEdge, WeightRange};
pub use favored::{favored_path, favored_path_high_weights, favored_path_low_weights};
pub use hypergraph::{GraphDisplay, HyperGraph};
pub use node::{Node, NodeId};
pub use search::{get_path, path_exists, reachable};
pub use traversal::{GraphProvider, GraphView};
pub use types::{Direction, EdgeSummary, PathResult, WeightPreference};
