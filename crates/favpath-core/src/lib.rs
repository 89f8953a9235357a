//! Favpath Core Library
//!
//! Hypergraph model and favored-path search for weighted reaction networks.

pub mod config;
pub mod document;
pub mod error;
pub mod graph;
pub mod logging;
