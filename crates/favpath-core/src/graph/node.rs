//! Nodes of the hypergraph (species in a reaction network)

use std::fmt;

/// Handle to a node instance stored in an [`Arena`](super::Arena).
///
/// Two handles may point at distinct instances carrying the same name.
/// Graphs resolve that through interning; identity comparisons that matter
/// to the algorithm always go through the node name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    pub fn index(&self) -> usize {
        self.0
    }
}

/// A vertex identified solely by its name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Node {
    name: String,
}

impl Node {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
