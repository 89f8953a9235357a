//! Weighted hyperedges (reactions) and their text rendering

use std::fmt;
use std::hash::{Hash, Hasher};

use super::arena::Arena;
use super::node::NodeId;

/// Handle to an edge stored in an [`Arena`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EdgeId(pub(crate) usize);

impl EdgeId {
    pub fn index(&self) -> usize {
        self.0
    }
}

/// Display-only weight bounds carried by ranged edges.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct WeightRange {
    pub min: f64,
    pub max: f64,
}

/// A named, weighted, directed many-to-many transition.
///
/// Equality and hashing use the name only. Endpoint lists keep insertion
/// order and may repeat a node.
#[derive(Debug, Clone)]
pub struct HyperEdge {
    name: String,
    weight: f64,
    range: Option<WeightRange>,
    pub(crate) sources: Vec<NodeId>,
    pub(crate) targets: Vec<NodeId>,
}

impl HyperEdge {
    /// Creates an edge with zero weight.
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_weight(name, 0.0)
    }

    pub fn with_weight(name: impl Into<String>, weight: f64) -> Self {
        Self {
            name: name.into(),
            weight,
            range: None,
            sources: Vec::new(),
            targets: Vec::new(),
        }
    }

    /// Creates a ranged edge; min and max start at zero.
    pub fn ranged(name: impl Into<String>) -> Self {
        let mut edge = Self::new(name);
        edge.range = Some(WeightRange::default());
        edge
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn weight(&self) -> f64 {
        self.weight
    }

    pub fn set_weight(&mut self, weight: f64) {
        self.weight = weight;
    }

    pub fn is_ranged(&self) -> bool {
        self.range.is_some()
    }

    pub fn range(&self) -> Option<WeightRange> {
        self.range
    }

    /// Minimum weight bound, zero for non-ranged edges.
    pub fn min_weight(&self) -> f64 {
        self.range.map_or(0.0, |r| r.min)
    }

    /// Setting a bound turns the edge into a ranged edge.
    pub fn set_min_weight(&mut self, min: f64) {
        self.range.get_or_insert_with(WeightRange::default).min = min;
    }

    /// Maximum weight bound, zero for non-ranged edges.
    pub fn max_weight(&self) -> f64 {
        self.range.map_or(0.0, |r| r.max)
    }

    pub fn set_max_weight(&mut self, max: f64) {
        self.range.get_or_insert_with(WeightRange::default).max = max;
    }

    pub fn add_source(&mut self, node: NodeId) {
        self.sources.push(node);
    }

    pub fn add_target(&mut self, node: NodeId) {
        self.targets.push(node);
    }

    pub fn sources(&self) -> &[NodeId] {
        &self.sources
    }

    pub fn targets(&self) -> &[NodeId] {
        &self.targets
    }

    pub fn source_count(&self) -> usize {
        self.sources.len()
    }

    pub fn target_count(&self) -> usize {
        self.targets.len()
    }

    /// Whether a node with the same name as `node` is among the sources.
    pub fn is_source(&self, arena: &Arena, node: NodeId) -> bool {
        contains_by_name(arena, &self.sources, node)
    }

    /// Whether a node with the same name as `node` is among the targets.
    pub fn is_target(&self, arena: &Arena, node: NodeId) -> bool {
        contains_by_name(arena, &self.targets, node)
    }
}

fn contains_by_name(arena: &Arena, list: &[NodeId], node: NodeId) -> bool {
    list.iter().any(|&n| arena.same_node(n, node))
}

impl PartialEq for HyperEdge {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for HyperEdge {}

impl Hash for HyperEdge {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
    }
}

/// Render a weight with at least one fractional digit (`5.0`, `0.25`).
pub fn format_weight(weight: f64) -> String {
    format!("{:?}", weight)
}

/// `A + B --> C` rendering of an edge.
pub struct Equation<'a> {
    arena: &'a Arena,
    edge: &'a HyperEdge,
}

impl<'a> Equation<'a> {
    pub fn new(arena: &'a Arena, edge: &'a HyperEdge) -> Self {
        Self { arena, edge }
    }

    fn write_side(&self, f: &mut fmt::Formatter<'_>, side: &[NodeId]) -> fmt::Result {
        for (i, node) in side.iter().enumerate() {
            if i > 0 {
                f.write_str(" + ")?;
            }
            f.write_str(self.arena.node(*node).name())?;
        }
        Ok(())
    }
}

impl fmt::Display for Equation<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_side(f, &self.edge.sources)?;
        f.write_str(" --> ")?;
        self.write_side(f, &self.edge.targets)
    }
}

/// `name (weight) : equation`, or `name (min,max) : equation` when ranged.
pub struct EdgeDisplay<'a> {
    arena: &'a Arena,
    edge: &'a HyperEdge,
}

impl<'a> EdgeDisplay<'a> {
    pub fn new(arena: &'a Arena, edge: &'a HyperEdge) -> Self {
        Self { arena, edge }
    }
}

impl fmt::Display for EdgeDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.edge.range {
            Some(range) => write!(
                f,
                "{} ({},{}) : ",
                self.edge.name,
                format_weight(range.min),
                format_weight(range.max)
            )?,
            None => write!(f, "{} ({}) : ", self.edge.name, format_weight(self.edge.weight))?,
        }
        write!(f, "{}", Equation::new(self.arena, self.edge))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn water_formation(arena: &mut Arena) -> EdgeId {
        let h2 = arena.add_node("H2");
        let o2 = arena.add_node("O2");
        let h2o = arena.add_node("H2O");
        let mut edge = HyperEdge::with_weight("r1", 2.5);
        edge.add_source(h2);
        edge.add_source(o2);
        edge.add_target(h2o);
        arena.add_edge(edge)
    }

    #[test]
    fn test_edge_equality_ignores_weight_and_endpoints() {
        let a = HyperEdge::with_weight("r1", 1.0);
        let mut b = HyperEdge::with_weight("r1", 9.0);
        b.add_source(NodeId(3));
        assert_eq!(a, b);
        assert_ne!(a, HyperEdge::new("r2"));
    }

    #[test]
    fn test_default_weight_is_zero() {
        let edge = HyperEdge::new("r");
        assert_eq!(edge.weight(), 0.0);
        assert!(!edge.is_ranged());
        assert_eq!(edge.min_weight(), 0.0);
        assert_eq!(edge.max_weight(), 0.0);
    }

    #[test]
    fn test_endpoint_lists_keep_duplicates() {
        let mut arena = Arena::new();
        let h = arena.add_node("H");
        let h2 = arena.add_node("H2");
        let mut edge = HyperEdge::new("dimerize");
        edge.add_source(h);
        edge.add_source(h);
        edge.add_target(h2);
        assert_eq!(edge.source_count(), 2);
        assert_eq!(edge.target_count(), 1);
    }

    #[test]
    fn test_is_source_matches_by_name() {
        let mut arena = Arena::new();
        let id = water_formation(&mut arena);
        let other_h2 = arena.add_node("H2");
        let edge = arena.edge(id);
        assert!(edge.is_source(&arena, other_h2));
        assert!(!edge.is_target(&arena, other_h2));
    }

    #[test]
    fn test_empty_edge_matches_nothing() {
        let mut arena = Arena::new();
        let a = arena.add_node("A");
        let id = arena.add_edge(HyperEdge::new("empty"));
        assert!(!arena.edge(id).is_source(&arena, a));
        assert!(!arena.edge(id).is_target(&arena, a));
    }

    #[test]
    fn test_equation_rendering() {
        let mut arena = Arena::new();
        let id = water_formation(&mut arena);
        let edge = arena.edge(id);
        assert_eq!(Equation::new(&arena, edge).to_string(), "H2 + O2 --> H2O");
        assert_eq!(
            EdgeDisplay::new(&arena, edge).to_string(),
            "r1 (2.5) : H2 + O2 --> H2O"
        );
    }

    #[test]
    fn test_ranged_display() {
        let mut arena = Arena::new();
        let a = arena.add_node("A");
        let b = arena.add_node("B");
        let mut edge = HyperEdge::ranged("r2");
        edge.set_min_weight(1.0);
        edge.set_max_weight(4.5);
        edge.set_weight(3.0);
        edge.add_source(a);
        edge.add_target(b);
        let id = arena.add_edge(edge);
        assert_eq!(
            EdgeDisplay::new(&arena, arena.edge(id)).to_string(),
            "r2 (1.0,4.5) : A --> B"
        );
    }

    #[test]
    fn test_format_weight_keeps_fraction() {
        assert_eq!(format_weight(5.0), "5.0");
        assert_eq!(format_weight(0.25), "0.25");
        assert_eq!(format_weight(-1.0), "-1.0");
    }
}
