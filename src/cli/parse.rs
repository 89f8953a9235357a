use favpath_core::graph::{Direction, WeightPreference};

/// Parse weight preference from string
pub fn parse_preference(s: &str) -> std::result::Result<WeightPreference, String> {
    s.parse::<WeightPreference>()
}

/// Parse adjacency direction from string
pub fn parse_direction(s: &str) -> std::result::Result<Direction, String> {
    s.parse::<Direction>()
}
