//! Shared output helpers for commands

use favpath_core::error::Result;
use favpath_core::graph::EdgeSummary;
use serde::Serialize;

/// Escape double quotes for records output
pub fn escape_quotes(s: &str) -> String {
    s.replace('"', r#"\""#)
}

pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// `H favpath=1 records=1 mode=<mode> <fields>`
pub fn records_header(mode: &str, fields: &[(&str, String)]) -> String {
    let mut line = format!("H favpath=1 records=1 mode={}", mode);
    for (key, value) in fields {
        line.push_str(&format!(" {}={}", key, value));
    }
    line
}

/// `E <name> weight=<w> eq="<equation>"`, with min/max for ranged edges
pub fn edge_record(edge: &EdgeSummary) -> String {
    let mut line = format!("E {} weight={}", edge.name, edge.weight_label());
    line.push_str(&format!(" eq=\"{}\"", escape_quotes(&edge.equation)));
    line
}

pub fn node_record(name: &str) -> String {
    format!("N \"{}\"", escape_quotes(name))
}

/// `name (weight) : equation`
pub fn edge_line(edge: &EdgeSummary) -> String {
    format!("{} ({}) : {}", edge.name, edge.weight_label(), edge.equation)
}
