//! `favpath edges` command - list the edges touching a node
//!
//! `out` lists edges that consume the node, `in` lists edges that produce it.
//! `both` lists the outbound edges first, then the inbound ones; an edge with
//! the node on both sides appears once per side.

use favpath_core::error::Result;
use favpath_core::graph::{Arena, Direction, EdgeId, EdgeSummary, HyperGraph, NodeId};
use serde::Serialize;

use super::format::{edge_line, edge_record, escape_quotes, print_json, records_header};
use super::helpers::{load, resolve_node};
use crate::cli::{EdgesArgs, OutputFormat};
use crate::commands::dispatch::CommandContext;

/// One adjacency entry
#[derive(Debug, Serialize)]
pub struct AdjacentEdge {
    pub direction: Direction,
    #[serde(flatten)]
    pub edge: EdgeSummary,
}

#[derive(Debug, Serialize)]
pub struct AdjacencyResult {
    pub node: String,
    pub direction: Direction,
    pub edges: Vec<AdjacentEdge>,
}

/// Collect adjacent edges in graph order, outbound before inbound
pub fn adjacent_edges(
    arena: &Arena,
    graph: &HyperGraph,
    node: NodeId,
    direction: Direction,
) -> Vec<AdjacentEdge> {
    let tag = |ids: Vec<EdgeId>, side: Direction| -> Vec<AdjacentEdge> {
        ids.into_iter()
            .map(|id| AdjacentEdge {
                direction: side,
                edge: EdgeSummary::from_edge(arena, id),
            })
            .collect()
    };

    let mut entries = Vec::new();
    if matches!(direction, Direction::Out | Direction::Both) {
        entries.extend(tag(graph.edges_with_source(arena, node), Direction::Out));
    }
    if matches!(direction, Direction::In | Direction::Both) {
        entries.extend(tag(graph.edges_with_target(arena, node), Direction::In));
    }
    entries
}

/// Execute the edges command
pub fn execute(ctx: &CommandContext, args: &EdgesArgs) -> Result<()> {
    let format = ctx.format()?;
    let direction = args
        .direction
        .unwrap_or(ctx.config.graph.default_direction);

    let loaded = load(&args.file)?;
    let node = resolve_node(&loaded.graph, &args.node)?;
    let result = AdjacencyResult {
        node: args.node.clone(),
        direction,
        edges: adjacent_edges(&loaded.arena, &loaded.graph, node, direction),
    };

    match format {
        OutputFormat::Json => print_json(&result)?,
        OutputFormat::Human => {
            if result.edges.is_empty() {
                if !ctx.cli.quiet {
                    println!("No {} edges for {}", direction, result.node);
                }
                return Ok(());
            }
            for entry in &result.edges {
                println!("{:<3} {}", entry.direction.as_str(), edge_line(&entry.edge));
            }
        }
        OutputFormat::Records => {
            println!(
                "{}",
                records_header(
                    "edges",
                    &[
                        ("node", format!("\"{}\"", escape_quotes(&result.node))),
                        ("direction", direction.to_string()),
                        ("count", result.edges.len().to_string()),
                    ],
                )
            );
            for entry in &result.edges {
                println!("{} dir={}", edge_record(&entry.edge), entry.direction);
            }
        }
    }
    Ok(())
}
