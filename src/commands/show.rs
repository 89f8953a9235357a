//! `favpath show` command - list the nodes and edges of a graph

use favpath_core::error::Result;
use favpath_core::graph::{Arena, EdgeSummary, GraphDisplay, HyperGraph};
use serde::Serialize;

use super::format::{edge_line, edge_record, node_record, print_json, records_header};
use super::helpers::load;
use crate::cli::{OutputFormat, ShowArgs};
use crate::commands::dispatch::CommandContext;

#[derive(Debug, Serialize)]
pub struct GraphSummary {
    pub node_count: usize,
    pub edge_count: usize,
    pub nodes: Vec<String>,
    pub edges: Vec<EdgeSummary>,
}

impl GraphSummary {
    pub fn from_graph(arena: &Arena, graph: &HyperGraph) -> Self {
        GraphSummary {
            node_count: graph.node_count(),
            edge_count: graph.edge_count(),
            nodes: graph
                .nodes()
                .iter()
                .map(|n| arena.node_name(*n).to_string())
                .collect(),
            edges: graph
                .edges()
                .iter()
                .map(|e| EdgeSummary::from_edge(arena, *e))
                .collect(),
        }
    }
}

/// Execute the show command
pub fn execute(ctx: &CommandContext, args: &ShowArgs) -> Result<()> {
    let format = ctx.format()?;
    let loaded = load(&args.file)?;
    let summary = GraphSummary::from_graph(&loaded.arena, &loaded.graph);

    match format {
        OutputFormat::Json => print_json(&summary)?,
        OutputFormat::Human => {
            if !ctx.cli.quiet {
                println!(
                    "Graph: {}",
                    GraphDisplay::new(&loaded.arena, &loaded.graph)
                );
            }
            println!("Nodes ({}): {}", summary.node_count, summary.nodes.join(", "));
            println!("Edges ({}):", summary.edge_count);
            for edge in &summary.edges {
                println!("  {}", edge_line(edge));
            }
        }
        OutputFormat::Records => {
            println!(
                "{}",
                records_header(
                    "show",
                    &[
                        ("nodes", summary.node_count.to_string()),
                        ("edges", summary.edge_count.to_string()),
                    ],
                )
            );
            for node in &summary.nodes {
                println!("{}", node_record(node));
            }
            for edge in &summary.edges {
                println!("{}", edge_record(edge));
            }
        }
    }
    Ok(())
}
