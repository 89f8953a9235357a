//! `favpath path` command - find the favored path between two nodes

use std::time::Instant;

use favpath_core::error::Result;
use favpath_core::graph::{favored_path, PathResult};
use favpath_core::trace_time;

use super::format::{edge_line, edge_record, node_record, print_json, records_header};
use super::helpers::{load, resolve_node};
use crate::cli::{OutputFormat, PathArgs};
use crate::commands::dispatch::CommandContext;

/// Execute the path command
pub fn execute(ctx: &CommandContext, args: &PathArgs) -> Result<()> {
    let format = ctx.format()?;
    let preference = args.prefer.unwrap_or(ctx.config.default_preference);

    let mut loaded = load(&args.file)?;
    let source = resolve_node(&loaded.graph, &args.from)?;
    let target = resolve_node(&loaded.graph, &args.to)?;

    let start = Instant::now();
    let path = favored_path(&mut loaded.arena, &loaded.graph, source, target, preference);
    trace_time!(start, "favored_path", edges = path.edge_count());

    let result = PathResult::from_graph(&loaded.arena, &path, &args.from, &args.to, preference);

    match format {
        OutputFormat::Json => print_json(&result)?,
        OutputFormat::Human => output_human(ctx, &result),
        OutputFormat::Records => output_records(&result),
    }
    Ok(())
}

fn output_human(ctx: &CommandContext, result: &PathResult) {
    if !result.found {
        println!(
            "No path found from {} to {} (prefer {})",
            result.from, result.to, result.preference
        );
        return;
    }
    if !ctx.cli.quiet {
        println!(
            "Path from {} to {} (prefer {}, {} edges):",
            result.from, result.to, result.preference, result.path_length
        );
    }
    for edge in &result.edges {
        println!("  {}", edge_line(edge));
    }
}

fn output_records(result: &PathResult) {
    println!(
        "{}",
        records_header(
            "path",
            &[
                ("from", result.from.clone()),
                ("to", result.to.clone()),
                ("prefer", result.preference.clone()),
                ("found", result.found.to_string()),
                ("length", result.path_length.to_string()),
            ],
        )
    );
    for edge in &result.edges {
        println!("{}", edge_record(edge));
    }
    for node in &result.nodes {
        println!("{}", node_record(node));
    }
}
