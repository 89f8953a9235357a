//! CLI argument parsing for favpath
//!
//! Global flags: --format, --quiet, --verbose, --log-level, --log-json, --config

pub mod args;
pub mod output;
pub mod parse;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub use args::{EdgesArgs, PathArgs, ShowArgs};
pub use output::OutputFormat;

/// favpath - favored-path search over weighted hypergraphs
#[derive(Parser, Debug)]
#[command(name = "favpath")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format (defaults to the configured format, else human)
    #[arg(long, global = true, value_enum)]
    pub format: Option<OutputFormat>,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level or filter directive (e.g. "debug", "favpath_core=trace")
    #[arg(long, global = true, env = "FAVPATH_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    pub log_json: bool,

    /// Config file (defaults to ~/.config/favpath/config.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Find the favored path between two nodes
    Path(PathArgs),

    /// List the nodes and edges of a graph
    Show(ShowArgs),

    /// List the edges touching a node
    Edges(EdgesArgs),
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use favpath_core::graph::{Direction, WeightPreference};

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_path_command() {
        let cli = Cli::try_parse_from([
            "favpath", "path", "net.toml", "--from", "A", "--to", "C", "--prefer", "low",
        ])
        .unwrap();
        match cli.command {
            Some(Commands::Path(args)) => {
                assert_eq!(args.from, "A");
                assert_eq!(args.to, "C");
                assert_eq!(args.prefer, Some(WeightPreference::Low));
            }
            other => panic!("unexpected command: {:?}", other),
        }
        assert!(cli.format.is_none());
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "favpath", "edges", "net.json", "--node", "B", "--direction", "in", "--format",
            "records",
        ])
        .unwrap();
        assert_eq!(cli.format, Some(OutputFormat::Records));
        match cli.command {
            Some(Commands::Edges(args)) => assert_eq!(args.direction, Some(Direction::In)),
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_rejects_unknown_preference() {
        assert!(Cli::try_parse_from([
            "favpath", "path", "net.toml", "--from", "A", "--to", "C", "--prefer", "middle",
        ])
        .is_err());
    }
}
