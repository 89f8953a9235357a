use std::path::PathBuf;

use clap::Args;
use favpath_core::graph::{Direction, WeightPreference};

use super::parse::{parse_direction, parse_preference};

#[derive(Args, Debug, Clone)]
pub struct PathArgs {
    /// Graph document (.json, .toml, .yaml)
    pub file: PathBuf,

    /// Node the path starts from
    #[arg(long)]
    pub from: String,

    /// Node the path must reach
    #[arg(long)]
    pub to: String,

    /// Which weight tier to try first: high or low
    #[arg(long, value_parser = parse_preference)]
    pub prefer: Option<WeightPreference>,
}

#[derive(Args, Debug, Clone)]
pub struct ShowArgs {
    /// Graph document (.json, .toml, .yaml)
    pub file: PathBuf,
}

#[derive(Args, Debug, Clone)]
pub struct EdgesArgs {
    /// Graph document (.json, .toml, .yaml)
    pub file: PathBuf,

    /// Node whose edges to list
    #[arg(long)]
    pub node: String,

    /// out (node is a source), in (node is a target), or both
    #[arg(long, value_parser = parse_direction)]
    pub direction: Option<Direction>,
}
