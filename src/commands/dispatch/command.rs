//! Command trait and context for dispatching commands

use std::time::Instant;

use favpath_core::config::Config;
use favpath_core::error::Result;

use crate::cli::{Cli, OutputFormat};

/// Shared context for command execution
pub struct CommandContext<'a> {
    pub cli: &'a Cli,
    pub config: Config,
    pub start: Instant,
}

impl<'a> CommandContext<'a> {
    pub fn new(cli: &'a Cli, config: Config, start: Instant) -> Self {
        Self { cli, config, start }
    }

    /// `--format` if given, else the configured default
    pub fn format(&self) -> Result<OutputFormat> {
        match self.cli.format {
            Some(format) => Ok(format),
            None => self.config.default_format.parse(),
        }
    }
}

/// Trait for commands that can be executed
pub trait Command {
    fn execute(&self, ctx: &CommandContext) -> Result<()>;
}

/// No-op command (when no subcommand is provided)
pub struct NoCommand;

impl Command for NoCommand {
    fn execute(&self, _ctx: &CommandContext) -> Result<()> {
        println!("favpath {}", env!("CARGO_PKG_VERSION"));
        println!();
        println!("Favored-path search over weighted hypergraphs.");
        println!();
        println!("Run `favpath --help` for usage information.");
        Ok(())
    }
}
