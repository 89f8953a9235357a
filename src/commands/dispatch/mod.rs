//! Command dispatch logic for favpath

use std::time::Instant;

use favpath_core::config::Config;
use favpath_core::error::Result;
use favpath_core::trace_time;
use tracing::debug;

use crate::cli::{Cli, Commands};

mod command;

pub use command::{Command, CommandContext, NoCommand};

pub fn run(cli: &Cli, start: Instant) -> Result<()> {
    let config = Config::resolve(cli.config.as_deref())?;
    debug!(elapsed = ?start.elapsed(), "load_config");

    let ctx = CommandContext::new(cli, config, start);

    match &cli.command {
        None => NoCommand.execute(&ctx),
        Some(cmd) => cmd.execute(&ctx),
    }
}

impl Command for Commands {
    fn execute(&self, ctx: &CommandContext) -> Result<()> {
        let result = match self {
            Commands::Path(args) => crate::commands::path::execute(ctx, args),
            Commands::Show(args) => crate::commands::show::execute(ctx, args),
            Commands::Edges(args) => crate::commands::edges::execute(ctx, args),
        };
        trace_time!(ctx.start, "command_done");
        result
    }
}
