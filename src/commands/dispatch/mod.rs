//! Command dispatch logic for wgraph

use std::env;
use std::path::PathBuf;
use std::time::Instant;

use crate::cli::Cli;
use tracing::debug;
use wgraph_core::config::EngineConfig;
use wgraph_core::error::Result;

mod command;
mod commands;
mod macros;

use command::{Command, CommandContext, NoCommand};
pub(crate) use macros::trace_command;

pub fn run(cli: &Cli, start: Instant) -> Result<()> {
    let root = env::current_dir().unwrap_or_else(|_| PathBuf::from("."));

    let config = EngineConfig::discover(cli.config.as_deref(), &root)?;
    debug!(elapsed = ?start.elapsed(), "load_config");

    let ctx = CommandContext::new(cli, &root, config, start);

    match &cli.command {
        None => NoCommand.execute(&ctx),
        Some(cmd) => cmd.execute(&ctx),
    }
}
