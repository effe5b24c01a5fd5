//! CLI argument parsing for wgraph
//!
//! Global flags: --format, --quiet, --verbose, --log-level, --log-json,
//! --config. Every query command takes its own graph source.

pub mod args;
pub mod commands;
pub mod format;
pub mod parse;

use clap::Parser;
use std::path::PathBuf;

pub use args::GraphSource;
pub use commands::Commands;
use parse::parse_output_format;
pub use wgraph_core::format::OutputFormat;

/// wgraph - weighted graph engine
#[derive(Parser, Debug)]
#[command(name = "wgraph")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format (human, json)
    #[arg(long, global = true, default_value = "human", value_parser = parse_output_format)]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level or filter directive (e.g. debug, wgraph_core=trace)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON on stderr
    #[arg(long, global = true)]
    pub log_json: bool,

    /// Configuration file (defaults to ./wgraph.toml when present)
    #[arg(long, global = true, env = "WGRAPH_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}
