//! wgraph - weighted graph engine CLI
//!
//! Loads an edge list or a built-in demo network and runs traversal,
//! shortest-path, cycle and export queries against it.

mod cli;
mod commands;

use std::env;
use std::process::ExitCode;
use std::time::Instant;

use clap::error::ErrorKind;
use clap::Parser;

use cli::Cli;
use wgraph_core::error::{ExitCode as GraphExitCode, GraphError};
use wgraph_core::format::OutputFormat;
use wgraph_core::logging;

fn main() -> ExitCode {
    let start = Instant::now();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) if wants_json(env::args().skip(1)) => return parse_failure_as_json(err),
        Err(err) => err.exit(),
    };

    if let Err(e) = logging::init_tracing(cli.verbose, cli.log_level.as_deref(), cli.log_json) {
        eprintln!("warning: logging disabled: {}", e);
    }
    tracing::debug!(elapsed = ?start.elapsed(), "parse_args");

    match commands::dispatch::run(&cli, start) {
        Ok(()) => exit_with(GraphExitCode::Success),
        Err(e) => {
            report(&cli, &e);
            exit_with(e.exit_code())
        }
    }
}

fn exit_with(code: GraphExitCode) -> ExitCode {
    ExitCode::from(code as u8)
}

fn report(cli: &Cli, error: &GraphError) {
    match cli.format {
        OutputFormat::Json => eprintln!("{}", error.to_json()),
        OutputFormat::Human if cli.quiet => {}
        OutputFormat::Human => eprintln!("error: {}", error),
    }
}

/// Emit a clap failure as the JSON error envelope.
///
/// Help and version requests are not failures and still go through clap.
fn parse_failure_as_json(err: clap::Error) -> ExitCode {
    let error = match err.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => err.exit(),
        ErrorKind::ValueValidation
        | ErrorKind::InvalidValue
        | ErrorKind::InvalidSubcommand
        | ErrorKind::UnknownArgument
        | ErrorKind::ArgumentConflict
        | ErrorKind::MissingRequiredArgument => GraphError::UsageError(err.to_string()),
        _ => GraphError::Other(err.to_string()),
    };

    eprintln!("{}", error.to_json());
    exit_with(error.exit_code())
}

/// Scan raw arguments for `--format json`, since `Cli` does not exist when
/// parsing fails. Matches case-insensitively like `OutputFormat::from_str`.
fn wants_json<I>(args: I) -> bool
where
    I: IntoIterator<Item = String>,
{
    let mut args = args.into_iter();
    while let Some(arg) = args.next() {
        let value = match arg.strip_prefix("--format") {
            Some("") => args.next(),
            Some(rest) => rest.strip_prefix('=').map(str::to_string),
            None => None,
        };
        if value.is_some_and(|v| v.eq_ignore_ascii_case("json")) {
            return true;
        }
    }
    false
}
