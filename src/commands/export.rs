//! `wgraph export` command - write the graph as an edge list
//!
//! A failed write is reported as a warning and does not change the exit
//! status.

use std::path::Path;

use serde_json::json;

use crate::cli::Cli;
use crate::commands::json_builders::print_json;
use crate::output_by_format;
use wgraph_core::error::Result;
use wgraph_core::graph::{export_to_file, ExportOptions, Graph};

pub fn execute(
    cli: &Cli,
    graph: &Graph<String>,
    output: &Path,
    options: &ExportOptions,
) -> Result<()> {
    match export_to_file(graph, output, options) {
        Ok(summary) => {
            output_by_format!(cli.format,
                json => {
                    print_json(&json!({
                        "status": "exported",
                        "path": summary.path,
                        "lines": summary.lines,
                    }))?;
                },
                human => {
                    if !cli.quiet {
                        println!("exported {} edges to {}", summary.lines, summary.path.display());
                    }
                }
            );
            Ok(())
        }
        Err(e) if e.is_recoverable() => {
            tracing::warn!(error = %e, "export_failed");
            output_by_format!(cli.format,
                json => {
                    print_json(&json!({
                        "status": "failed",
                        "path": output,
                        "error": e.to_json()["error"],
                    }))?;
                },
                human => {
                    if !cli.quiet {
                        eprintln!("warning: {}", e);
                    }
                }
            );
            Ok(())
        }
        Err(e) => Err(e),
    }
}
