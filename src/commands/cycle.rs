//! `wgraph cycle` command

use serde_json::json;

use crate::cli::Cli;
use crate::commands::json_builders::print_json;
use crate::output_by_format;
use wgraph_core::error::Result;
use wgraph_core::graph::{has_cycle, has_undirected_cycle, Graph};

/// Detect a cycle.
///
/// Plain mode treats the store as directed, so any undirected edge is
/// reported as a cycle. `undirected_aware` ignores the edge back to the
/// vertex a DFS step came from.
pub fn execute(cli: &Cli, graph: &Graph<String>, undirected_aware: bool) -> Result<()> {
    let (found, mode) = if undirected_aware {
        (has_undirected_cycle(graph), "undirected")
    } else {
        (has_cycle(graph), "directed")
    };

    output_by_format!(cli.format,
        json => {
            print_json(&json!({ "has_cycle": found, "mode": mode }))?;
        },
        human => {
            println!("{}", if found { "cycle found" } else { "no cycle" });
        }
    );

    Ok(())
}
