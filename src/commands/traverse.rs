//! `wgraph bfs` and `wgraph dfs` commands

use serde_json::json;

use crate::cli::Cli;
use crate::commands::json_builders::print_json;
use crate::output_by_format;
use wgraph_core::error::Result;
use wgraph_core::format::format_sequence;
use wgraph_core::graph::{bfs_order, bfs_path, dfs_iterative, dfs_recursive, Graph};

pub fn execute_bfs(
    cli: &Cli,
    graph: &Graph<String>,
    start: &String,
    target: Option<&String>,
) -> Result<()> {
    match target {
        None => {
            let order = bfs_order(graph, start);
            output_by_format!(cli.format,
                json => {
                    print_json(&json!({ "start": start, "order": order }))?;
                },
                human => {
                    println!("{}", format_sequence(&order));
                }
            );
        }
        Some(end) => {
            let path = bfs_path(graph, start, end);
            let hops = path.len().checked_sub(1);
            output_by_format!(cli.format,
                json => {
                    print_json(&json!({
                        "start": start,
                        "end": end,
                        "path": path,
                        "hops": hops,
                    }))?;
                },
                human => {
                    if path.is_empty() {
                        println!("no path from {} to {}", start, end);
                    } else {
                        println!("{}", format_sequence(&path));
                    }
                }
            );
        }
    }

    Ok(())
}

pub fn execute_dfs(cli: &Cli, graph: &Graph<String>, start: &String, iterative: bool) -> Result<()> {
    let (order, strategy) = if iterative {
        (dfs_iterative(graph, start), "iterative")
    } else {
        (dfs_recursive(graph, start), "recursive")
    };

    output_by_format!(cli.format,
        json => {
            print_json(&json!({
                "start": start,
                "strategy": strategy,
                "order": order,
            }))?;
        },
        human => {
            println!("{}", format_sequence(&order));
        }
    );

    Ok(())
}
