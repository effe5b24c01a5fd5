//! `wgraph dijkstra` command - weighted shortest paths

use serde_json::json;

use crate::cli::Cli;
use crate::commands::json_builders::{distance_json, print_json};
use crate::output_by_format;
use wgraph_core::config::DijkstraConfig;
use wgraph_core::error::Result;
use wgraph_core::format::{format_distance, format_sequence};
use wgraph_core::graph::{dijkstra, dijkstra_checked, Graph, ShortestPaths};

pub fn execute(
    cli: &Cli,
    graph: &Graph<String>,
    source: &String,
    target: Option<&String>,
    config: &DijkstraConfig,
) -> Result<()> {
    let result = if config.reject_negative_weights {
        dijkstra_checked(graph, source)?
    } else {
        dijkstra(graph, source)
    };

    match target {
        Some(end) => print_single(cli, &result, end),
        None => print_all(cli, &result),
    }
}

fn print_single(cli: &Cli, result: &ShortestPaths<String>, end: &String) -> Result<()> {
    let distance = result.distance(end).unwrap_or(f64::INFINITY);
    let path = result.path_to(end);

    output_by_format!(cli.format,
        json => {
            print_json(&json!({
                "source": result.source,
                "target": end,
                "distance": distance_json(distance),
                "path": path,
            }))?;
        },
        human => {
            if path.is_empty() {
                println!("no path from {} to {}", result.source, end);
            } else {
                println!("{} ({})", format_sequence(&path), format_distance(distance));
            }
        }
    );

    Ok(())
}

fn print_all(cli: &Cli, result: &ShortestPaths<String>) -> Result<()> {
    output_by_format!(cli.format,
        json => {
            let distances: Vec<_> = result
                .distances
                .iter()
                .map(|(vertex, distance)| {
                    json!({
                        "vertex": vertex,
                        "distance": distance_json(*distance),
                        "path": result.path_to(vertex),
                    })
                })
                .collect();
            print_json(&json!({ "source": result.source, "distances": distances }))?;
        },
        human => {
            for (vertex, distance) in &result.distances {
                if distance.is_finite() {
                    println!(
                        "{}: {} ({})",
                        vertex,
                        format_distance(*distance),
                        format_sequence(&result.path_to(vertex))
                    );
                } else {
                    println!("{}: {}", vertex, format_distance(*distance));
                }
            }
        }
    );

    Ok(())
}
