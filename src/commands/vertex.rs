//! Single-vertex lookups: `degree`, `neighbors`, `has-edge`
//!
//! Unknown vertices are not an error: they report zero degree and no
//! neighbors.

use serde_json::json;

use crate::cli::Cli;
use crate::commands::json_builders::{neighbors_json, print_json};
use crate::output_by_format;
use wgraph_core::error::Result;
use wgraph_core::format::format_weight;
use wgraph_core::graph::Graph;

pub fn execute_degree(cli: &Cli, graph: &Graph<String>, vertex: &str) -> Result<()> {
    let out_degree = graph.out_degree(vertex);
    let in_degree = graph.in_degree(vertex);

    output_by_format!(cli.format,
        json => {
            print_json(&json!({
                "vertex": vertex,
                "known": graph.contains_vertex(vertex),
                "out_degree": out_degree,
                "in_degree": in_degree,
            }))?;
        },
        human => {
            println!("{}: out {}, in {}", vertex, out_degree, in_degree);
        }
    );

    Ok(())
}

pub fn execute_neighbors(cli: &Cli, graph: &Graph<String>, vertex: &str) -> Result<()> {
    let neighbors = graph.neighbors(vertex);

    output_by_format!(cli.format,
        json => {
            print_json(&json!({
                "vertex": vertex,
                "neighbors": neighbors_json(neighbors),
            }))?;
        },
        human => {
            if neighbors.is_empty() && !cli.quiet {
                println!("{} has no neighbors", vertex);
            }
            for neighbor in neighbors {
                println!("{} {}", neighbor.vertex, format_weight(neighbor.weight));
            }
        }
    );

    Ok(())
}

pub fn execute_has_edge(cli: &Cli, graph: &Graph<String>, from: &str, to: &str) -> Result<()> {
    let exists = graph.has_edge(from, to);

    output_by_format!(cli.format,
        json => {
            print_json(&json!({ "from": from, "to": to, "exists": exists }))?;
        },
        human => {
            println!("{} -> {}: {}", from, to, if exists { "yes" } else { "no" });
        }
    );

    Ok(())
}
