//! `wgraph stats` command

use crate::cli::Cli;
use crate::commands::json_builders::print_json;
use crate::output_by_format;
use wgraph_core::error::Result;
use wgraph_core::graph::{Graph, GraphStats};

pub fn execute(cli: &Cli, graph: &Graph<String>) -> Result<()> {
    let stats = GraphStats::compute(graph);

    output_by_format!(cli.format,
        json => {
            print_json(&serde_json::to_value(&stats)?)?;
        },
        human => {
            println!("vertices: {}", stats.vertices);
            println!("edges: {}", stats.edges);
            println!("density: {:.3}", stats.density);
            println!("total weight: {:.1}", stats.total_weight);
            if let Some(best) = &stats.most_connected {
                println!(
                    "most connected: {} (out {}, in {})",
                    best.vertex, best.out_degree, best.in_degree
                );
            }
        }
    );

    Ok(())
}
