//! `wgraph demos` command - list the built-in networks

use serde_json::json;

use crate::cli::Cli;
use crate::commands::json_builders::print_json;
use crate::output_by_format;
use wgraph_core::error::Result;
use wgraph_core::graph::DemoGraph;

pub fn execute(cli: &Cli) -> Result<()> {
    output_by_format!(cli.format,
        json => {
            let demos: Vec<_> = DemoGraph::ALL
                .iter()
                .map(|demo| {
                    let graph = demo.build();
                    json!({
                        "name": demo.name(),
                        "vertices": graph.vertex_count(),
                        "edges": graph.edge_count(),
                    })
                })
                .collect();
            print_json(&json!({ "demos": demos }))?;
        },
        human => {
            for demo in DemoGraph::ALL {
                let graph = demo.build();
                println!(
                    "{:<18} {} vertices, {} edges",
                    demo.name(),
                    graph.vertex_count(),
                    graph.edge_count()
                );
            }
        }
    );

    Ok(())
}
