//! `wgraph show` command - print the adjacency structure

use crate::cli::Cli;
use crate::commands::json_builders::{print_json, structure_json};
use crate::output_by_format;
use wgraph_core::error::Result;
use wgraph_core::graph::{render_structure, Graph};

pub fn execute(cli: &Cli, graph: &Graph<String>) -> Result<()> {
    output_by_format!(cli.format,
        json => {
            print_json(&structure_json(graph))?;
        },
        human => {
            if graph.is_empty() {
                if !cli.quiet {
                    println!("graph is empty");
                }
            } else {
                print!("{}", render_structure(graph));
            }
        }
    );

    Ok(())
}
