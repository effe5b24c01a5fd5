//! Command trait and context for dispatching commands

use std::path::{Path, PathBuf};
use std::time::Instant;

use crate::cli::{Cli, GraphSource};
use wgraph_core::bail_usage;
use wgraph_core::config::EngineConfig;
use wgraph_core::error::Result;
use wgraph_core::graph::{load_edge_list, DemoGraph, EdgeKind, Graph};

/// Build the graph a command runs against
pub fn load_graph(source: &GraphSource, root: &Path, config: &EngineConfig) -> Result<Graph<String>> {
    if let Some(name) = &source.demo {
        let demo: DemoGraph = name.parse()?;
        if source.directed || source.undirected {
            tracing::debug!(demo = %demo, "edge direction flags ignored for demo graphs");
        }
        return Ok(demo.build());
    }

    let Some(input) = &source.input else {
        bail_usage!("no graph given: pass --input <file> or --demo <name>");
    };

    let kind = if source.undirected {
        EdgeKind::Undirected
    } else if source.directed {
        EdgeKind::Directed
    } else {
        config.graph.edge_kind()
    };

    let path = if input.is_absolute() {
        input.clone()
    } else {
        root.join(input)
    };

    load_edge_list(&path, kind, config.graph.default_weight)
}

/// Shared context for command execution
pub struct CommandContext<'a> {
    pub cli: &'a Cli,
    pub root: &'a PathBuf,
    pub config: EngineConfig,
    pub start: Instant,
}

impl<'a> CommandContext<'a> {
    pub fn new(cli: &'a Cli, root: &'a PathBuf, config: EngineConfig, start: Instant) -> Self {
        Self {
            cli,
            root,
            config,
            start,
        }
    }

    pub fn load_graph(&self, source: &GraphSource) -> Result<Graph<String>> {
        load_graph(source, self.root, &self.config)
    }
}

/// Trait for commands that can be executed
pub trait Command {
    fn execute(&self, ctx: &CommandContext) -> Result<()>;
}

/// No-op command (when no subcommand is provided)
pub struct NoCommand;

impl Command for NoCommand {
    fn execute(&self, _ctx: &CommandContext) -> Result<()> {
        println!("wgraph {}", env!("CARGO_PKG_VERSION"));
        println!();
        println!("A weighted graph engine: traversal, shortest paths, cycles, export.");
        println!();
        println!("Run `wgraph --help` for usage information.");
        Ok(())
    }
}
