//! Command implementations for all wgraph commands

use crate::cli::Commands;
use crate::commands::dispatch::command::{Command, CommandContext};
use wgraph_core::error::Result;

impl Command for Commands {
    fn execute(&self, ctx: &CommandContext) -> Result<()> {
        dispatch_command::execute(self, ctx)
    }
}

pub(super) mod dispatch_command {
    use super::*;

    use crate::cli::args::*;
    use crate::commands;
    use crate::commands::dispatch::trace_command;
    use wgraph_core::graph::ExportOptions;

    pub(super) fn execute(cmd: &Commands, ctx: &CommandContext) -> Result<()> {
        match cmd {
            Commands::Stats(args) => execute_stats(ctx, args),
            Commands::Show(args) => execute_show(ctx, args),
            Commands::Degree(args) => execute_degree(ctx, args),
            Commands::Neighbors(args) => execute_neighbors(ctx, args),
            Commands::HasEdge(args) => execute_has_edge(ctx, args),
            Commands::Bfs(args) => execute_bfs(ctx, args),
            Commands::Dfs(args) => execute_dfs(ctx, args),
            Commands::Cycle(args) => execute_cycle(ctx, args),
            Commands::Dijkstra(args) => execute_dijkstra(ctx, args),
            Commands::Export(args) => execute_export(ctx, args),
            Commands::Demos => commands::demos::execute(ctx.cli),
        }
    }

    fn execute_stats(ctx: &CommandContext, args: &GraphArgs) -> Result<()> {
        let graph = ctx.load_graph(&args.graph)?;
        trace_command!(ctx.start, "load_graph");
        commands::stats::execute(ctx.cli, &graph)
    }

    fn execute_show(ctx: &CommandContext, args: &GraphArgs) -> Result<()> {
        let graph = ctx.load_graph(&args.graph)?;
        trace_command!(ctx.start, "load_graph");
        commands::show::execute(ctx.cli, &graph)
    }

    fn execute_degree(ctx: &CommandContext, args: &VertexArgs) -> Result<()> {
        let graph = ctx.load_graph(&args.graph)?;
        trace_command!(ctx.start, "load_graph");
        commands::vertex::execute_degree(ctx.cli, &graph, &args.vertex)
    }

    fn execute_neighbors(ctx: &CommandContext, args: &VertexArgs) -> Result<()> {
        let graph = ctx.load_graph(&args.graph)?;
        trace_command!(ctx.start, "load_graph");
        commands::vertex::execute_neighbors(ctx.cli, &graph, &args.vertex)
    }

    fn execute_has_edge(ctx: &CommandContext, args: &HasEdgeArgs) -> Result<()> {
        let graph = ctx.load_graph(&args.graph)?;
        trace_command!(ctx.start, "load_graph");
        commands::vertex::execute_has_edge(ctx.cli, &graph, &args.from, &args.to)
    }

    fn execute_bfs(ctx: &CommandContext, args: &BfsArgs) -> Result<()> {
        let graph = ctx.load_graph(&args.graph)?;
        trace_command!(ctx.start, "load_graph");
        commands::traverse::execute_bfs(ctx.cli, &graph, &args.start, args.to.as_ref())
    }

    fn execute_dfs(ctx: &CommandContext, args: &DfsArgs) -> Result<()> {
        let graph = ctx.load_graph(&args.graph)?;
        trace_command!(ctx.start, "load_graph");
        commands::traverse::execute_dfs(ctx.cli, &graph, &args.start, args.iterative)
    }

    fn execute_cycle(ctx: &CommandContext, args: &CycleArgs) -> Result<()> {
        let graph = ctx.load_graph(&args.graph)?;
        trace_command!(ctx.start, "load_graph");
        commands::cycle::execute(ctx.cli, &graph, args.undirected_aware)
    }

    fn execute_dijkstra(ctx: &CommandContext, args: &DijkstraArgs) -> Result<()> {
        let graph = ctx.load_graph(&args.graph)?;
        trace_command!(ctx.start, "load_graph");
        commands::dijkstra::execute(
            ctx.cli,
            &graph,
            &args.source,
            args.to.as_ref(),
            &ctx.config.dijkstra,
        )
    }

    fn execute_export(ctx: &CommandContext, args: &ExportArgs) -> Result<()> {
        let graph = ctx.load_graph(&args.graph)?;
        trace_command!(ctx.start, "load_graph");

        let defaults = ctx.config.export;
        let options = ExportOptions {
            include_weights: defaults.include_weights && !args.no_weights,
            deduplicate_undirected: defaults.deduplicate_undirected || args.dedup,
        };

        let output = if args.output.is_absolute() {
            args.output.clone()
        } else {
            ctx.root.join(&args.output)
        };
        commands::export::execute(ctx.cli, &graph, &output, &options)
    }
}
