//! Main CLI commands enum

use clap::Subcommand;

use crate::cli::args::*;

/// Top-level wgraph commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Vertex and edge counts, density, total weight
    Stats(GraphArgs),

    /// Print every vertex with its neighbor list
    Show(GraphArgs),

    /// Out-degree and in-degree of a vertex
    Degree(VertexArgs),

    /// Neighbors of a vertex with edge weights
    Neighbors(VertexArgs),

    /// Check whether a directed edge exists
    HasEdge(HasEdgeArgs),

    /// Breadth-first order, or fewest-hop path with --to
    Bfs(BfsArgs),

    /// Depth-first order
    Dfs(DfsArgs),

    /// Detect a cycle anywhere in the graph
    Cycle(CycleArgs),

    /// Weighted shortest paths from a source vertex
    Dijkstra(DijkstraArgs),

    /// Write the graph as an edge-list file
    Export(ExportArgs),

    /// List the built-in demo networks
    Demos,
}
