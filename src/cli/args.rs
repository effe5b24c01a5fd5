use std::path::PathBuf;

use clap::Args;

use super::parse::parse_vertex;

/// Where a command gets its graph from
#[derive(Args, Debug, Clone, Default)]
pub struct GraphSource {
    /// Edge-list file, one `<from> <to> [weight]` per line
    #[arg(long, short, conflicts_with = "demo")]
    pub input: Option<PathBuf>,

    /// Built-in demo network (see `wgraph demos`)
    #[arg(long, short)]
    pub demo: Option<String>,

    /// Load every input line in both directions
    #[arg(long, conflicts_with = "directed")]
    pub undirected: bool,

    /// Load input lines as one-way edges
    #[arg(long)]
    pub directed: bool,
}

/// Arguments for commands that only need a graph.
#[derive(Args, Debug)]
pub struct GraphArgs {
    #[command(flatten)]
    pub graph: GraphSource,
}

/// Arguments for single-vertex lookups.
#[derive(Args, Debug)]
pub struct VertexArgs {
    /// Vertex label
    #[arg(value_parser = parse_vertex)]
    pub vertex: String,

    #[command(flatten)]
    pub graph: GraphSource,
}

/// Arguments for the has-edge command.
#[derive(Args, Debug)]
pub struct HasEdgeArgs {
    /// Edge tail
    #[arg(value_parser = parse_vertex)]
    pub from: String,

    /// Edge head
    #[arg(value_parser = parse_vertex)]
    pub to: String,

    #[command(flatten)]
    pub graph: GraphSource,
}

/// Arguments for the bfs command.
#[derive(Args, Debug)]
pub struct BfsArgs {
    /// Vertex to start from
    #[arg(value_parser = parse_vertex)]
    pub start: String,

    /// Print the fewest-hop path to this vertex instead of the visit order
    #[arg(long, value_parser = parse_vertex)]
    pub to: Option<String>,

    #[command(flatten)]
    pub graph: GraphSource,
}

/// Arguments for the dfs command.
#[derive(Args, Debug)]
pub struct DfsArgs {
    /// Vertex to start from
    #[arg(value_parser = parse_vertex)]
    pub start: String,

    /// Use the explicit-stack traversal
    #[arg(long)]
    pub iterative: bool,

    #[command(flatten)]
    pub graph: GraphSource,
}

/// Arguments for the cycle command.
#[derive(Args, Debug)]
pub struct CycleArgs {
    /// Do not count the reverse half of an undirected edge as a cycle
    #[arg(long)]
    pub undirected_aware: bool,

    #[command(flatten)]
    pub graph: GraphSource,
}

/// Arguments for the dijkstra command.
#[derive(Args, Debug)]
pub struct DijkstraArgs {
    /// Source vertex
    #[arg(value_parser = parse_vertex)]
    pub source: String,

    /// Print only the path to this vertex
    #[arg(long, value_parser = parse_vertex)]
    pub to: Option<String>,

    #[command(flatten)]
    pub graph: GraphSource,
}

/// Arguments for the export command.
#[derive(Args, Debug)]
pub struct ExportArgs {
    /// Output file
    pub output: PathBuf,

    /// Omit the weight column
    #[arg(long)]
    pub no_weights: bool,

    /// Write each unordered vertex pair once
    #[arg(long)]
    pub dedup: bool,

    #[command(flatten)]
    pub graph: GraphSource,
}
