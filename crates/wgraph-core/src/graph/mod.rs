//! Weighted graph engine
//!
//! Provides the adjacency-list store and the algorithms that read it:
//! - BFS order and unweighted shortest paths
//! - DFS order and cycle detection
//! - Dijkstra shortest paths
//! - Edge-list export and loading, statistics, demo networks

pub mod algos;
pub mod demo;
pub mod export;
pub mod load;
pub mod path;
pub mod stats;
pub mod store;
pub mod traversal;

pub use algos::{
    bfs_order, bfs_path, dfs_iterative, dfs_recursive, dijkstra, dijkstra_checked, has_cycle,
    has_undirected_cycle, ShortestPaths,
};
pub use demo::DemoGraph;
pub use export::{export_to_file, render_structure, write_edges, ExportOptions, ExportSummary};
pub use load::{load_edge_list, parse_edge_list};
pub use stats::{GraphStats, VertexDegree};
pub use store::{EdgeKind, Graph, Neighbor, DEFAULT_WEIGHT};
pub use traversal::GraphProvider;
