//! Graph algorithm implementations
//!
//! Contains concrete implementations of graph algorithms:
//! - `bfs`: Breadth-first order and unweighted shortest path
//! - `dfs`: Recursive and stack-based depth-first order
//! - `cycle`: Depth-first cycle detection
//! - `dijkstra`: Weighted single-source shortest paths

pub mod bfs;
pub mod cycle;
pub mod dfs;
pub mod dijkstra;

pub use bfs::{bfs_order, bfs_path};
pub use cycle::{has_cycle, has_undirected_cycle};
pub use dfs::{dfs_iterative, dfs_recursive};
pub use dijkstra::{dijkstra, dijkstra_checked, HeapEntry, ShortestPaths};
