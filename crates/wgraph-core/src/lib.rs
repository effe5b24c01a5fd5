//! wgraph core library
//!
//! Weighted graph engine over ordered vertex labels: adjacency-list
//! storage, BFS/DFS traversal, cycle detection, Dijkstra shortest paths and
//! a flat-text edge-list format.

pub mod config;
pub mod error;
pub mod format;
pub mod graph;
pub mod logging;
