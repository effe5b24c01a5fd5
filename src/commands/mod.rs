//! CLI commands for wgraph

pub mod cycle;
pub mod demos;
pub mod dijkstra;
pub mod dispatch;
pub mod export;
pub mod json_builders;
pub mod show;
pub mod stats;
pub mod traverse;
pub mod vertex;
