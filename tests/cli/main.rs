//! Integration tests for the wgraph binary

mod config;
mod errors;
mod export;
mod logging;
mod paths;
mod queries;
mod support;
mod traversal;
