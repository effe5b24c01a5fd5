//! Shared JSON building utilities for consistent JSON output formats

use serde_json::{json, Value};
use wgraph_core::error::Result;
use wgraph_core::graph::{Graph, Neighbor};

/// Print a value as pretty JSON on stdout
pub fn print_json(value: &Value) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Neighbor list as `[{"vertex": .., "weight": ..}]`
pub fn neighbors_json(neighbors: &[Neighbor<String>]) -> Value {
    Value::Array(
        neighbors
            .iter()
            .map(|n| json!({ "vertex": n.vertex, "weight": n.weight }))
            .collect(),
    )
}

/// Whole adjacency structure, vertices ascending
pub fn structure_json(graph: &Graph<String>) -> Value {
    let vertices: Vec<_> = graph
        .vertices()
        .map(|v| {
            json!({
                "vertex": v,
                "neighbors": neighbors_json(graph.neighbors(v)),
            })
        })
        .collect();

    json!({ "vertices": vertices })
}

/// Finite distance as a number, unreachable as `null`
pub fn distance_json(distance: f64) -> Value {
    if distance.is_finite() {
        json!(distance)
    } else {
        Value::Null
    }
}
