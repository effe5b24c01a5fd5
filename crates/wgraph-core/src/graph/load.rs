//! Edge-list loading, the inverse of [`export`](super::export)

use std::fs;
use std::path::Path;

use crate::error::Result;
use crate::graph::store::{EdgeKind, Graph};

/// Build a graph from edge-list text.
///
/// Each line is `<from> <to> [weight]`, whitespace separated. Blank lines
/// and `#` comments are skipped; lines with fewer than two fields are
/// skipped with a warning. A missing weight is `default_weight`, and an
/// unparsable one falls back to `default_weight` with a warning.
pub fn parse_edge_list(text: &str, kind: EdgeKind, default_weight: f64) -> Graph<String> {
    let mut graph = Graph::new();
    let mut skipped = 0usize;

    for (index, raw) in text.lines().enumerate() {
        let line_num = index + 1;
        let line = raw.trim();

        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let mut fields = line.split_whitespace();
        let (Some(from), Some(to)) = (fields.next(), fields.next()) else {
            tracing::warn!(line = line_num, content = line, "missing vertex, line skipped");
            skipped += 1;
            continue;
        };

        let weight = match fields.next() {
            None => default_weight,
            Some(raw_weight) => raw_weight.parse::<f64>().unwrap_or_else(|_| {
                tracing::warn!(
                    line = line_num,
                    weight = raw_weight,
                    "invalid weight, using default"
                );
                default_weight
            }),
        };

        graph.add_edge(from.to_string(), to.to_string(), weight, kind);
    }

    tracing::debug!(
        vertices = graph.vertex_count(),
        edges = graph.edge_count(),
        skipped,
        "edge_list_parsed"
    );
    graph
}

/// Read and parse an edge-list file
#[tracing::instrument(skip(path), fields(path = %path.as_ref().display()))]
pub fn load_edge_list(
    path: impl AsRef<Path>,
    kind: EdgeKind,
    default_weight: f64,
) -> Result<Graph<String>> {
    let text = fs::read_to_string(path.as_ref())?;
    Ok(parse_edge_list(&text, kind, default_weight))
}
