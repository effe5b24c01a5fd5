//! Flat-text edge-list export
//!
//! One edge per line, `<from> <to>` or `<from> <to> <weight>` with exactly
//! one fractional digit. Vertices are written in ascending order and each
//! vertex's neighbors in insertion order. Labels are written with their
//! `Display` form and are not escaped, so labels containing whitespace do
//! not survive a round trip.

use std::collections::HashSet;
use std::fmt::{Display, Write as _};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{GraphError, Result};
use crate::format::format_weight;
use crate::graph::store::Graph;

/// Separator used to build the canonical key of an unordered vertex pair
pub const KEY_SEPARATOR: &str = "→";

/// Options for [`write_edges`] and [`export_to_file`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportOptions {
    /// Append the weight column
    #[serde(default = "default_include_weights")]
    pub include_weights: bool,

    /// Write each unordered vertex pair only once
    #[serde(default)]
    pub deduplicate_undirected: bool,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            include_weights: default_include_weights(),
            deduplicate_undirected: false,
        }
    }
}

fn default_include_weights() -> bool {
    true
}

/// Result of a successful export
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExportSummary {
    pub path: PathBuf,
    pub lines: usize,
}

/// Key shared by `(u, v)` and `(v, u)`: the smaller label first
pub fn canonical_key<V: Ord + Display>(u: &V, v: &V) -> String {
    if u <= v {
        format!("{}{}{}", u, KEY_SEPARATOR, v)
    } else {
        format!("{}{}{}", v, KEY_SEPARATOR, u)
    }
}

/// Write the edge list to `writer`, returning the number of lines written.
///
/// With `deduplicate_undirected`, only the first edge seen for each
/// canonical key is written. This folds the two halves of an undirected
/// edge into one line, and also folds genuinely distinct directed edges
/// over the same pair (`A->B` and `B->A`, or parallel edges).
///
/// Weights are written with one decimal and exact ties round away from
/// zero, see [`format_weight`].
pub fn write_edges<V, W>(graph: &Graph<V>, writer: &mut W, options: &ExportOptions) -> io::Result<usize>
where
    V: Ord + Clone + Display,
    W: Write + ?Sized,
{
    let mut seen: HashSet<String> = HashSet::new();
    let mut lines = 0;

    for (from, edge) in graph.edges() {
        if options.deduplicate_undirected && !seen.insert(canonical_key(from, &edge.vertex)) {
            continue;
        }

        if options.include_weights {
            writeln!(writer, "{} {} {}", from, edge.vertex, format_weight(edge.weight))?;
        } else {
            writeln!(writer, "{} {}", from, edge.vertex)?;
        }
        lines += 1;
    }

    Ok(lines)
}

/// Export the edge list to `path`.
///
/// Open and write failures come back as [`GraphError::Export`], which
/// callers treat as non-fatal. The file is closed before returning on every
/// path.
#[tracing::instrument(skip(graph, path, options), fields(path = %path.as_ref().display()))]
pub fn export_to_file<V>(
    graph: &Graph<V>,
    path: impl AsRef<Path>,
    options: &ExportOptions,
) -> Result<ExportSummary>
where
    V: Ord + Clone + Display,
{
    let path = path.as_ref();
    let file = File::create(path).map_err(|e| GraphError::export(path, e))?;
    let mut writer = BufWriter::new(file);

    let lines = write_edges(graph, &mut writer, options).map_err(|e| GraphError::export(path, e))?;
    writer.flush().map_err(|e| GraphError::export(path, e))?;

    tracing::info!(lines, "export_complete");
    Ok(ExportSummary {
        path: path.to_path_buf(),
        lines,
    })
}

/// One line per vertex in ascending order: `A: [B(2.0), C(3.0)]`
pub fn render_structure<V>(graph: &Graph<V>) -> String
where
    V: Ord + Clone + Display,
{
    let mut out = String::new();
    for vertex in graph.vertices() {
        let neighbors = graph
            .neighbors(vertex)
            .iter()
            .map(|n| format!("{}({})", n.vertex, format_weight(n.weight)))
            .collect::<Vec<_>>()
            .join(", ");
        let _ = writeln!(out, "{}: [{}]", vertex, neighbors);
    }
    out
}
