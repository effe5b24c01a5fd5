//! Output format handling for wgraph
//!
//! - human: Readable, concise output for terminal use
//! - json: Stable, machine-readable JSON

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::GraphError;

/// Output format for wgraph commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output for machine consumption
    Json,
}

impl FromStr for OutputFormat {
    type Err = GraphError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "human" => Ok(OutputFormat::Human),
            "json" => Ok(OutputFormat::Json),
            other => Err(GraphError::UnknownFormat(other.to_string())),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Human => write!(f, "human"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

/// Format a weight with one decimal, rounding exact ties away from zero
/// (`2.25` becomes `2.3`, `-0.25` becomes `-0.3`)
pub fn format_weight(weight: f64) -> String {
    if !weight.is_finite() {
        return format!("{:.1}", weight);
    }
    format!("{:.1}", (weight * 10.0).round() / 10.0)
}

/// Format a distance for human output: one decimal, `∞` when unreachable
pub fn format_distance(distance: f64) -> String {
    if distance.is_infinite() {
        "∞".to_string()
    } else {
        format_weight(distance)
    }
}

/// Join a vertex sequence with arrows, as in `A → B → C`
pub fn format_sequence<V: fmt::Display>(vertices: &[V]) -> String {
    vertices
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(" → ")
}
