//! Configuration type definitions

use serde::{Deserialize, Serialize};

use crate::graph::{EdgeKind, ExportOptions, DEFAULT_WEIGHT};

/// Default config file name looked up in the working directory
pub const CONFIG_FILE_NAME: &str = "wgraph.toml";

/// Engine configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// How edge lists are loaded
    #[serde(default)]
    pub graph: GraphDefaults,

    /// Export file options
    #[serde(default)]
    pub export: ExportOptions,

    /// Shortest-path options
    #[serde(default)]
    pub dijkstra: DijkstraConfig,
}

/// Defaults applied when building a graph from an edge list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphDefaults {
    /// Insert every edge-list line in both directions
    #[serde(default)]
    pub undirected: bool,

    /// Weight used for lines that carry no weight column
    #[serde(default = "default_weight")]
    pub default_weight: f64,
}

impl GraphDefaults {
    pub fn edge_kind(&self) -> EdgeKind {
        if self.undirected {
            EdgeKind::Undirected
        } else {
            EdgeKind::Directed
        }
    }
}

impl Default for GraphDefaults {
    fn default() -> Self {
        Self {
            undirected: false,
            default_weight: DEFAULT_WEIGHT,
        }
    }
}

fn default_weight() -> f64 {
    DEFAULT_WEIGHT
}

/// Configuration for Dijkstra queries
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DijkstraConfig {
    /// Scan for negative weights and fail instead of returning wrong distances
    #[serde(default = "default_reject_negative")]
    pub reject_negative_weights: bool,
}

impl Default for DijkstraConfig {
    fn default() -> Self {
        Self {
            reject_negative_weights: default_reject_negative(),
        }
    }
}

fn default_reject_negative() -> bool {
    true
}
