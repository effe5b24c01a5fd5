//! Engine configuration for wgraph
//!
//! Configuration is read from an optional `wgraph.toml`. Every key has a
//! default, so an empty file and a missing file behave the same.

pub mod types;

use std::fs;
use std::path::Path;

use crate::bail_invalid;
use crate::error::{GraphError, Result};

pub use types::{DijkstraConfig, EngineConfig, GraphDefaults, CONFIG_FILE_NAME};

impl EngineConfig {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: EngineConfig = toml::from_str(&content)?;

        config.validate().map_err(|e| GraphError::InvalidConfig {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        tracing::debug!(path = %path.display(), "config_loaded");
        Ok(config)
    }

    /// Load an explicit config file, or `wgraph.toml` in `dir` if present,
    /// falling back to defaults.
    pub fn discover(explicit: Option<&Path>, dir: &Path) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }

        let candidate = dir.join(CONFIG_FILE_NAME);
        if candidate.is_file() {
            Self::load(&candidate)
        } else {
            Ok(Self::default())
        }
    }

    /// Save configuration to a file
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| GraphError::Other(format!("failed to serialize config: {}", e)))?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Reject values the engine cannot use
    pub fn validate(&self) -> Result<()> {
        if !self.graph.default_weight.is_finite() {
            bail_invalid!("default_weight", self.graph.default_weight);
        }
        Ok(())
    }
}
