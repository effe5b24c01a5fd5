//! Error types and exit codes for wgraph
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure
//! - 2: Usage error (bad flags/args)
//! - 3: Data error (bad edge list, unknown demo, invalid config, negative weight)

mod macros;

use std::path::PathBuf;
use thiserror::Error;

/// Process exit codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data error - unreadable input, bad config, precondition violated (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur during graph operations
#[derive(Error, Debug)]
pub enum GraphError {
    // Usage errors (exit code 2)
    #[error("unknown format: {0} (expected: human or json)")]
    UnknownFormat(String),

    #[error("{0}")]
    UsageError(String),

    #[error("invalid {context}: {value}")]
    InvalidValue { context: String, value: String },

    // Data errors (exit code 3)
    #[error("unknown demo graph: {0}")]
    UnknownDemo(String),

    #[error("invalid config in {path:?}: {reason}")]
    InvalidConfig { path: PathBuf, reason: String },

    #[error("negative edge weight {weight} on {from} -> {to}")]
    NegativeWeight {
        from: String,
        to: String,
        weight: f64,
    },

    // Generic failures (exit code 1)
    #[error("failed to export {path:?}: {source}")]
    Export {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("{0}")]
    Other(String),
}

impl GraphError {
    /// Create an error for an invalid value or argument
    pub fn invalid_value(context: &str, value: impl std::fmt::Display) -> Self {
        GraphError::InvalidValue {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Wrap an I/O failure that happened while writing an export file
    pub fn export(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        GraphError::Export {
            path: path.into(),
            source,
        }
    }

    /// Export failures are reported to the caller but never abort the host
    pub fn is_recoverable(&self) -> bool {
        matches!(self, GraphError::Export { .. })
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            GraphError::UnknownFormat(_)
            | GraphError::UsageError(_)
            | GraphError::InvalidValue { .. } => ExitCode::Usage,

            GraphError::UnknownDemo(_)
            | GraphError::InvalidConfig { .. }
            | GraphError::NegativeWeight { .. }
            | GraphError::Toml(_) => ExitCode::Data,

            GraphError::Export { .. }
            | GraphError::Io(_)
            | GraphError::Json(_)
            | GraphError::Other(_) => ExitCode::Failure,
        }
    }

    /// Get the error type identifier
    pub fn error_type(&self) -> &'static str {
        match self {
            GraphError::UnknownFormat(_) => "unknown_format",
            GraphError::UsageError(_) => "usage_error",
            GraphError::InvalidValue { .. } => "invalid_value",
            GraphError::UnknownDemo(_) => "unknown_demo",
            GraphError::InvalidConfig { .. } => "invalid_config",
            GraphError::NegativeWeight { .. } => "negative_weight",
            GraphError::Export { .. } => "export_error",
            GraphError::Io(_) => "io_error",
            GraphError::Json(_) => "json_error",
            GraphError::Toml(_) => "toml_error",
            GraphError::Other(_) => "other",
        }
    }

    /// Convert error to JSON representation for structured error output
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "error": {
                "code": self.exit_code() as i32,
                "type": self.error_type(),
                "message": self.to_string(),
            }
        })
    }
}

/// Result type alias for graph operations
pub type Result<T> = std::result::Result<T, GraphError>;
