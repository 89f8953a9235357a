//! Error types and exit codes for favpath
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure
//! - 2: Usage error (bad flags/args)
//! - 3: Data error (unknown node, unreadable graph document)
//!
//! The search itself never fails. "No path" is an empty result graph, not an
//! error. These errors cover the collaborator surfaces around it.

mod macros;

use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the favpath binary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data error - unknown node, malformed document (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur around favored-path operations
#[derive(Error, Debug)]
pub enum FavpathError {
    // Usage errors (exit code 2)
    #[error("unknown format: {0} (expected: human, json, or records)")]
    UnknownFormat(String),

    #[error("{0}")]
    UsageError(String),

    #[error("invalid {context}: {value}")]
    InvalidValue { context: String, value: String },

    #[error("unsupported {context}: {value} (supported: {supported})")]
    Unsupported {
        context: String,
        value: String,
        supported: String,
    },

    // Data errors (exit code 3)
    #[error("node not found: {name}")]
    NodeNotFound { name: String },

    #[error("{context} not found: {value}")]
    NotFound { context: String, value: String },

    #[error("invalid graph document {path:?}: {reason}")]
    InvalidDocument { path: PathBuf, reason: String },

    // Generic failures (exit code 1)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("failed to {operation} {target}: {reason}")]
    FailedOperationWithTarget {
        operation: String,
        target: String,
        reason: String,
    },

    #[error("{0}")]
    Other(String),
}

impl FavpathError {
    /// Create an error for a failed IO operation with context
    pub fn io_operation(
        operation: &str,
        path: impl std::fmt::Display,
        error: impl std::fmt::Display,
    ) -> Self {
        FavpathError::FailedOperationWithTarget {
            operation: operation.to_string(),
            target: path.to_string(),
            reason: error.to_string(),
        }
    }

    /// Create an error for an invalid value or configuration
    pub fn invalid_value(context: &str, value: impl std::fmt::Display) -> Self {
        FavpathError::InvalidValue {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Create an error for an entity that was not found
    pub fn not_found(context: &str, value: impl std::fmt::Display) -> Self {
        FavpathError::NotFound {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Create an error for an unsupported value
    pub fn unsupported(
        context: &str,
        value: impl std::fmt::Display,
        supported: impl std::fmt::Display,
    ) -> Self {
        FavpathError::Unsupported {
            context: context.to_string(),
            value: value.to_string(),
            supported: supported.to_string(),
        }
    }

    /// Create an error for a graph document that parsed but made no sense
    pub fn invalid_document(path: impl Into<PathBuf>, reason: impl std::fmt::Display) -> Self {
        FavpathError::InvalidDocument {
            path: path.into(),
            reason: reason.to_string(),
        }
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            FavpathError::UnknownFormat(_)
            | FavpathError::UsageError(_)
            | FavpathError::InvalidValue { .. }
            | FavpathError::Unsupported { .. } => ExitCode::Usage,

            FavpathError::NodeNotFound { .. }
            | FavpathError::NotFound { .. }
            | FavpathError::InvalidDocument { .. } => ExitCode::Data,

            FavpathError::Io(_)
            | FavpathError::Yaml(_)
            | FavpathError::Json(_)
            | FavpathError::Toml(_)
            | FavpathError::FailedOperationWithTarget { .. }
            | FavpathError::Other(_) => ExitCode::Failure,
        }
    }

    /// Get the error type identifier
    fn error_type(&self) -> &'static str {
        match self {
            FavpathError::UnknownFormat(_) => "unknown_format",
            FavpathError::UsageError(_) => "usage_error",
            FavpathError::InvalidValue { .. } => "invalid_value",
            FavpathError::Unsupported { .. } => "unsupported",
            FavpathError::NodeNotFound { .. } => "node_not_found",
            FavpathError::NotFound { .. } => "not_found",
            FavpathError::InvalidDocument { .. } => "invalid_document",
            FavpathError::Io(_) => "io_error",
            FavpathError::Yaml(_) => "yaml_error",
            FavpathError::Json(_) => "json_error",
            FavpathError::Toml(_) => "toml_error",
            FavpathError::FailedOperationWithTarget { .. } => "failed_operation_with_target",
            FavpathError::Other(_) => "other",
        }
    }

    /// Convert error to JSON representation for structured error output.
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

/// Result type alias for favpath operations
pub type Result<T> = std::result::Result<T, FavpathError>;
