//! Error types and exit codes for waygraph
//!
//! Exit codes used by the CLI:
//! - 0: Success
//! - 1: Generic failure
//! - 2: Usage error (bad flags/args)
//! - 3: Graph error (unknown vertex or edge, disconnected graph)

mod macros;

use std::fmt::Debug;

use thiserror::Error;

/// Exit codes for the waygraph CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Graph error - missing vertex/edge, disconnected graph (3)
    Graph = 3,
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
    #[error("{0}")]
    UsageError(String),

    #[error("invalid {context}: {value}")]
    InvalidValue { context: String, value: String },

    // Graph errors (exit code 3)
    #[error("vertex not found: {vertex}")]
    VertexNotFound { vertex: String },

    #[error("edge not found: {from} -> {to}")]
    EdgeNotFound { from: String, to: String },

    #[error("graph is not connected: {unreached} vertices unreachable from {root}")]
    GraphNotConnected { root: String, unreached: usize },

    // Generic failures (exit code 1)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),
}

impl GraphError {
    /// Create an error for a vertex missing from the vertex set
    pub fn vertex_not_found(vertex: &impl Debug) -> Self {
        GraphError::VertexNotFound {
            vertex: format!("{:?}", vertex),
        }
    }

    /// Create an error for a missing (source, target) edge
    pub fn edge_not_found(from: &impl Debug, to: &impl Debug) -> Self {
        GraphError::EdgeNotFound {
            from: format!("{:?}", from),
            to: format!("{:?}", to),
        }
    }

    /// Create an error for a spanning tree that cannot reach every vertex
    pub fn not_connected(root: &impl Debug, unreached: usize) -> Self {
        GraphError::GraphNotConnected {
            root: format!("{:?}", root),
            unreached,
        }
    }

    /// Create an error for an invalid value or configuration
    pub fn invalid_value(context: &str, value: impl std::fmt::Display) -> Self {
        GraphError::InvalidValue {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            GraphError::UsageError(_) | GraphError::InvalidValue { .. } => ExitCode::Usage,

            GraphError::VertexNotFound { .. }
            | GraphError::EdgeNotFound { .. }
            | GraphError::GraphNotConnected { .. } => ExitCode::Graph,

            GraphError::Io(_) | GraphError::Json(_) | GraphError::Toml(_) => ExitCode::Failure,
        }
    }

    /// Get the error type identifier
    pub fn error_type(&self) -> &'static str {
        match self {
            GraphError::UsageError(_) => "usage_error",
            GraphError::InvalidValue { .. } => "invalid_value",
            GraphError::VertexNotFound { .. } => "vertex_not_found",
            GraphError::EdgeNotFound { .. } => "edge_not_found",
            GraphError::GraphNotConnected { .. } => "graph_not_connected",
            GraphError::Io(_) => "io_error",
            GraphError::Json(_) => "json_error",
            GraphError::Toml(_) => "toml_error",
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

/// Result type alias for graph operations
pub type Result<T> = std::result::Result<T, GraphError>;
