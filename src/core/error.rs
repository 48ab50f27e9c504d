//! Error types and handling for the Fitbit MCP server.
//!
//! Domain modules carry their own error enums; this unified type is what
//! library consumers see at the crate boundary.

use thiserror::Error;

/// A specialized Result type for Fitbit MCP server operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Unified error type for the Fitbit MCP server.
#[derive(Debug, Error)]
pub enum Error {
    /// Error originating from the tools domain.
    #[error("Tool error: {0}")]
    Tool(#[from] crate::domains::tools::ToolError),

    /// Error originating from the auth domain.
    #[error("Auth error: {0}")]
    Auth(#[from] crate::domains::auth::AuthError),

    /// Configuration-related errors.
    #[error("Configuration error: {0}")]
    Config(String),

    /// I/O errors from file operations or network communication.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization errors.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Internal server errors that should not occur under normal operation.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl Error {
    /// Create a new configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a new internal error.
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }
}
