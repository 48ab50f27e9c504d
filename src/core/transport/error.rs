//! Transport error types.

use thiserror::Error;

/// Result type for transport operations.
pub type TransportResult<T> = Result<T, TransportError>;

/// Failures raised while bringing up or running a transport.
#[derive(Debug, Error)]
pub enum TransportError {
    /// The listener socket could not be bound.
    #[error("Failed to bind to {address}: {source}")]
    Bind {
        address: String,
        #[source]
        source: std::io::Error,
    },

    /// The MCP service failed to initialize on a fresh connection.
    #[error("Server initialization error: {0}")]
    Init(String),

    /// The rmcp service terminated with an error.
    #[error("Service error: {0}")]
    Service(String),
}

impl TransportError {
    /// Create a bind error.
    pub fn bind(address: impl Into<String>, source: std::io::Error) -> Self {
        Self::Bind {
            address: address.into(),
            source,
        }
    }

    /// Create an initialization error.
    pub fn init(msg: impl Into<String>) -> Self {
        Self::Init(msg.into())
    }
}
