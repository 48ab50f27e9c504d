//! Tool-specific error types.

use rmcp::ErrorData as McpError;
use thiserror::Error;

/// Errors that can occur while executing a Fitbit tool.
///
/// None of these are recovered locally: every variant propagates out of the
/// tool handler so the host observes a rejected call, never a synthetic
/// success payload.
#[derive(Debug, Error)]
pub enum ToolError {
    /// The credential provider had no token to offer.
    #[error("No access token available")]
    NoCredential,

    /// The remote call failed (non-2xx status or transport failure).
    #[error("Failed to fetch {context}: {reason}")]
    Api { context: String, reason: String },

    /// The remote body could not be parsed as JSON.
    #[error("Failed to fetch {context}: response was not valid JSON: {source}")]
    MalformedResponse {
        context: String,
        #[source]
        source: reqwest::Error,
    },

    /// Invalid arguments were provided to the tool.
    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),

    /// An internal error occurred.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ToolError {
    /// Create a new API failure error.
    pub fn api(context: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Api {
            context: context.into(),
            reason: reason.into(),
        }
    }

    /// Create a new "invalid arguments" error.
    pub fn invalid_arguments(msg: impl Into<String>) -> Self {
        Self::InvalidArguments(msg.into())
    }

    /// Create a new "internal" error.
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }
}

/// Surface tool failures to the MCP host as protocol-level errors.
impl From<ToolError> for McpError {
    fn from(err: ToolError) -> Self {
        match &err {
            ToolError::InvalidArguments(_) => McpError::invalid_params(err.to_string(), None),
            _ => McpError::internal_error(err.to_string(), None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_credential_message() {
        assert_eq!(
            ToolError::NoCredential.to_string(),
            "No access token available"
        );
    }

    #[test]
    fn test_api_error_embeds_context() {
        let err = ToolError::api("HRV data for 2023-01-15", "HTTP 500");
        assert_eq!(
            err.to_string(),
            "Failed to fetch HRV data for 2023-01-15: HTTP 500"
        );
    }
}
