//! Auth-specific error types.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading credentials.
#[derive(Debug, Error)]
pub enum AuthError {
    /// The token file exists but could not be read.
    #[error("Failed to read token file {path}: {source}")]
    TokenFileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The token file contents are not valid token JSON.
    #[error("Token file {path} is not valid token JSON: {source}")]
    TokenFileParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
