//! Token store backed by the environment or a persisted token file.
//!
//! The authorization flow (external to this server) writes the token file;
//! we only read it once at startup. The stored token is served behind a
//! read lock so concurrent tool invocations can share it freely.

use std::path::Path;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Deserialize;
use tokio::sync::RwLock;
use tracing::{info, warn};

use super::error::AuthError;
use super::provider::AccessTokenProvider;
use crate::core::config::CredentialsConfig;

/// Token record as persisted by the authorization flow.
///
/// The file also carries a refresh token; refreshing is the flow's job, so
/// only the fields the server reads are modeled here.
#[derive(Debug, Clone, Deserialize)]
struct StoredToken {
    access_token: String,

    #[serde(default)]
    expires_at: Option<DateTime<Utc>>,
}

/// Read-only store for the current access token.
pub struct TokenStore {
    token: RwLock<Option<StoredToken>>,
}

impl TokenStore {
    /// Initialize the store from credentials configuration.
    ///
    /// An access token supplied directly via the environment wins over the
    /// persisted token file. A missing file is not an error - the store just
    /// starts empty and every tool call fails with the no-credential message
    /// until a token appears.
    pub async fn from_config(credentials: &CredentialsConfig) -> Result<Self, AuthError> {
        if let Some(token) = &credentials.access_token {
            info!("Using access token from environment");
            return Ok(Self {
                token: RwLock::new(Some(StoredToken {
                    access_token: token.clone(),
                    expires_at: None,
                })),
            });
        }

        let Some(path) = &credentials.token_file else {
            return Ok(Self::empty());
        };

        if !path.exists() {
            warn!("Token file {} not found; starting without a token", path.display());
            return Ok(Self::empty());
        }

        let stored = Self::read_token_file(path).await?;
        info!("Loaded persisted access token from {}", path.display());
        Ok(Self {
            token: RwLock::new(Some(stored)),
        })
    }

    /// Create an empty store with no credential.
    pub fn empty() -> Self {
        Self {
            token: RwLock::new(None),
        }
    }

    async fn read_token_file(path: &Path) -> Result<StoredToken, AuthError> {
        let contents =
            tokio::fs::read_to_string(path)
                .await
                .map_err(|source| AuthError::TokenFileRead {
                    path: path.to_path_buf(),
                    source,
                })?;

        let stored: StoredToken =
            serde_json::from_str(&contents).map_err(|source| AuthError::TokenFileParse {
                path: path.to_path_buf(),
                source,
            })?;

        if let Some(expires_at) = stored.expires_at {
            if expires_at <= Utc::now() {
                // Expiry bookkeeping belongs to the authorization flow that
                // wrote the file; the token is still served as-is.
                warn!("Persisted token is past its recorded expiry ({})", expires_at);
            }
        }

        Ok(stored)
    }
}

#[async_trait]
impl AccessTokenProvider for TokenStore {
    async fn fetch_token(&self) -> Option<String> {
        self.token
            .read()
            .await
            .as_ref()
            .map(|t| t.access_token.clone())
    }
}
