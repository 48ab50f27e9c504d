//! Access token provider abstraction.
//!
//! Every registered tool receives a shared provider at startup and asks it
//! for the current credential on each invocation. Providers are read-only
//! from the tools' point of view; `None` means no credential is available
//! and the call must fail before any network traffic happens.

use async_trait::async_trait;

/// Supplies the current Fitbit access token, if one is available.
///
/// The distinction between "never issued" and "expired" is deliberately not
/// modeled: callers only observe presence or absence.
#[async_trait]
pub trait AccessTokenProvider: Send + Sync {
    /// Return the current access token, or `None` when no credential exists.
    async fn fetch_token(&self) -> Option<String>;
}

/// Provider backed by a fixed token, typically taken from the environment.
#[derive(Debug, Clone)]
pub struct StaticTokenProvider {
    token: Option<String>,
}

impl StaticTokenProvider {
    /// Create a provider that always returns the given token.
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: Some(token.into()),
        }
    }

    /// Create a provider that never returns a token.
    pub fn empty() -> Self {
        Self { token: None }
    }
}

#[async_trait]
impl AccessTokenProvider for StaticTokenProvider {
    async fn fetch_token(&self) -> Option<String> {
        self.token.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_static_provider_returns_token() {
        let provider = StaticTokenProvider::new("abc123");
        assert_eq!(provider.fetch_token().await.as_deref(), Some("abc123"));
    }

    #[tokio::test]
    async fn test_empty_provider_returns_none() {
        let provider = StaticTokenProvider::empty();
        assert!(provider.fetch_token().await.is_none());
    }
}
