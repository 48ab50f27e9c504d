//! Configuration management for the Fitbit MCP server.
//!
//! This module provides a centralized configuration structure that can be
//! populated from environment variables, configuration files, or defaults.

use super::transport::TransportConfig;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::info;

/// Default base URL for the Fitbit Web API, scoped to the authorized user.
pub const DEFAULT_API_BASE_URL: &str = "https://api.fitbit.com/1/user/-";

/// Main configuration structure for the Fitbit MCP server.
///
/// This struct contains all configurable aspects of the server, organized
/// by domain for clarity and maintainability.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Server identification and metadata.
    pub server: ServerConfig,

    /// Fitbit Web API configuration.
    pub api: ApiConfig,

    /// Logging configuration.
    pub logging: LoggingConfig,

    /// Transport configuration.
    pub transport: TransportConfig,

    /// Fitbit application credentials.
    pub credentials: CredentialsConfig,
}

/// Server identification configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// The name of the server as reported to clients.
    pub name: String,

    /// The version of the server.
    pub version: String,
}

/// Configuration for the Fitbit Web API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL that relative resource endpoints are appended to.
    pub base_url: String,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "trace").
    pub level: String,

    /// Whether to include timestamps in log output.
    pub with_timestamps: bool,
}

/// Configuration for Fitbit application credentials and token sources.
#[derive(Clone, Default, Serialize, Deserialize)]
pub struct CredentialsConfig {
    /// OAuth2 client ID of the registered Fitbit application.
    pub client_id: Option<String>,

    /// OAuth2 client secret of the registered Fitbit application.
    pub client_secret: Option<String>,

    /// Access token supplied directly via environment.
    pub access_token: Option<String>,

    /// Path to a persisted token file written by the authorization flow.
    pub token_file: Option<PathBuf>,
}

/// Custom Debug implementation to redact secrets from logs.
impl std::fmt::Debug for CredentialsConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CredentialsConfig")
            .field("client_id", &self.client_id)
            .field(
                "client_secret",
                &self.client_secret.as_ref().map(|_| "[REDACTED]"),
            )
            .field(
                "access_token",
                &self.access_token.as_ref().map(|_| "[REDACTED]"),
            )
            .field("token_file", &self.token_file)
            .finish()
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_BASE_URL.to_string(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                name: "fitbit".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            api: ApiConfig::default(),
            logging: LoggingConfig {
                level: "info".to_string(),
                with_timestamps: true,
            },
            transport: TransportConfig::default(),
            credentials: CredentialsConfig::default(),
        }
    }
}

impl Config {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from environment variables.
    ///
    /// Fitbit credentials use the `FITBIT_` prefix; server-level settings use
    /// the `MCP_` prefix. For example: `FITBIT_CLIENT_ID`, `MCP_LOG_LEVEL`.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let mut config = Self::default();

        if let Ok(name) = std::env::var("MCP_SERVER_NAME") {
            config.server.name = name;
        }

        if let Ok(level) = std::env::var("MCP_LOG_LEVEL") {
            config.logging.level = level;
        }

        if let Ok(base_url) = std::env::var("FITBIT_API_BASE_URL") {
            config.api.base_url = base_url.trim_end_matches('/').to_string();
        }

        // Load transport configuration from environment
        config.transport = TransportConfig::from_env();

        if let Ok(client_id) = std::env::var("FITBIT_CLIENT_ID") {
            config.credentials.client_id = Some(client_id);
        }

        if let Ok(client_secret) = std::env::var("FITBIT_CLIENT_SECRET") {
            config.credentials.client_secret = Some(client_secret);
        }

        if let Ok(access_token) = std::env::var("FITBIT_ACCESS_TOKEN") {
            config.credentials.access_token = Some(access_token);
            info!("Access token loaded from environment");
        }

        if let Ok(token_file) = std::env::var("FITBIT_TOKEN_FILE") {
            config.credentials.token_file = Some(PathBuf::from(token_file));
        }

        config
    }

    /// Validate that the required Fitbit application credentials are present.
    ///
    /// Returns the names of the missing environment variables so the caller
    /// can report all of them at once instead of one per restart.
    pub fn missing_credentials(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.credentials.client_id.as_deref().is_none_or(str::is_empty) {
            missing.push("FITBIT_CLIENT_ID");
        }
        if self
            .credentials
            .client_secret
            .as_deref()
            .is_none_or(str::is_empty)
        {
            missing.push("FITBIT_CLIENT_SECRET");
        }
        missing
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // Mutex to ensure env var tests run serially
    static ENV_TEST_LOCK: Mutex<()> = Mutex::new(());

    #[test]
    fn test_credentials_from_env() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        unsafe {
            std::env::set_var("FITBIT_CLIENT_ID", "23ABCD");
            std::env::set_var("FITBIT_CLIENT_SECRET", "shh_secret");
        }
        let config = Config::from_env();
        assert_eq!(config.credentials.client_id.as_deref(), Some("23ABCD"));
        assert_eq!(
            config.credentials.client_secret.as_deref(),
            Some("shh_secret")
        );
        assert!(config.missing_credentials().is_empty());
        unsafe {
            std::env::remove_var("FITBIT_CLIENT_ID");
            std::env::remove_var("FITBIT_CLIENT_SECRET");
        }
    }

    #[test]
    fn test_missing_credentials_reported() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        unsafe {
            std::env::remove_var("FITBIT_CLIENT_ID");
            std::env::remove_var("FITBIT_CLIENT_SECRET");
        }
        let config = Config::from_env();
        let missing = config.missing_credentials();
        assert!(missing.contains(&"FITBIT_CLIENT_ID"));
        assert!(missing.contains(&"FITBIT_CLIENT_SECRET"));
    }

    #[test]
    fn test_secrets_redacted_in_debug() {
        let creds = CredentialsConfig {
            client_id: Some("23ABCD".to_string()),
            client_secret: Some("super_secret".to_string()),
            access_token: Some("bearer_token_value".to_string()),
            token_file: None,
        };
        let debug_str = format!("{:?}", creds);
        assert!(debug_str.contains("REDACTED"));
        assert!(!debug_str.contains("super_secret"));
        assert!(!debug_str.contains("bearer_token_value"));
    }

    #[test]
    fn test_default_base_url() {
        let config = Config::default();
        assert_eq!(config.api.base_url, "https://api.fitbit.com/1/user/-");
    }

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        unsafe {
            std::env::set_var("FITBIT_API_BASE_URL", "http://localhost:9090/1/user/-/");
        }
        let config = Config::from_env();
        assert_eq!(config.api.base_url, "http://localhost:9090/1/user/-");
        unsafe {
            std::env::remove_var("FITBIT_API_BASE_URL");
        }
    }
}
