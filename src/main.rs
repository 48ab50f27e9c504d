//! Fitbit MCP Server Entry Point
//!
//! This is the main entry point for the Fitbit MCP server. It loads
//! configuration, initializes logging, loads the persisted access token,
//! and starts the server with the configured transport.

use std::sync::Arc;

use anyhow::{Result, bail};
use tracing::{Level, error, info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use fitbit_mcp_server::core::{Config, FitbitServer, TransportService};
use fitbit_mcp_server::domains::auth::{AccessTokenProvider, TokenStore};

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration from environment
    let config = Config::from_env();

    // Initialize logging (stderr - stdout belongs to the stdio transport)
    init_logging(&config.logging.level);

    // Validate required environment variables before proceeding
    let missing = config.missing_credentials();
    if !missing.is_empty() {
        error!("Missing required environment variables:");
        for var in &missing {
            error!("   - {}", var);
        }
        error!("See README.md for details on getting Fitbit API credentials.");
        bail!("missing required environment variables");
    }

    info!("Starting {} v{}", config.server.name, config.server.version);

    // Load the persisted access token (if any)
    let tokens = Arc::new(TokenStore::from_config(&config.credentials).await?);

    if tokens.fetch_token().await.is_none() {
        warn!(
            "No access token found. Set FITBIT_ACCESS_TOKEN or point FITBIT_TOKEN_FILE \
             at a token issued by the authorization flow; tool calls will fail until then."
        );
    } else {
        info!("Using existing/loaded access token");
    }

    // Create the MCP server
    let server = FitbitServer::new(config.clone(), tokens);

    info!("Server initialized");

    // Create and run the transport service
    let transport = TransportService::new(config.transport);
    transport.run(server).await?;

    info!("Server shutting down");

    Ok(())
}

/// Initialize the logging subsystem.
///
/// Everything goes to stderr; stdout carries the MCP protocol when running
/// on the stdio transport.
fn init_logging(level: &str) {
    let level: Level = level.parse().unwrap_or(Level::INFO);
    let filter = EnvFilter::from_default_env().add_directive(level.into());

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();
}
