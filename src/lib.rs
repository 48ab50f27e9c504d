//! Fitbit MCP Server Library
//!
//! This crate provides a Model Context Protocol (MCP) server that exposes
//! the authorized user's Fitbit health and fitness data as tools.
//!
//! # Architecture
//!
//! The server is organized into the following modules:
//!
//! - **core**: Core infrastructure including configuration, error handling,
//!   the main server, and transports
//! - **domains**: Business logic organized by bounded contexts
//!   - **auth**: Access token loading and the provider abstraction
//!   - **tools**: Fitbit resource tools built on a shared API call executor
//!
//! Every tool follows the same shape: validate the date parameters, build a
//! relative endpoint path, and delegate to [`domains::tools::FitbitApi`],
//! which fetches the credential, performs one authenticated GET, and wraps
//! the raw JSON response into the uniform tool result. Failures are never
//! converted into success payloads.
//!
//! # Example
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use fitbit_mcp_server::core::{Config, FitbitServer};
//! use fitbit_mcp_server::domains::auth::TokenStore;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env();
//!     let tokens = Arc::new(TokenStore::from_config(&config.credentials).await?);
//!     let server = FitbitServer::new(config, tokens);
//!     // Start the server...
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod domains;

// Re-export commonly used types for convenience
pub use core::{Config, Error, FitbitServer, Result};
