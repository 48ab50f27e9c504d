//! Core module containing shared infrastructure components.
//!
//! This module provides the foundational building blocks for the Fitbit MCP
//! server, including error handling, configuration, server lifecycle
//! management, and transport layer abstractions.

pub mod config;
pub mod error;
pub mod server;
pub mod transport;

pub use config::Config;
pub use error::{Error, Result};
pub use server::FitbitServer;
pub use transport::{TransportConfig, TransportService};
