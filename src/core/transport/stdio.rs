//! STDIO transport implementation.
//!
//! The default MCP mode: JSON-RPC over the process's stdin/stdout pair.
//! Log output goes to stderr so it never corrupts the protocol stream.

use rmcp::ServiceExt;
use tracing::info;

use super::{TransportError, TransportResult};
use crate::core::FitbitServer;

/// STDIO transport handler.
pub struct StdioTransport;

impl StdioTransport {
    /// Serve MCP over stdin/stdout until the client disconnects.
    pub async fn run(server: FitbitServer) -> TransportResult<()> {
        info!("Fitbit MCP server connected via stdio");

        let service = server
            .serve(rmcp::transport::stdio())
            .await
            .map_err(|e| TransportError::init(e.to_string()))?;

        service
            .waiting()
            .await
            .map_err(|e| TransportError::Service(e.to_string()))?;

        info!("stdio transport closed");
        Ok(())
    }
}
