//! TCP transport implementation.
//!
//! Serves the same line-delimited JSON-RPC stream as stdio, but over a TCP
//! listener so multiple clients can attach concurrently.

use rmcp::ServiceExt;
use tokio::net::TcpListener;
use tracing::{info, warn};

use super::{TransportError, TransportResult, config::TcpConfig};
use crate::core::FitbitServer;

/// TCP transport handler.
pub struct TcpTransport {
    config: TcpConfig,
}

impl TcpTransport {
    /// Create a new TCP transport with the given config.
    pub fn new(config: TcpConfig) -> Self {
        Self { config }
    }

    /// Get the bind address.
    pub fn address(&self) -> String {
        format!("{}:{}", self.config.host, self.config.port)
    }

    /// Accept connections forever, serving each client on its own task.
    pub async fn run(self, server: FitbitServer) -> TransportResult<()> {
        let addr = self.address();

        let listener = TcpListener::bind(&addr)
            .await
            .map_err(|e| TransportError::bind(&addr, e))?;

        info!("Listening on {} (JSON-RPC over TCP)", addr);

        loop {
            let (stream, peer) = match listener.accept().await {
                Ok(accepted) => accepted,
                Err(e) => {
                    warn!("Failed to accept connection: {}", e);
                    // Back off briefly so a persistent accept error does not spin
                    tokio::time::sleep(tokio::time::Duration::from_millis(100)).await;
                    continue;
                }
            };

            if let Err(e) = stream.set_nodelay(true) {
                warn!("Could not set TCP_NODELAY for {}: {}", peer, e);
            }

            let server = server.clone();
            tokio::spawn(async move {
                match server.serve(stream).await {
                    Ok(service) => {
                        info!("Client {} connected", peer);
                        match service.waiting().await {
                            Ok(_) => info!("Client {} disconnected cleanly", peer),
                            Err(e) => warn!("Error while serving client {}: {}", peer, e),
                        }
                    }
                    Err(e) => warn!("Handshake with {} failed: {}", peer, e),
                }
            });
        }
    }
}
