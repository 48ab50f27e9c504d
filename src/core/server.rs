//! MCP server implementation and lifecycle management.
//!
//! This module contains the main server handler that implements the MCP
//! protocol. Tool calls are routed by the ToolRouter built in
//! `domains/tools/router.rs`; every tool shares one API executor and one
//! injected token provider.
//!
//! Adding a new tool does not require modifying this file - the router is
//! built dynamically from the tool definitions.

use rmcp::{
    ErrorData as McpError, RoleServer, ServerHandler, handler::server::tool::ToolRouter,
    model::*, service::RequestContext, tool_handler,
};
use std::sync::Arc;

use super::config::Config;
use crate::domains::auth::AccessTokenProvider;
use crate::domains::tools::{FitbitApi, build_tool_router};

/// The main Fitbit MCP server handler.
///
/// This struct implements the `ServerHandler` trait from rmcp and exposes
/// the registered Fitbit tools to clients.
#[derive(Clone)]
pub struct FitbitServer {
    /// Server configuration.
    config: Arc<Config>,

    /// Tool router for handling tool calls.
    tool_router: ToolRouter<Self>,
}

impl FitbitServer {
    /// Create a new server with the given configuration and token provider.
    ///
    /// The provider is shared read-only by every registered tool; the server
    /// never refreshes or mutates the credential itself.
    pub fn new(config: Config, tokens: Arc<dyn AccessTokenProvider>) -> Self {
        let config = Arc::new(config);
        let api = Arc::new(FitbitApi::new(&config.api, tokens));

        Self {
            tool_router: build_tool_router::<Self>(api),
            config,
        }
    }

    /// Get the server name.
    pub fn name(&self) -> &str {
        &self.config.server.name
    }

    /// Get the server version.
    pub fn version(&self) -> &str {
        &self.config.server.version
    }
}

/// ServerHandler implementation with tool_handler macro for automatic tool routing.
#[tool_handler]
impl ServerHandler for FitbitServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(
                "Fitbit MCP server. Provides read-only tools for the authorized user's \
                 health and fitness data: heart rate variability, sleep, weight, activity, \
                 nutrition, and profile. Tools return the raw Fitbit API JSON."
                    .to_string(),
            ),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::auth::StaticTokenProvider;

    fn test_server() -> FitbitServer {
        FitbitServer::new(Config::default(), Arc::new(StaticTokenProvider::empty()))
    }

    #[test]
    fn test_server_reports_identity() {
        let server = test_server();
        assert_eq!(server.name(), "fitbit");
        assert_eq!(server.version(), env!("CARGO_PKG_VERSION"));
    }

    #[test]
    fn test_server_advertises_tools_capability() {
        let info = test_server().get_info();
        assert!(info.capabilities.tools.is_some());
        assert!(info.instructions.is_some());
    }
}
