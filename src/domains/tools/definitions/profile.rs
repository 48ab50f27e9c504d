//! User profile tool.
//!
//! The profile endpoint takes no parameters; the tool still declares an
//! (empty) schema so the host validates calls uniformly.

use std::sync::Arc;

use futures::FutureExt;
use rmcp::{
    ErrorData as McpError,
    handler::server::tool::{ToolCallContext, ToolRoute, cached_schema_for_type},
    model::{CallToolResult, Tool},
};
use schemars::JsonSchema;
use serde::Deserialize;

use crate::domains::tools::api::FitbitApi;
use crate::domains::tools::error::ToolError;

/// Parameters for the profile lookup (none).
#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
pub struct GetProfileParams {}

/// Profile of the authorized user.
#[derive(Debug, Clone)]
pub struct GetProfileTool;

impl GetProfileTool {
    pub const NAME: &'static str = "get_profile";

    pub const DESCRIPTION: &'static str = "Get the raw JSON response for the authorized user's Fitbit profile. Returns display name, age, and account settings.";

    const ENDPOINT: &'static str = "profile.json";
    const ERROR_CONTEXT: &'static str = "user profile";

    /// Execute the tool logic.
    pub async fn execute(api: &FitbitApi) -> Result<CallToolResult, ToolError> {
        api.call(Self::ENDPOINT, Self::ERROR_CONTEXT).await
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<GetProfileParams>(),
            annotations: None,
            output_schema: None,
            icons: None,
            meta: None,
            title: None,
        }
    }

    /// Create a ToolRoute bound to the shared API executor.
    pub fn create_route<S>(api: Arc<FitbitApi>) -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        ToolRoute::new_dyn(Self::to_tool(), move |_ctx: ToolCallContext<'_, S>| {
            let api = api.clone();
            async move { Self::execute(&api).await.map_err(McpError::from) }.boxed()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tool_metadata() {
        let tool = GetProfileTool::to_tool();
        assert_eq!(tool.name.as_ref(), "get_profile");
        assert!(tool.description.is_some());
    }
}
