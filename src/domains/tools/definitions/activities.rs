//! Exercise activity log tool.

use std::sync::Arc;

use futures::FutureExt;
use rmcp::{
    ErrorData as McpError,
    handler::server::tool::{ToolCallContext, ToolRoute, cached_schema_for_type},
    model::{CallToolResult, Tool},
};
use schemars::JsonSchema;
use serde::Deserialize;

use super::common::{clamp_limit, default_limit, validate_date};
use crate::domains::tools::api::FitbitApi;
use crate::domains::tools::error::ToolError;

/// Parameters for listing logged exercise activities.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct GetExercisesParams {
    /// Only activities logged on or after this day are returned.
    #[serde(rename = "afterDate")]
    #[schemars(description = "Return activities on or after this date (YYYY-MM-DD or 'today')")]
    pub after_date: String,

    /// Maximum number of activities to return (default: 20, max: 100).
    #[schemars(description = "Maximum number of activities to return (default: 20, max: 100)")]
    #[serde(default = "default_limit")]
    pub limit: u32,
}

/// Logged exercise activities after a given date.
#[derive(Debug, Clone)]
pub struct GetExercisesTool;

impl GetExercisesTool {
    pub const NAME: &'static str = "get_exercises";

    pub const DESCRIPTION: &'static str = "Get the raw JSON response for logged exercise activities from Fitbit after a given date, oldest first. Returns activity type, duration, distance, and calories for each entry.";

    fn endpoint(after_date: &str, limit: u32) -> String {
        // The list endpoint wants a full timestamp for its lower bound.
        format!(
            "activities/list.json?afterDate={}T00:00:00&sort=asc&offset=0&limit={}",
            after_date,
            clamp_limit(limit)
        )
    }

    fn error_context(after_date: &str) -> String {
        format!("exercise activities after {}", after_date)
    }

    /// Execute the tool logic.
    pub async fn execute(
        api: &FitbitApi,
        params: &GetExercisesParams,
    ) -> Result<CallToolResult, ToolError> {
        validate_date(&params.after_date)?;
        api.call(
            &Self::endpoint(&params.after_date, params.limit),
            &Self::error_context(&params.after_date),
        )
        .await
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<GetExercisesParams>(),
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
        ToolRoute::new_dyn(Self::to_tool(), move |ctx: ToolCallContext<'_, S>| {
            let api = api.clone();
            let args = ctx.arguments.clone().unwrap_or_default();
            async move {
                let params: GetExercisesParams =
                    serde_json::from_value(serde_json::Value::Object(args))
                        .map_err(|e| McpError::invalid_params(e.to_string(), None))?;

                Self::execute(&api, &params).await.map_err(McpError::from)
            }
            .boxed()
        })
    }
}
