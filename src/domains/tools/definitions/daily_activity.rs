//! Daily activity summary tool.

use std::sync::Arc;

use futures::FutureExt;
use rmcp::{
    ErrorData as McpError,
    handler::server::tool::{ToolCallContext, ToolRoute, cached_schema_for_type},
    model::{CallToolResult, Tool},
};
use schemars::JsonSchema;
use serde::Deserialize;

use super::common::validate_date;
use crate::domains::tools::api::FitbitApi;
use crate::domains::tools::error::ToolError;

/// Parameters for the daily activity summary.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct GetDailyActivityParams {
    #[schemars(description = "Date in YYYY-MM-DD format or 'today'")]
    pub date: String,
}

/// Daily activity summary for a single date.
#[derive(Debug, Clone)]
pub struct GetDailyActivityTool;

impl GetDailyActivityTool {
    pub const NAME: &'static str = "get_daily_activity_summary";

    pub const DESCRIPTION: &'static str = "Get the raw JSON response for the daily activity summary from Fitbit for a single date. Returns steps, distance, calories, floors, and active minutes totals plus goal progress.";

    fn endpoint(date: &str) -> String {
        format!("activities/date/{}.json", date)
    }

    fn error_context(date: &str) -> String {
        format!("daily activity summary for {}", date)
    }

    /// Execute the tool logic.
    pub async fn execute(
        api: &FitbitApi,
        params: &GetDailyActivityParams,
    ) -> Result<CallToolResult, ToolError> {
        validate_date(&params.date)?;
        api.call(
            &Self::endpoint(&params.date),
            &Self::error_context(&params.date),
        )
        .await
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<GetDailyActivityParams>(),
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
                let params: GetDailyActivityParams =
                    serde_json::from_value(serde_json::Value::Object(args))
                        .map_err(|e| McpError::invalid_params(e.to_string(), None))?;

                Self::execute(&api, &params).await.map_err(McpError::from)
            }
            .boxed()
        })
    }
}
