//! Nutrition tools: food and water logs.

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

/// Parameters for the food log lookup.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct GetFoodLogParams {
    #[schemars(description = "Date in YYYY-MM-DD format or 'today'")]
    pub date: String,
}

/// Parameters for the water log lookup.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct GetWaterLogParams {
    #[schemars(description = "Date in YYYY-MM-DD format or 'today'")]
    pub date: String,
}

/// Food log entries for a single date.
#[derive(Debug, Clone)]
pub struct GetFoodLogTool;

impl GetFoodLogTool {
    pub const NAME: &'static str = "get_food_log";

    pub const DESCRIPTION: &'static str = "Get the raw JSON response for food log entries from Fitbit for a single date. Returns logged foods with calories and macronutrient summaries.";

    fn endpoint(date: &str) -> String {
        format!("foods/log/date/{}.json", date)
    }

    fn error_context(date: &str) -> String {
        format!("food log for {}", date)
    }

    /// Execute the tool logic.
    pub async fn execute(
        api: &FitbitApi,
        params: &GetFoodLogParams,
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
            input_schema: cached_schema_for_type::<GetFoodLogParams>(),
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
                let params: GetFoodLogParams =
                    serde_json::from_value(serde_json::Value::Object(args))
                        .map_err(|e| McpError::invalid_params(e.to_string(), None))?;

                Self::execute(&api, &params).await.map_err(McpError::from)
            }
            .boxed()
        })
    }
}

/// Water log entries for a single date.
#[derive(Debug, Clone)]
pub struct GetWaterLogTool;

impl GetWaterLogTool {
    pub const NAME: &'static str = "get_water_log";

    pub const DESCRIPTION: &'static str = "Get the raw JSON response for water log entries from Fitbit for a single date. Returns individual water logs and the daily total.";

    fn endpoint(date: &str) -> String {
        format!("foods/log/water/date/{}.json", date)
    }

    fn error_context(date: &str) -> String {
        format!("water log for {}", date)
    }

    /// Execute the tool logic.
    pub async fn execute(
        api: &FitbitApi,
        params: &GetWaterLogParams,
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
            input_schema: cached_schema_for_type::<GetWaterLogParams>(),
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
                let params: GetWaterLogParams =
                    serde_json::from_value(serde_json::Value::Object(args))
                        .map_err(|e| McpError::invalid_params(e.to_string(), None))?;

                Self::execute(&api, &params).await.map_err(McpError::from)
            }
            .boxed()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_food_log_endpoint() {
        assert_eq!(
            GetFoodLogTool::endpoint("2023-01-15"),
            "foods/log/date/2023-01-15.json"
        );
        assert_eq!(
            GetFoodLogTool::error_context("2023-01-15"),
            "food log for 2023-01-15"
        );
    }

    #[test]
    fn test_water_log_endpoint() {
        assert_eq!(
            GetWaterLogTool::endpoint("2023-01-15"),
            "foods/log/water/date/2023-01-15.json"
        );
        assert_eq!(
            GetWaterLogTool::error_context("2023-01-15"),
            "water log for 2023-01-15"
        );
    }
}
