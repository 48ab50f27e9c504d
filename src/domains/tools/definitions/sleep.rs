//! Sleep log tools.

use std::sync::Arc;

use futures::FutureExt;
use rmcp::{
    ErrorData as McpError,
    handler::server::tool::{ToolCallContext, ToolRoute, cached_schema_for_type},
    model::{CallToolResult, Tool},
};
use schemars::JsonSchema;
use serde::Deserialize;

use super::common::{validate_date, validate_date_range};
use crate::domains::tools::api::FitbitApi;
use crate::domains::tools::error::ToolError;

/// Parameters for the single-date sleep log.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct GetSleepParams {
    #[schemars(description = "Date in YYYY-MM-DD format or 'today'")]
    pub date: String,
}

/// Parameters for the sleep log over a date range.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct GetSleepByDateRangeParams {
    #[serde(rename = "startDate")]
    #[schemars(description = "Start date in YYYY-MM-DD format or 'today'")]
    pub start_date: String,

    #[serde(rename = "endDate")]
    #[schemars(description = "End date in YYYY-MM-DD format or 'today'")]
    pub end_date: String,
}

/// Sleep log for a single date.
#[derive(Debug, Clone)]
pub struct GetSleepTool;

impl GetSleepTool {
    pub const NAME: &'static str = "get_sleep_by_date";

    pub const DESCRIPTION: &'static str = "Get the raw JSON response for sleep log data from Fitbit for a single date. Returns sleep stages, duration, and efficiency.";

    fn endpoint(date: &str) -> String {
        format!("sleep/date/{}.json", date)
    }

    fn error_context(date: &str) -> String {
        format!("sleep data for {}", date)
    }

    /// Execute the tool logic.
    pub async fn execute(
        api: &FitbitApi,
        params: &GetSleepParams,
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
            input_schema: cached_schema_for_type::<GetSleepParams>(),
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
                let params: GetSleepParams =
                    serde_json::from_value(serde_json::Value::Object(args))
                        .map_err(|e| McpError::invalid_params(e.to_string(), None))?;

                Self::execute(&api, &params).await.map_err(McpError::from)
            }
            .boxed()
        })
    }
}

/// Sleep log over a date range.
#[derive(Debug, Clone)]
pub struct GetSleepByDateRangeTool;

impl GetSleepByDateRangeTool {
    pub const NAME: &'static str = "get_sleep_by_date_range";

    pub const DESCRIPTION: &'static str = "Get the raw JSON response for sleep log data from Fitbit over a date range (max 100 days). Returns sleep stages, duration, and efficiency for each night.";

    fn endpoint(start: &str, end: &str) -> String {
        format!("sleep/date/{}/{}.json", start, end)
    }

    fn error_context(start: &str, end: &str) -> String {
        format!("sleep data from {} to {}", start, end)
    }

    /// Execute the tool logic.
    pub async fn execute(
        api: &FitbitApi,
        params: &GetSleepByDateRangeParams,
    ) -> Result<CallToolResult, ToolError> {
        validate_date_range(&params.start_date, &params.end_date)?;
        api.call(
            &Self::endpoint(&params.start_date, &params.end_date),
            &Self::error_context(&params.start_date, &params.end_date),
        )
        .await
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<GetSleepByDateRangeParams>(),
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
                let params: GetSleepByDateRangeParams =
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
    fn test_single_date_endpoint() {
        assert_eq!(
            GetSleepTool::endpoint("2023-01-15"),
            "sleep/date/2023-01-15.json"
        );
        assert_eq!(
            GetSleepTool::error_context("2023-01-15"),
            "sleep data for 2023-01-15"
        );
    }

    #[test]
    fn test_range_endpoint() {
        assert_eq!(
            GetSleepByDateRangeTool::endpoint("2023-01-01", "2023-01-31"),
            "sleep/date/2023-01-01/2023-01-31.json"
        );
        assert_eq!(
            GetSleepByDateRangeTool::error_context("2023-01-01", "2023-01-31"),
            "sleep data from 2023-01-01 to 2023-01-31"
        );
    }
}
