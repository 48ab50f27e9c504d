//! Heart Rate Variability (HRV) tools.
//!
//! Two tools cover the HRV summary endpoints: a single-date lookup and a
//! date-range lookup (max 30 days on the Fitbit side).

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

/// Parameters for the single-date HRV summary.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct GetHrvParams {
    /// The day to fetch the HRV summary for.
    #[schemars(description = "Date in YYYY-MM-DD format or 'today'")]
    pub date: String,
}

/// Parameters for the HRV summary over a date range.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct GetHrvByDateRangeParams {
    /// Start of the range (inclusive).
    #[serde(rename = "startDate")]
    #[schemars(description = "Start date in YYYY-MM-DD format or 'today'")]
    pub start_date: String,

    /// End of the range (inclusive).
    #[serde(rename = "endDate")]
    #[schemars(description = "End date in YYYY-MM-DD format or 'today'")]
    pub end_date: String,
}

/// HRV summary for a single date.
#[derive(Debug, Clone)]
pub struct GetHrvTool;

impl GetHrvTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "get_hrv";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Get the raw JSON response for Heart Rate Variability (HRV) summary data from Fitbit for a single date. Returns daily RMSSD and deep sleep RMSSD values.";

    fn endpoint(date: &str) -> String {
        format!("hrv/date/{}.json", date)
    }

    fn error_context(date: &str) -> String {
        format!("HRV data for {}", date)
    }

    /// Execute the tool logic.
    pub async fn execute(
        api: &FitbitApi,
        params: &GetHrvParams,
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
            input_schema: cached_schema_for_type::<GetHrvParams>(),
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
                let params: GetHrvParams = serde_json::from_value(serde_json::Value::Object(args))
                    .map_err(|e| McpError::invalid_params(e.to_string(), None))?;

                Self::execute(&api, &params).await.map_err(McpError::from)
            }
            .boxed()
        })
    }
}

/// HRV summary over a date range.
#[derive(Debug, Clone)]
pub struct GetHrvByDateRangeTool;

impl GetHrvByDateRangeTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "get_hrv_by_date_range";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Get the raw JSON response for Heart Rate Variability (HRV) summary data from Fitbit over a date range (max 30 days). Returns daily RMSSD and deep sleep RMSSD values for each day.";

    fn endpoint(start: &str, end: &str) -> String {
        format!("hrv/date/{}/{}.json", start, end)
    }

    fn error_context(start: &str, end: &str) -> String {
        format!("HRV data from {} to {}", start, end)
    }

    /// Execute the tool logic.
    pub async fn execute(
        api: &FitbitApi,
        params: &GetHrvByDateRangeParams,
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
            input_schema: cached_schema_for_type::<GetHrvByDateRangeParams>(),
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
                let params: GetHrvByDateRangeParams =
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
    use crate::core::config::ApiConfig;
    use crate::domains::auth::StaticTokenProvider;

    fn offline_api() -> FitbitApi {
        FitbitApi::new(
            &ApiConfig {
                base_url: "http://127.0.0.1:1".to_string(),
            },
            Arc::new(StaticTokenProvider::empty()),
        )
    }

    #[test]
    fn test_single_date_endpoint() {
        assert_eq!(
            GetHrvTool::endpoint("2023-01-15"),
            "hrv/date/2023-01-15.json"
        );
    }

    #[test]
    fn test_single_date_error_context() {
        assert_eq!(
            GetHrvTool::error_context("2023-01-15"),
            "HRV data for 2023-01-15"
        );
    }

    #[test]
    fn test_range_endpoint() {
        assert_eq!(
            GetHrvByDateRangeTool::endpoint("2023-01-01", "2023-01-07"),
            "hrv/date/2023-01-01/2023-01-07.json"
        );
    }

    #[test]
    fn test_range_error_context() {
        assert_eq!(
            GetHrvByDateRangeTool::error_context("2023-01-01", "2023-01-07"),
            "HRV data from 2023-01-01 to 2023-01-07"
        );
    }

    #[test]
    fn test_range_params_use_camel_case() {
        let json = r#"{"startDate": "2023-01-01", "endDate": "2023-01-07"}"#;
        let params: GetHrvByDateRangeParams = serde_json::from_str(json).unwrap();
        assert_eq!(params.start_date, "2023-01-01");
        assert_eq!(params.end_date, "2023-01-07");
    }

    #[tokio::test]
    async fn test_invalid_date_rejected_before_network() {
        let api = offline_api();
        let params = GetHrvParams {
            date: "January 15".to_string(),
        };
        let err = GetHrvTool::execute(&api, &params).await.unwrap_err();
        assert!(matches!(err, ToolError::InvalidArguments(_)));
    }

    #[tokio::test]
    async fn test_missing_token_rejects_with_fixed_message() {
        let api = offline_api();
        let params = GetHrvParams {
            date: "2023-01-15".to_string(),
        };
        let err = GetHrvTool::execute(&api, &params).await.unwrap_err();
        assert_eq!(err.to_string(), "No access token available");
    }
}
