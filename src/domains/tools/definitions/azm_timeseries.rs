//! Active Zone Minutes (AZM) time series tool.

use std::sync::Arc;

use futures::FutureExt;
use rmcp::{
    ErrorData as McpError,
    handler::server::tool::{ToolCallContext, ToolRoute, cached_schema_for_type},
    model::{CallToolResult, Tool},
};
use schemars::JsonSchema;
use serde::Deserialize;

use super::common::validate_date_range;
use crate::domains::tools::api::FitbitApi;
use crate::domains::tools::error::ToolError;

/// Parameters for the AZM time series lookup.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct GetAzmTimeSeriesParams {
    #[serde(rename = "startDate")]
    #[schemars(description = "Start date in YYYY-MM-DD format or 'today'")]
    pub start_date: String,

    #[serde(rename = "endDate")]
    #[schemars(description = "End date in YYYY-MM-DD format or 'today'")]
    pub end_date: String,
}

/// Active Zone Minutes per day over a date range.
#[derive(Debug, Clone)]
pub struct GetAzmTimeSeriesTool;

impl GetAzmTimeSeriesTool {
    pub const NAME: &'static str = "get_azm_timeseries";

    pub const DESCRIPTION: &'static str = "Get the raw JSON response for the Active Zone Minutes (AZM) time series from Fitbit over a date range (max 1095 days). Returns fat burn, cardio, and peak minutes per day.";

    fn endpoint(start: &str, end: &str) -> String {
        format!("activities/active-zone-minutes/date/{}/{}.json", start, end)
    }

    fn error_context(start: &str, end: &str) -> String {
        format!("active zone minutes from {} to {}", start, end)
    }

    /// Execute the tool logic.
    pub async fn execute(
        api: &FitbitApi,
        params: &GetAzmTimeSeriesParams,
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
            input_schema: cached_schema_for_type::<GetAzmTimeSeriesParams>(),
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
                let params: GetAzmTimeSeriesParams =
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
    fn test_endpoint_and_context() {
        assert_eq!(
            GetAzmTimeSeriesTool::endpoint("2023-01-01", "2023-01-07"),
            "activities/active-zone-minutes/date/2023-01-01/2023-01-07.json"
        );
        assert_eq!(
            GetAzmTimeSeriesTool::error_context("2023-01-01", "2023-01-07"),
            "active zone minutes from 2023-01-01 to 2023-01-07"
        );
    }
}
