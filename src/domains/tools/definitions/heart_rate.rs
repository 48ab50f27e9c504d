//! Heart rate tools.
//!
//! Fitbit reports heart rate zones and resting heart rate either for a date
//! plus a trailing period, or over an explicit date range.

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

/// Trailing window accepted by the heart rate endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, JsonSchema)]
pub enum HeartRatePeriod {
    #[serde(rename = "1d")]
    OneDay,
    #[serde(rename = "7d")]
    SevenDays,
    #[serde(rename = "30d")]
    ThirtyDays,
    #[serde(rename = "1w")]
    OneWeek,
    #[serde(rename = "1m")]
    OneMonth,
}

impl HeartRatePeriod {
    /// Path segment for this period.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::OneDay => "1d",
            Self::SevenDays => "7d",
            Self::ThirtyDays => "30d",
            Self::OneWeek => "1w",
            Self::OneMonth => "1m",
        }
    }
}

impl Default for HeartRatePeriod {
    fn default() -> Self {
        Self::OneDay
    }
}

/// Parameters for the date-plus-period heart rate lookup.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct GetHeartRateParams {
    #[schemars(description = "Date in YYYY-MM-DD format or 'today'")]
    pub date: String,

    /// Trailing window ending at `date` (default: 1d).
    #[serde(default)]
    #[schemars(description = "Period: '1d', '7d', '30d', '1w', or '1m' (default: '1d')")]
    pub period: HeartRatePeriod,
}

/// Parameters for the heart rate lookup over a date range.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct GetHeartRateByDateRangeParams {
    #[serde(rename = "startDate")]
    #[schemars(description = "Start date in YYYY-MM-DD format or 'today'")]
    pub start_date: String,

    #[serde(rename = "endDate")]
    #[schemars(description = "End date in YYYY-MM-DD format or 'today'")]
    pub end_date: String,
}

/// Heart rate zones for a date and trailing period.
#[derive(Debug, Clone)]
pub struct GetHeartRateTool;

impl GetHeartRateTool {
    pub const NAME: &'static str = "get_heart_rate";

    pub const DESCRIPTION: &'static str = "Get the raw JSON response for heart rate data from Fitbit for a date and trailing period. Returns resting heart rate and time in each heart rate zone.";

    fn endpoint(date: &str, period: HeartRatePeriod) -> String {
        format!("activities/heart/date/{}/{}.json", date, period.as_str())
    }

    fn error_context(date: &str, period: HeartRatePeriod) -> String {
        format!("heart rate data for {} ({})", date, period.as_str())
    }

    /// Execute the tool logic.
    pub async fn execute(
        api: &FitbitApi,
        params: &GetHeartRateParams,
    ) -> Result<CallToolResult, ToolError> {
        validate_date(&params.date)?;
        api.call(
            &Self::endpoint(&params.date, params.period),
            &Self::error_context(&params.date, params.period),
        )
        .await
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<GetHeartRateParams>(),
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
                let params: GetHeartRateParams =
                    serde_json::from_value(serde_json::Value::Object(args))
                        .map_err(|e| McpError::invalid_params(e.to_string(), None))?;

                Self::execute(&api, &params).await.map_err(McpError::from)
            }
            .boxed()
        })
    }
}

/// Heart rate zones over a date range.
#[derive(Debug, Clone)]
pub struct GetHeartRateByDateRangeTool;

impl GetHeartRateByDateRangeTool {
    pub const NAME: &'static str = "get_heart_rate_by_date_range";

    pub const DESCRIPTION: &'static str = "Get the raw JSON response for heart rate data from Fitbit over a date range (max 366 days). Returns resting heart rate and heart rate zones for each day.";

    fn endpoint(start: &str, end: &str) -> String {
        format!("activities/heart/date/{}/{}.json", start, end)
    }

    fn error_context(start: &str, end: &str) -> String {
        format!("heart rate data from {} to {}", start, end)
    }

    /// Execute the tool logic.
    pub async fn execute(
        api: &FitbitApi,
        params: &GetHeartRateByDateRangeParams,
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
            input_schema: cached_schema_for_type::<GetHeartRateByDateRangeParams>(),
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
                let params: GetHeartRateByDateRangeParams =
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
    fn test_period_endpoint() {
        assert_eq!(
            GetHeartRateTool::endpoint("2023-01-15", HeartRatePeriod::OneDay),
            "activities/heart/date/2023-01-15/1d.json"
        );
        assert_eq!(
            GetHeartRateTool::endpoint("today", HeartRatePeriod::OneMonth),
            "activities/heart/date/today/1m.json"
        );
    }

    #[test]
    fn test_period_defaults_to_one_day() {
        let params: GetHeartRateParams =
            serde_json::from_str(r#"{"date": "2023-01-15"}"#).unwrap();
        assert_eq!(params.period, HeartRatePeriod::OneDay);
    }

    #[test]
    fn test_period_deserializes_short_forms() {
        let params: GetHeartRateParams =
            serde_json::from_str(r#"{"date": "2023-01-15", "period": "30d"}"#).unwrap();
        assert_eq!(params.period, HeartRatePeriod::ThirtyDays);
    }

    #[test]
    fn test_range_endpoint_and_context() {
        assert_eq!(
            GetHeartRateByDateRangeTool::endpoint("2023-01-01", "2023-01-07"),
            "activities/heart/date/2023-01-01/2023-01-07.json"
        );
        assert_eq!(
            GetHeartRateByDateRangeTool::error_context("2023-01-01", "2023-01-07"),
            "heart rate data from 2023-01-01 to 2023-01-07"
        );
    }
}
