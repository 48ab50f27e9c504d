//! Activity time series tool.
//!
//! One tool covers all daily activity time-series resources; the resource
//! itself is an enumerated parameter so the schema rejects unknown paths
//! before the handler runs.

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

/// Daily activity time-series resources exposed by Fitbit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub enum ActivityResource {
    Steps,
    Distance,
    Calories,
    Floors,
    Elevation,
    MinutesSedentary,
    MinutesLightlyActive,
    MinutesFairlyActive,
    MinutesVeryActive,
}

impl ActivityResource {
    /// Path segment for this resource.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Steps => "steps",
            Self::Distance => "distance",
            Self::Calories => "calories",
            Self::Floors => "floors",
            Self::Elevation => "elevation",
            Self::MinutesSedentary => "minutesSedentary",
            Self::MinutesLightlyActive => "minutesLightlyActive",
            Self::MinutesFairlyActive => "minutesFairlyActive",
            Self::MinutesVeryActive => "minutesVeryActive",
        }
    }
}

/// Parameters for the activity time series lookup.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct GetActivityTimeSeriesParams {
    #[schemars(
        description = "Activity resource: steps, distance, calories, floors, elevation, minutesSedentary, minutesLightlyActive, minutesFairlyActive, or minutesVeryActive"
    )]
    pub resource: ActivityResource,

    #[serde(rename = "startDate")]
    #[schemars(description = "Start date in YYYY-MM-DD format or 'today'")]
    pub start_date: String,

    #[serde(rename = "endDate")]
    #[schemars(description = "End date in YYYY-MM-DD format or 'today'")]
    pub end_date: String,
}

/// Daily values of one activity resource over a date range.
#[derive(Debug, Clone)]
pub struct GetActivityTimeSeriesTool;

impl GetActivityTimeSeriesTool {
    pub const NAME: &'static str = "get_activity_timeseries";

    pub const DESCRIPTION: &'static str = "Get the raw JSON response for a daily activity time series from Fitbit over a date range (max 1095 days). Returns one dateTime/value pair per day for the selected resource.";

    fn endpoint(resource: ActivityResource, start: &str, end: &str) -> String {
        format!(
            "activities/{}/date/{}/{}.json",
            resource.as_str(),
            start,
            end
        )
    }

    fn error_context(resource: ActivityResource, start: &str, end: &str) -> String {
        format!(
            "activity time series ({}) from {} to {}",
            resource.as_str(),
            start,
            end
        )
    }

    /// Execute the tool logic.
    pub async fn execute(
        api: &FitbitApi,
        params: &GetActivityTimeSeriesParams,
    ) -> Result<CallToolResult, ToolError> {
        validate_date_range(&params.start_date, &params.end_date)?;
        api.call(
            &Self::endpoint(params.resource, &params.start_date, &params.end_date),
            &Self::error_context(params.resource, &params.start_date, &params.end_date),
        )
        .await
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<GetActivityTimeSeriesParams>(),
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
                let params: GetActivityTimeSeriesParams =
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
    fn test_endpoint_uses_camel_case_resources() {
        assert_eq!(
            GetActivityTimeSeriesTool::endpoint(
                ActivityResource::Steps,
                "2023-01-01",
                "2023-01-31"
            ),
            "activities/steps/date/2023-01-01/2023-01-31.json"
        );
        assert_eq!(
            GetActivityTimeSeriesTool::endpoint(
                ActivityResource::MinutesVeryActive,
                "2023-01-01",
                "2023-01-31"
            ),
            "activities/minutesVeryActive/date/2023-01-01/2023-01-31.json"
        );
    }

    #[test]
    fn test_resource_deserializes_camel_case() {
        let params: GetActivityTimeSeriesParams = serde_json::from_str(
            r#"{"resource": "minutesSedentary", "startDate": "2023-01-01", "endDate": "2023-01-07"}"#,
        )
        .unwrap();
        assert_eq!(params.resource, ActivityResource::MinutesSedentary);
    }

    #[test]
    fn test_unknown_resource_rejected() {
        let result = serde_json::from_str::<GetActivityTimeSeriesParams>(
            r#"{"resource": "heartbeat", "startDate": "2023-01-01", "endDate": "2023-01-07"}"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_error_context_names_resource() {
        assert_eq!(
            GetActivityTimeSeriesTool::error_context(
                ActivityResource::Distance,
                "2023-01-01",
                "2023-01-07"
            ),
            "activity time series (distance) from 2023-01-01 to 2023-01-07"
        );
    }
}
