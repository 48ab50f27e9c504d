//! Activity goals tool.

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

/// Goal period accepted by the goals endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum GoalPeriod {
    Daily,
    Weekly,
}

impl GoalPeriod {
    /// Path segment for this period.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Daily => "daily",
            Self::Weekly => "weekly",
        }
    }
}

/// Parameters for the activity goals lookup.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct GetActivityGoalsParams {
    #[schemars(description = "Goal period: 'daily' or 'weekly'")]
    pub period: GoalPeriod,
}

/// Activity goals for the daily or weekly period.
#[derive(Debug, Clone)]
pub struct GetActivityGoalsTool;

impl GetActivityGoalsTool {
    pub const NAME: &'static str = "get_activity_goals";

    pub const DESCRIPTION: &'static str = "Get the raw JSON response for the user's activity goals from Fitbit. Returns step, distance, calorie, floor, and active-minute targets for the daily or weekly period.";

    fn endpoint(period: GoalPeriod) -> String {
        format!("activities/goals/{}.json", period.as_str())
    }

    fn error_context(period: GoalPeriod) -> String {
        format!("{} activity goals", period.as_str())
    }

    /// Execute the tool logic.
    pub async fn execute(
        api: &FitbitApi,
        params: &GetActivityGoalsParams,
    ) -> Result<CallToolResult, ToolError> {
        api.call(
            &Self::endpoint(params.period),
            &Self::error_context(params.period),
        )
        .await
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<GetActivityGoalsParams>(),
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
                let params: GetActivityGoalsParams =
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
    fn test_endpoint_per_period() {
        assert_eq!(
            GetActivityGoalsTool::endpoint(GoalPeriod::Daily),
            "activities/goals/daily.json"
        );
        assert_eq!(
            GetActivityGoalsTool::endpoint(GoalPeriod::Weekly),
            "activities/goals/weekly.json"
        );
    }

    #[test]
    fn test_period_deserializes_lowercase() {
        let params: GetActivityGoalsParams =
            serde_json::from_str(r#"{"period": "weekly"}"#).unwrap();
        assert_eq!(params.period, GoalPeriod::Weekly);

        assert!(serde_json::from_str::<GetActivityGoalsParams>(r#"{"period": "monthly"}"#).is_err());
    }

    #[test]
    fn test_error_context() {
        assert_eq!(
            GetActivityGoalsTool::error_context(GoalPeriod::Daily),
            "daily activity goals"
        );
    }
}
