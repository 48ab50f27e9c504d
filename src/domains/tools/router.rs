//! Tool Router - builds the rmcp ToolRouter from the tool definitions.
//!
//! Each tool knows how to create its own route; this module wires them all
//! to the shared API executor, in the same order the registry lists them.

use std::sync::Arc;

use rmcp::handler::server::tool::ToolRouter;

use super::api::FitbitApi;
use super::definitions::{
    GetActivityGoalsTool, GetActivityTimeSeriesTool, GetAzmTimeSeriesTool, GetDailyActivityTool,
    GetExercisesTool, GetFoodLogTool, GetHeartRateByDateRangeTool, GetHeartRateTool,
    GetHrvByDateRangeTool, GetHrvTool, GetProfileTool, GetSleepByDateRangeTool, GetSleepTool,
    GetWaterLogTool, GetWeightTool,
};

/// Build the tool router with all registered tools.
pub fn build_tool_router<S>(api: Arc<FitbitApi>) -> ToolRouter<S>
where
    S: Send + Sync + 'static,
{
    ToolRouter::new()
        .with_route(GetWeightTool::create_route(api.clone()))
        .with_route(GetSleepTool::create_route(api.clone()))
        .with_route(GetSleepByDateRangeTool::create_route(api.clone()))
        .with_route(GetProfileTool::create_route(api.clone()))
        .with_route(GetExercisesTool::create_route(api.clone()))
        .with_route(GetHeartRateTool::create_route(api.clone()))
        .with_route(GetHeartRateByDateRangeTool::create_route(api.clone()))
        .with_route(GetFoodLogTool::create_route(api.clone()))
        .with_route(GetWaterLogTool::create_route(api.clone()))
        .with_route(GetDailyActivityTool::create_route(api.clone()))
        .with_route(GetActivityGoalsTool::create_route(api.clone()))
        .with_route(GetActivityTimeSeriesTool::create_route(api.clone()))
        .with_route(GetAzmTimeSeriesTool::create_route(api.clone()))
        .with_route(GetHrvTool::create_route(api.clone()))
        .with_route(GetHrvByDateRangeTool::create_route(api))
}
