//! Tool Registry - the canonical list of all Fitbit tools.
//!
//! The registry is the single source of truth for which tools exist and in
//! what order they are registered. The router consumes it to build routes;
//! tests use it to check that names stay unique and ordering stays stable.

use rmcp::model::Tool;

use super::definitions::{
    GetActivityGoalsTool, GetActivityTimeSeriesTool, GetAzmTimeSeriesTool, GetDailyActivityTool,
    GetExercisesTool, GetFoodLogTool, GetHeartRateByDateRangeTool, GetHeartRateTool,
    GetHrvByDateRangeTool, GetHrvTool, GetProfileTool, GetSleepByDateRangeTool, GetSleepTool,
    GetWaterLogTool, GetWeightTool,
};

/// Tool registry - manages all available tools.
pub struct ToolRegistry;

impl ToolRegistry {
    /// Get all tool names, in registration order.
    pub fn tool_names() -> Vec<&'static str> {
        vec![
            GetWeightTool::NAME,
            GetSleepTool::NAME,
            GetSleepByDateRangeTool::NAME,
            GetProfileTool::NAME,
            GetExercisesTool::NAME,
            GetHeartRateTool::NAME,
            GetHeartRateByDateRangeTool::NAME,
            GetFoodLogTool::NAME,
            GetWaterLogTool::NAME,
            GetDailyActivityTool::NAME,
            GetActivityGoalsTool::NAME,
            GetActivityTimeSeriesTool::NAME,
            GetAzmTimeSeriesTool::NAME,
            GetHrvTool::NAME,
            GetHrvByDateRangeTool::NAME,
        ]
    }

    /// Get all tools as Tool models (metadata), in registration order.
    ///
    /// This is the single source of truth for all available tools; the
    /// router registers routes in exactly this order.
    pub fn get_all_tools() -> Vec<Tool> {
        vec![
            GetWeightTool::to_tool(),
            GetSleepTool::to_tool(),
            GetSleepByDateRangeTool::to_tool(),
            GetProfileTool::to_tool(),
            GetExercisesTool::to_tool(),
            GetHeartRateTool::to_tool(),
            GetHeartRateByDateRangeTool::to_tool(),
            GetFoodLogTool::to_tool(),
            GetWaterLogTool::to_tool(),
            GetDailyActivityTool::to_tool(),
            GetActivityGoalsTool::to_tool(),
            GetActivityTimeSeriesTool::to_tool(),
            GetAzmTimeSeriesTool::to_tool(),
            GetHrvTool::to_tool(),
            GetHrvByDateRangeTool::to_tool(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_registry_tool_names() {
        let names = ToolRegistry::tool_names();
        assert_eq!(names.len(), 15);
        assert!(names.contains(&"get_weight"));
        assert!(names.contains(&"get_sleep_by_date"));
        assert!(names.contains(&"get_sleep_by_date_range"));
        assert!(names.contains(&"get_profile"));
        assert!(names.contains(&"get_exercises"));
        assert!(names.contains(&"get_heart_rate"));
        assert!(names.contains(&"get_heart_rate_by_date_range"));
        assert!(names.contains(&"get_food_log"));
        assert!(names.contains(&"get_water_log"));
        assert!(names.contains(&"get_daily_activity_summary"));
        assert!(names.contains(&"get_activity_goals"));
        assert!(names.contains(&"get_activity_timeseries"));
        assert!(names.contains(&"get_azm_timeseries"));
        assert!(names.contains(&"get_hrv"));
        assert!(names.contains(&"get_hrv_by_date_range"));
    }

    #[test]
    fn test_tool_names_are_unique() {
        let names = ToolRegistry::tool_names();
        let unique: HashSet<_> = names.iter().collect();
        assert_eq!(unique.len(), names.len());
    }

    #[test]
    fn test_metadata_order_matches_name_order() {
        // The Nth registered tool must be identified by the Nth name.
        let names = ToolRegistry::tool_names();
        let tools = ToolRegistry::get_all_tools();
        assert_eq!(names.len(), tools.len());
        for (name, tool) in names.iter().zip(&tools) {
            assert_eq!(*name, tool.name.as_ref());
        }
    }

    #[test]
    fn test_hrv_tools_register_in_order() {
        let names = ToolRegistry::tool_names();
        let hrv = names.iter().position(|n| *n == "get_hrv").unwrap();
        let hrv_range = names
            .iter()
            .position(|n| *n == "get_hrv_by_date_range")
            .unwrap();
        assert_eq!(hrv_range, hrv + 1);
    }

    #[test]
    fn test_every_tool_declares_a_description() {
        for tool in ToolRegistry::get_all_tools() {
            let description = tool.description.expect("tool without description");
            assert!(!description.is_empty());
        }
    }
}
