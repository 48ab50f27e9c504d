//! Tool definitions module.
//!
//! This module exports all available tool definitions.
//! Each Fitbit resource family is defined in its own file for better
//! maintainability.

pub mod activities;
pub mod activity_goals;
pub mod activity_timeseries;
pub mod azm_timeseries;
pub mod common;
pub mod daily_activity;
pub mod heart_rate;
pub mod hrv;
pub mod nutrition;
pub mod profile;
pub mod sleep;
pub mod weight;

pub use activities::{GetExercisesParams, GetExercisesTool};
pub use activity_goals::{GetActivityGoalsParams, GetActivityGoalsTool, GoalPeriod};
pub use activity_timeseries::{
    ActivityResource, GetActivityTimeSeriesParams, GetActivityTimeSeriesTool,
};
pub use azm_timeseries::{GetAzmTimeSeriesParams, GetAzmTimeSeriesTool};
pub use daily_activity::{GetDailyActivityParams, GetDailyActivityTool};
pub use heart_rate::{
    GetHeartRateByDateRangeParams, GetHeartRateByDateRangeTool, GetHeartRateParams,
    GetHeartRateTool, HeartRatePeriod,
};
pub use hrv::{GetHrvByDateRangeParams, GetHrvByDateRangeTool, GetHrvParams, GetHrvTool};
pub use nutrition::{GetFoodLogParams, GetFoodLogTool, GetWaterLogParams, GetWaterLogTool};
pub use profile::GetProfileTool;
pub use sleep::{
    GetSleepByDateRangeParams, GetSleepByDateRangeTool, GetSleepParams, GetSleepTool,
};
pub use weight::{GetWeightParams, GetWeightTool};
