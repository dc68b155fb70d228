//! Farming plan models

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Closed set of plan activity categories
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub enum ActivityCategory {
    Preparation,
    Sowing,
    Irrigation,
    Fertilizer,
    PestControl,
    Maintenance,
    Harvesting,
}

impl ActivityCategory {
    pub const ALL: [ActivityCategory; 7] = [
        ActivityCategory::Preparation,
        ActivityCategory::Sowing,
        ActivityCategory::Irrigation,
        ActivityCategory::Fertilizer,
        ActivityCategory::PestControl,
        ActivityCategory::Maintenance,
        ActivityCategory::Harvesting,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ActivityCategory::Preparation => "preparation",
            ActivityCategory::Sowing => "sowing",
            ActivityCategory::Irrigation => "irrigation",
            ActivityCategory::Fertilizer => "fertilizer",
            ActivityCategory::PestControl => "pestControl",
            ActivityCategory::Maintenance => "maintenance",
            ActivityCategory::Harvesting => "harvesting",
        }
    }
}

impl std::fmt::Display for ActivityCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// An activity relative to the sowing date, as returned by the plan generator
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PlanActivity {
    /// Days after sowing; negative for pre-sowing preparation
    pub day_offset: i64,
    pub title: String,
    pub description: String,
    pub category: ActivityCategory,
}

/// A plan activity pinned to a calendar date
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ScheduledActivity {
    pub date: NaiveDate,
    pub day_offset: i64,
    pub title: String,
    pub description: String,
    pub category: ActivityCategory,
}
