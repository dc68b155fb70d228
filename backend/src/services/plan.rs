//! Farming plan service
//!
//! Asks the external generator for a plan and pins the returned activities
//! to calendar dates.

use chrono::NaiveDate;
use serde::Deserialize;
use validator::Validate;

use shared::{
    build_plan_prompt, parse_plan_activities, schedule_plan, PlanActivity, PlanError,
    ScheduledActivity,
};

use crate::error::{AppError, AppResult};
use crate::external::PlanGeneratorClient;
use crate::services::recommendation::positive_land_size;

/// Farming plan service
#[derive(Clone)]
pub struct PlanService {
    client: Option<PlanGeneratorClient>,
}

/// Input for generating a plan
#[derive(Debug, Deserialize, Validate)]
pub struct GeneratePlanInput {
    #[validate(length(min = 1, message = "Crop name is required"))]
    pub crop_name: String,
    pub sowing_date: NaiveDate,
    #[validate(length(min = 1, message = "Region is required"))]
    pub region: String,
    #[validate(length(min = 1, message = "Soil type is required"))]
    pub soil_type: String,
    /// Acres
    #[validate(custom = "positive_land_size")]
    pub land_size: f64,
}

/// Input for scheduling caller-supplied activities
#[derive(Debug, Deserialize)]
pub struct SchedulePlanInput {
    pub sowing_date: NaiveDate,
    pub activities: Vec<PlanActivity>,
}

impl PlanService {
    pub fn new(client: Option<PlanGeneratorClient>) -> Self {
        Self { client }
    }

    /// Generate a dated plan for a chosen crop
    pub async fn generate(&self, input: GeneratePlanInput) -> AppResult<Vec<ScheduledActivity>> {
        input.validate()?;

        let client = self.client.as_ref().ok_or_else(|| {
            AppError::Configuration("Plan generator not configured".to_string())
        })?;

        let prompt = build_plan_prompt(
            &input.crop_name,
            input.sowing_date,
            &input.region,
            &input.soil_type,
            input.land_size,
        );
        let reply = client.generate(&prompt).await?;
        let activities = parse_plan_activities(&reply)?;

        tracing::info!(
            crop = %input.crop_name,
            sowing_date = %input.sowing_date,
            activities = activities.len(),
            "Generated farming plan"
        );
        schedule_plan(input.sowing_date, &activities).map_err(AppError::from)
    }

    /// Date arithmetic over an existing activity list
    pub fn schedule(&self, input: SchedulePlanInput) -> AppResult<Vec<ScheduledActivity>> {
        if input.activities.is_empty() {
            return Err(AppError::Validation {
                field: "activities".to_string(),
                message: "At least one activity is required".to_string(),
            });
        }
        schedule_plan(input.sowing_date, &input.activities).map_err(|err| match err {
            PlanError::OffsetOutOfRange(offset) => AppError::Validation {
                field: "activities".to_string(),
                message: format!("Day offset {} is out of range", offset),
            },
            other => other.into(),
        })
    }
}
