//! Farming plan date contract
//!
//! The plan generator is an external text-generation service. It answers
//! with activities relative to the sowing date; this module builds its
//! prompt, extracts the activity list from the reply and pins each activity
//! to a calendar date.

use chrono::{Duration, NaiveDate};
use thiserror::Error;

use crate::models::{ActivityCategory, PlanActivity, ScheduledActivity};

/// Plan parsing errors
#[derive(Error, Debug)]
pub enum PlanError {
    #[error("No activity list found in generator output")]
    MissingActivityList,

    #[error("Malformed activity list: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("Generator returned an empty plan")]
    Empty,

    #[error("Day offset {0} is out of range")]
    OffsetOutOfRange(i64),
}

/// Largest accepted distance from the sowing date, in days
pub const MAX_DAY_OFFSET: i64 = 730;

/// Prompt describing the chosen crop and sowing date
pub fn build_plan_prompt(
    crop_name: &str,
    sowing_date: NaiveDate,
    region: &str,
    soil_type: &str,
    land_size: f64,
) -> String {
    let categories: Vec<&str> = ActivityCategory::ALL.iter().map(|c| c.as_str()).collect();
    format!(
        "Create a farming plan for {crop} sown on {date} in {region} on {land} acres of {soil} soil.\n\
         Respond with a JSON array only. Each element must have the fields \
         \"day_offset\" (integer days from sowing, negative for preparation before sowing), \
         \"title\", \"description\" and \"category\" (one of: {categories}).\n\
         Order the activities by day_offset and end with harvesting.",
        crop = crop_name,
        date = sowing_date.format("%Y-%m-%d"),
        region = region,
        land = land_size,
        soil = soil_type,
        categories = categories.join(", "),
    )
}

/// Extract the activity array from generator output.
///
/// The reply may wrap the array in prose or a fenced code block; the span
/// between the first `[` and the last `]` is parsed.
pub fn parse_plan_activities(text: &str) -> Result<Vec<PlanActivity>, PlanError> {
    let start = text.find('[').ok_or(PlanError::MissingActivityList)?;
    let end = text.rfind(']').ok_or(PlanError::MissingActivityList)?;
    if end < start {
        return Err(PlanError::MissingActivityList);
    }

    let activities: Vec<PlanActivity> = serde_json::from_str(&text[start..=end])?;
    if activities.is_empty() {
        return Err(PlanError::Empty);
    }
    if let Some(bad) = activities
        .iter()
        .find(|a| a.day_offset.unsigned_abs() > MAX_DAY_OFFSET.unsigned_abs())
    {
        return Err(PlanError::OffsetOutOfRange(bad.day_offset));
    }
    Ok(activities)
}

/// Pin activities to dates, ordered by day offset (stable on ties).
///
/// Offsets beyond [`MAX_DAY_OFFSET`], or dates chrono cannot represent,
/// fail with [`PlanError::OffsetOutOfRange`].
pub fn schedule_plan(
    sowing_date: NaiveDate,
    activities: &[PlanActivity],
) -> Result<Vec<ScheduledActivity>, PlanError> {
    let mut scheduled = Vec::with_capacity(activities.len());
    for a in activities {
        if a.day_offset.unsigned_abs() > MAX_DAY_OFFSET.unsigned_abs() {
            return Err(PlanError::OffsetOutOfRange(a.day_offset));
        }
        let date = sowing_date
            .checked_add_signed(Duration::days(a.day_offset))
            .ok_or(PlanError::OffsetOutOfRange(a.day_offset))?;
        scheduled.push(ScheduledActivity {
            date,
            day_offset: a.day_offset,
            title: a.title.clone(),
            description: a.description.clone(),
            category: a.category,
        });
    }
    scheduled.sort_by_key(|a| a.day_offset);
    Ok(scheduled)
}
