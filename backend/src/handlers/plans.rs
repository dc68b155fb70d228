//! HTTP handlers for farming plan endpoints

use axum::{extract::State, Json};
use shared::ScheduledActivity;

use crate::error::AppResult;
use crate::services::plan::{GeneratePlanInput, SchedulePlanInput};
use crate::services::PlanService;
use crate::AppState;

/// Generate a dated farming plan for a chosen crop
pub async fn generate_plan(
    State(state): State<AppState>,
    Json(input): Json<GeneratePlanInput>,
) -> AppResult<Json<Vec<ScheduledActivity>>> {
    let service = PlanService::new(state.plan_client);
    let plan = service.generate(input).await?;
    Ok(Json(plan))
}

/// Pin caller-supplied activities to dates
pub async fn schedule_plan(
    State(state): State<AppState>,
    Json(input): Json<SchedulePlanInput>,
) -> AppResult<Json<Vec<ScheduledActivity>>> {
    let service = PlanService::new(state.plan_client);
    let plan = service.schedule(input)?;
    Ok(Json(plan))
}
