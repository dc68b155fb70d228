//! Health check handlers

use axum::{extract::State, Json};
use serde::Serialize;
use shared::ModelState;

use crate::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub environment: String,
    pub classifier: ModelState,
    pub weather: bool,
    pub plan_generator: bool,
}

/// Health check endpoint handler
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        environment: state.config.environment.clone(),
        classifier: state.classifier.state(),
        weather: state.weather_client.is_some(),
        plan_generator: state.plan_client.is_some(),
    })
}
