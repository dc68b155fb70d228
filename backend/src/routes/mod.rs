//! Route definitions for the Crop Advisor API

use axum::{
    routing::{get, post},
    Router,
};

use crate::{handlers, AppState};

/// Create API routes
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(handlers::health_check))
        .nest("/crops", crop_routes())
        .nest("/lookups", lookup_routes())
        .nest("/plans", plan_routes())
}

/// Crop recommendation routes
fn crop_routes() -> Router<AppState> {
    Router::new()
        .route("/catalog", get(handlers::get_catalog))
        .route("/catalog/:crop_id", get(handlers::get_crop))
        .route("/recommend", post(handlers::recommend_crops))
        .route("/classify", post(handlers::classify_crops))
        .route("/classify/conditions", post(handlers::classify_from_conditions))
}

/// Default value lookup routes
fn lookup_routes() -> Router<AppState> {
    Router::new()
        .route("/soil/:soil_type", get(handlers::get_soil_defaults))
        .route("/rainfall/:region", get(handlers::get_region_rainfall))
}

/// Farming plan routes
fn plan_routes() -> Router<AppState> {
    Router::new()
        .route("/generate", post(handlers::generate_plan))
        .route("/schedule", post(handlers::schedule_plan))
}
