//! HTTP handlers for crop recommendation endpoints

use axum::{
    extract::{Path, State},
    Json,
};
use shared::{ClassificationResult, CropCatalogEntry, SuitabilityResult};

use crate::error::AppResult;
use crate::services::recommendation::{
    ClassifyInput, ConditionsClassification, ConditionsInput, RecommendInput,
};
use crate::services::{CatalogProvider, RecommendationService};
use crate::AppState;

fn service(state: &AppState) -> RecommendationService {
    RecommendationService::new(state.classifier, state.catalog.clone())
        .with_weather_client(state.weather_client.clone())
}

/// List the crop catalog
pub async fn get_catalog(State(state): State<AppState>) -> AppResult<Json<Vec<CropCatalogEntry>>> {
    let crops = service(&state).catalog()?;
    Ok(Json(crops))
}

/// Get a catalog crop by id
pub async fn get_crop(
    State(state): State<AppState>,
    Path(crop_id): Path<String>,
) -> AppResult<Json<CropCatalogEntry>> {
    let crop = state.catalog.find_crop(&crop_id)?;
    Ok(Json(crop))
}

/// Rank catalog crops for a farm
pub async fn recommend_crops(
    State(state): State<AppState>,
    Json(input): Json<RecommendInput>,
) -> AppResult<Json<Vec<SuitabilityResult>>> {
    let results = service(&state).recommend(input)?;
    Ok(Json(results))
}

/// Classify a soil/weather feature vector
pub async fn classify_crops(
    State(state): State<AppState>,
    Json(input): Json<ClassifyInput>,
) -> AppResult<Json<Vec<ClassificationResult>>> {
    let results = service(&state).classify(input)?;
    Ok(Json(results))
}

/// Classify from current weather at a location plus soil and region defaults
pub async fn classify_from_conditions(
    State(state): State<AppState>,
    Json(input): Json<ConditionsInput>,
) -> AppResult<Json<ConditionsClassification>> {
    let result = service(&state).classify_conditions(input).await?;
    Ok(Json(result))
}
