//! HTTP handlers for default value lookups

use axum::{extract::Path, Json};
use serde::Serialize;
use shared::{default_rainfall, default_soil_values, SoilDefaults};

#[derive(Serialize)]
pub struct RainfallResponse {
    pub region: String,
    pub rainfall_mm: f64,
}

/// Default nutrient and pH values for a soil type
pub async fn get_soil_defaults(Path(soil_type): Path<String>) -> Json<SoilDefaults> {
    Json(default_soil_values(&soil_type))
}

/// Default rainfall estimate for a region
pub async fn get_region_rainfall(Path(region): Path<String>) -> Json<RainfallResponse> {
    let rainfall_mm = default_rainfall(&region);
    Json(RainfallResponse {
        region,
        rainfall_mm,
    })
}
