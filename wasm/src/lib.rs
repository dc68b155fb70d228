//! WebAssembly module for the Crop Advisor mobile client
//!
//! Provides on-device computation for:
//! - Rule-based crop recommendations
//! - Soil/weather feature classification
//! - Default soil and rainfall lookups
//! - Farming plan date scheduling

use chrono::NaiveDate;
use serde::Serialize;
use wasm_bindgen::prelude::*;

// Re-export shared types for use in JavaScript
pub use shared::models::*;

fn to_json<T: Serialize>(value: &T) -> Result<String, JsValue> {
    serde_json::to_string(value).map_err(|e| JsValue::from_str(&format!("Serialization failed: {}", e)))
}

fn parse_date(date: &str) -> Result<NaiveDate, JsValue> {
    NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .map_err(|e| JsValue::from_str(&format!("Invalid date '{}': {}", date, e)))
}

/// Initialize the WASM module
#[wasm_bindgen(start)]
pub fn init() {
    web_sys::console::log_1(&"crop advisor scoring core loaded".into());
}

/// Built-in crop catalog as JSON
#[wasm_bindgen]
pub fn default_catalog_json() -> Result<String, JsValue> {
    to_json(&shared::default_catalog())
}

/// Rank a JSON crop catalog for a farm, using today's date for the season.
/// An empty catalog string uses the built-in catalog.
#[wasm_bindgen]
pub fn recommend_crops(
    region: &str,
    soil_type: &str,
    land_size: f64,
    catalog_json: &str,
) -> Result<String, JsValue> {
    let now = js_sys::Date::new_0();
    let today = format!(
        "{:04}-{:02}-{:02}",
        now.get_full_year(),
        now.get_month() + 1,
        now.get_date()
    );
    recommend_on_date(&today, region, soil_type, land_size, catalog_json)
}

/// Rank a JSON crop catalog with the season taken from a `YYYY-MM-DD` date
#[wasm_bindgen]
pub fn recommend_on_date(
    date: &str,
    region: &str,
    soil_type: &str,
    land_size: f64,
    catalog_json: &str,
) -> Result<String, JsValue> {
    let date = parse_date(date)?;
    let catalog: Vec<CropCatalogEntry> = if catalog_json.trim().is_empty() {
        shared::default_catalog()
    } else {
        serde_json::from_str(catalog_json)
            .map_err(|e| JsValue::from_str(&format!("Invalid catalog JSON: {}", e)))?
    };
    to_json(&shared::recommend_on(date, region, soil_type, land_size, &catalog))
}

/// Classify a feature vector; `top_n` of zero returns all 22 crops
#[wasm_bindgen]
#[allow(clippy::too_many_arguments)]
pub fn classify_crops(
    nitrogen: f64,
    phosphorus: f64,
    potassium: f64,
    temperature: f64,
    humidity: f64,
    ph: f64,
    rainfall: f64,
    top_n: usize,
) -> Result<String, JsValue> {
    let features = FeatureVector::new(nitrogen, phosphorus, potassium, temperature, humidity, ph, rainfall);
    let classifier = shared::CropClassifier::initialize();
    let results = if top_n == 0 {
        classifier.classify(&features)
    } else {
        classifier.top_n(&features, top_n)
    };
    to_json(&results)
}

/// Classify from soil type, region and a weather reading
#[wasm_bindgen]
pub fn classify_conditions(
    soil_type: &str,
    region: &str,
    temperature: f64,
    humidity: f64,
    top_n: usize,
) -> Result<String, JsValue> {
    let features = FeatureVector::from_conditions(soil_type, region, temperature, humidity);
    classify_crops(
        features.nitrogen,
        features.phosphorus,
        features.potassium,
        features.temperature,
        features.humidity,
        features.ph,
        features.rainfall,
        top_n,
    )
}

/// Default soil values as JSON
#[wasm_bindgen]
pub fn soil_defaults(soil_type: &str) -> Result<String, JsValue> {
    to_json(&shared::default_soil_values(soil_type))
}

/// Default rainfall estimate for a region
#[wasm_bindgen]
pub fn region_rainfall(region: &str) -> f64 {
    shared::default_rainfall(region)
}

/// Suitability level label for a recommender score
#[wasm_bindgen]
pub fn suitability_level(score: f64) -> String {
    format!("{}", SuitabilityLevel::from_score(score))
}

/// Parse generator output and pin activities to dates from a sowing date
#[wasm_bindgen]
pub fn schedule_plan(sowing_date: &str, generator_output: &str) -> Result<String, JsValue> {
    let sowing = parse_date(sowing_date)?;
    let activities = shared::parse_plan_activities(generator_output)
        .map_err(|e| JsValue::from_str(&e.to_string()))?;
    let plan = shared::schedule_plan(sowing, &activities)
        .map_err(|e| JsValue::from_str(&e.to_string()))?;
    to_json(&plan)
}
