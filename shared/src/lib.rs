//! Crop suitability and recommendation engine
//!
//! Shared between the backend service and the on-device WASM build. Both
//! scoring components are pure functions of their inputs:
//! - [`recommender`]: weighted rule-based ranking of a crop catalog
//! - [`classifier`]: Gaussian-likelihood classification of a feature vector

pub mod classifier;
pub mod models;
pub mod plan;
pub mod recommender;
pub mod tables;
pub mod validation;

pub use classifier::{fallback_predictions, CropClassifier, FallbackReason};
pub use models::*;
pub use plan::{build_plan_prompt, parse_plan_activities, schedule_plan, PlanError};
pub use recommender::{recommend, recommend_on};
pub use tables::{default_rainfall, default_soil_values, SoilDefaults};
pub use validation::*;
