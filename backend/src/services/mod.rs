//! Business logic services for the Crop Advisor service

pub mod catalog;
pub mod plan;
pub mod recommendation;

pub use catalog::{CatalogProvider, DefaultCatalogProvider};
pub use plan::PlanService;
pub use recommendation::RecommendationService;
