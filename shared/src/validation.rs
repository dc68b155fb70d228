//! Input checks for callers of the scoring core
//!
//! The recommender and classifier accept any input; these helpers let an
//! outer surface reject or flag values before scoring.

use crate::models::FeatureVector;
use crate::tables::FEATURE_NAMES;

/// Typical agronomic range per feature, in vector order
pub const TYPICAL_FEATURE_RANGES: [(f64, f64); 7] = [
    (0.0, 140.0),
    (5.0, 145.0),
    (5.0, 205.0),
    (8.0, 44.0),
    (14.0, 100.0),
    (3.5, 10.0),
    (20.0, 300.0),
];

/// Validate farm land size (acres)
pub fn validate_land_size(land_size: f64) -> Result<(), &'static str> {
    if !land_size.is_finite() {
        return Err("Land size must be a number");
    }
    if land_size <= 0.0 {
        return Err("Land size must be greater than zero");
    }
    Ok(())
}

/// Validate that every feature is a finite number
pub fn validate_feature_vector(features: &FeatureVector) -> Result<(), &'static str> {
    if features.to_array().iter().all(|v| v.is_finite()) {
        Ok(())
    } else {
        Err("Feature values must be finite numbers")
    }
}

/// Names of features outside their typical range
pub fn out_of_range_features(features: &FeatureVector) -> Vec<&'static str> {
    features
        .to_array()
        .iter()
        .zip(TYPICAL_FEATURE_RANGES.iter())
        .zip(FEATURE_NAMES.iter())
        .filter(|((v, (lo, hi)), _)| **v < *lo || **v > *hi)
        .map(|(_, name)| *name)
        .collect()
}
