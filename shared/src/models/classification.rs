//! Feature classifier models

use serde::{Deserialize, Serialize};

use crate::tables::{default_rainfall, default_soil_values, FEATURE_COUNT};

/// Seven soil and weather measurements consumed by the classifier
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct FeatureVector {
    pub nitrogen: f64,
    pub phosphorus: f64,
    pub potassium: f64,
    /// Degrees Celsius
    pub temperature: f64,
    /// Relative humidity, percent
    pub humidity: f64,
    pub ph: f64,
    /// Millimetres
    pub rainfall: f64,
}

impl FeatureVector {
    pub fn new(
        nitrogen: f64,
        phosphorus: f64,
        potassium: f64,
        temperature: f64,
        humidity: f64,
        ph: f64,
        rainfall: f64,
    ) -> Self {
        Self {
            nitrogen,
            phosphorus,
            potassium,
            temperature,
            humidity,
            ph,
            rainfall,
        }
    }

    /// Build a vector from soil and region defaults plus a weather reading
    pub fn from_conditions(soil_type: &str, region: &str, temperature: f64, humidity: f64) -> Self {
        let soil = default_soil_values(soil_type);
        Self {
            nitrogen: soil.nitrogen,
            phosphorus: soil.phosphorus,
            potassium: soil.potassium,
            temperature,
            humidity,
            ph: soil.ph,
            rainfall: default_rainfall(region),
        }
    }

    pub fn to_array(&self) -> [f64; FEATURE_COUNT] {
        [
            self.nitrogen,
            self.phosphorus,
            self.potassium,
            self.temperature,
            self.humidity,
            self.ph,
            self.rainfall,
        ]
    }
}

/// Display band over the rescaled confidence
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ConfidenceBand {
    High,
    Medium,
    Low,
}

impl ConfidenceBand {
    pub fn from_confidence(confidence: f64) -> Self {
        if confidence >= 70.0 {
            ConfidenceBand::High
        } else if confidence >= 50.0 {
            ConfidenceBand::Medium
        } else {
            ConfidenceBand::Low
        }
    }
}

/// A crop ranked by the classifier
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ClassificationResult {
    pub crop_key: String,
    pub display_name: String,
    pub icon: String,
    pub season: String,
    /// Rescaled display confidence in [20, 95]; not a probability
    pub confidence: f64,
    /// Softmax percentage before rescaling
    pub raw_confidence: f64,
    pub band: ConfidenceBand,
}

/// Classifier lifecycle state
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum ModelState {
    #[default]
    Uninitialized,
    Ready,
    FallbackOnly,
}

impl ModelState {
    pub fn is_ready(&self) -> bool {
        matches!(self, ModelState::Ready)
    }
}
