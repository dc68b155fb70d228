//! Crop recommendation service
//!
//! Wraps the rule-based recommender and the feature classifier from the
//! shared crate, and assembles classifier input from field conditions.

use std::sync::Arc;
use std::time::Duration;

use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use shared::{
    out_of_range_features, recommend_on, validate_land_size, ClassificationResult,
    CropCatalogEntry, CropClassifier, FallbackReason, FeatureVector, SuitabilityResult,
};

use crate::error::{AppError, AppResult};
use crate::external::weather::{WeatherClient, WeatherReading};
use crate::services::catalog::CatalogProvider;

/// Crop recommendation service
#[derive(Clone)]
pub struct RecommendationService {
    classifier: CropClassifier,
    catalog: Arc<dyn CatalogProvider>,
    weather_client: Option<WeatherClient>,
}

pub(crate) fn positive_land_size(land_size: f64) -> Result<(), ValidationError> {
    validate_land_size(land_size).map_err(|msg| {
        let mut err = ValidationError::new("land_size");
        err.message = Some(msg.into());
        err
    })
}

fn valid_latitude(latitude: f64) -> Result<(), ValidationError> {
    if (-90.0..=90.0).contains(&latitude) {
        Ok(())
    } else {
        Err(ValidationError::new("latitude"))
    }
}

fn valid_longitude(longitude: f64) -> Result<(), ValidationError> {
    if (-180.0..=180.0).contains(&longitude) {
        Ok(())
    } else {
        Err(ValidationError::new("longitude"))
    }
}

/// Input for rule-based recommendations
#[derive(Debug, Deserialize, Validate)]
pub struct RecommendInput {
    #[validate(length(min = 1, message = "Region is required"))]
    pub region: String,
    #[validate(length(min = 1, message = "Soil type is required"))]
    pub soil_type: String,
    /// Acres
    #[validate(custom = "positive_land_size")]
    pub land_size: f64,
    /// Caller-supplied catalog; the configured catalog is used when absent
    pub catalog: Option<Vec<CropCatalogEntry>>,
    /// Date used to determine the season; today when absent
    pub date: Option<NaiveDate>,
}

/// Input for feature classification
#[derive(Debug, Deserialize, Validate)]
pub struct ClassifyInput {
    #[serde(flatten)]
    pub features: FeatureVector,
    #[validate(range(min = 1, max = 22))]
    pub top_n: Option<usize>,
}

/// Input for classification from field conditions
#[derive(Debug, Deserialize, Validate)]
pub struct ConditionsInput {
    #[validate(length(min = 1, message = "Region is required"))]
    pub region: String,
    #[validate(length(min = 1, message = "Soil type is required"))]
    pub soil_type: String,
    #[validate(custom = "valid_latitude")]
    pub latitude: f64,
    #[validate(custom = "valid_longitude")]
    pub longitude: f64,
    #[validate(range(min = 1, max = 22))]
    pub top_n: Option<usize>,
}

/// Classification together with the inputs it was built from
#[derive(Debug, Clone, Serialize)]
pub struct ConditionsClassification {
    pub weather: WeatherReading,
    pub features: FeatureVector,
    pub predictions: Vec<ClassificationResult>,
}

impl RecommendationService {
    pub fn new(classifier: CropClassifier, catalog: Arc<dyn CatalogProvider>) -> Self {
        Self {
            classifier,
            catalog,
            weather_client: None,
        }
    }

    pub fn with_weather_client(mut self, weather_client: Option<WeatherClient>) -> Self {
        self.weather_client = weather_client;
        self
    }

    /// Bring the classifier up after a cosmetic warm-up delay
    pub async fn initialize_classifier(enabled: bool, warmup: Duration) -> CropClassifier {
        if !enabled {
            tracing::warn!("Classifier disabled; serving fallback predictions only");
            return CropClassifier::fallback_only();
        }
        if !warmup.is_zero() {
            tokio::time::sleep(warmup).await;
        }
        tracing::info!("Classifier ready with built-in crop profiles");
        CropClassifier::initialize()
    }

    /// The configured catalog
    pub fn catalog(&self) -> AppResult<Vec<CropCatalogEntry>> {
        self.catalog.list_crops()
    }

    /// Rank catalog crops for a farm
    pub fn recommend(&self, input: RecommendInput) -> AppResult<Vec<SuitabilityResult>> {
        input.validate()?;

        let catalog = match input.catalog {
            Some(crops) => crops,
            None => self.catalog.list_crops()?,
        };
        let date = input.date.unwrap_or_else(|| Local::now().date_naive());

        let results = recommend_on(
            date,
            &input.region,
            &input.soil_type,
            input.land_size,
            &catalog,
        );
        tracing::debug!(
            region = %input.region,
            soil_type = %input.soil_type,
            land_size = input.land_size,
            candidates = catalog.len(),
            ranked = results.len(),
            "Scored crop catalog"
        );
        Ok(results)
    }

    /// Rank the crop vocabulary for a feature vector
    pub fn classify(&self, input: ClassifyInput) -> AppResult<Vec<ClassificationResult>> {
        input.validate()?;
        Ok(self.classify_features(&input.features, input.top_n))
    }

    fn classify_features(
        &self,
        features: &FeatureVector,
        top_n: Option<usize>,
    ) -> Vec<ClassificationResult> {
        let unusual = out_of_range_features(features);
        if !unusual.is_empty() {
            tracing::debug!("Features outside typical range: {:?}", unusual);
        }

        let (mut results, fallback) = self.classifier.classify_with_outcome(features);
        match fallback {
            Some(FallbackReason::NotLoaded) => tracing::warn!(
                state = ?self.classifier.state(),
                "Classifier not loaded; returning fallback predictions"
            ),
            Some(FallbackReason::NonFinite) => tracing::warn!(
                "Classifier scoring was not finite; returning fallback predictions"
            ),
            None => {}
        }

        if let Some(n) = top_n {
            results.truncate(n);
        }
        results
    }

    /// Classify using current weather plus soil and region defaults
    pub async fn classify_conditions(
        &self,
        input: ConditionsInput,
    ) -> AppResult<ConditionsClassification> {
        input.validate()?;

        let client = self.weather_client.as_ref().ok_or_else(|| {
            AppError::Configuration("Weather API client not configured".to_string())
        })?;
        let weather = client
            .get_current_conditions(input.latitude, input.longitude)
            .await?;

        let features = FeatureVector::from_conditions(
            &input.soil_type,
            &input.region,
            weather.temperature_celsius,
            weather.humidity_percent,
        );
        let predictions = self.classify_features(&features, input.top_n);

        Ok(ConditionsClassification {
            weather,
            features,
            predictions,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::catalog::DefaultCatalogProvider;

    fn service(classifier: CropClassifier) -> RecommendationService {
        RecommendationService::new(classifier, Arc::new(DefaultCatalogProvider::new()))
    }

    fn recommend_input(land_size: f64) -> RecommendInput {
        RecommendInput {
            region: "Punjab".to_string(),
            soil_type: "Loamy".to_string(),
            land_size,
            catalog: None,
            date: NaiveDate::from_ymd_opt(2024, 11, 10),
        }
    }

    #[test]
    fn recommend_uses_default_catalog() {
        let results = service(CropClassifier::initialize())
            .recommend(recommend_input(3.0))
            .unwrap();
        assert_eq!(results.len(), 8);
        // Wheat: listed region and soil, 3 >= 2x1 acre, Rabi in November
        assert_eq!(results[0].crop.id, "wheat");
        assert_eq!(results[0].score, 105.0);
    }

    #[test]
    fn recommend_rejects_non_positive_land() {
        let err = service(CropClassifier::initialize())
            .recommend(recommend_input(0.0))
            .unwrap_err();
        assert!(matches!(err, AppError::Validation { .. }));
    }

    #[test]
    fn classify_respects_top_n() {
        let input = ClassifyInput {
            features: FeatureVector::new(90.0, 42.0, 43.0, 20.9, 82.0, 6.5, 202.9),
            top_n: Some(5),
        };
        let results = service(CropClassifier::initialize()).classify(input).unwrap();
        assert_eq!(results.len(), 5);
    }

    #[test]
    fn classify_overflowing_input_serves_fallback() {
        let input = ClassifyInput {
            features: FeatureVector::new(1e200, 50.0, 50.0, 30.0, 80.0, 6.5, 100.0),
            top_n: Some(3),
        };
        let results = service(CropClassifier::initialize()).classify(input).unwrap();
        let keys: Vec<&str> = results.iter().map(|r| r.crop_key.as_str()).collect();
        assert_eq!(keys, ["rice", "jute", "mungbean"]);
    }

    #[test]
    fn classify_rejects_top_n_out_of_range() {
        let input = ClassifyInput {
            features: FeatureVector::new(90.0, 42.0, 43.0, 20.9, 82.0, 6.5, 202.9),
            top_n: Some(0),
        };
        assert!(service(CropClassifier::initialize()).classify(input).is_err());
    }

    #[test]
    fn initialize_respects_enabled_flag() {
        let disabled = tokio_test::block_on(RecommendationService::initialize_classifier(
            false,
            Duration::ZERO,
        ));
        assert!(!disabled.is_loaded());
        let enabled = tokio_test::block_on(RecommendationService::initialize_classifier(
            true,
            Duration::ZERO,
        ));
        assert!(enabled.is_loaded());
    }

    #[tokio::test]
    async fn conditions_without_weather_client_is_configuration_error() {
        let input = ConditionsInput {
            region: "Punjab".to_string(),
            soil_type: "Loamy".to_string(),
            latitude: 30.9,
            longitude: 75.8,
            top_n: None,
        };
        let err = service(CropClassifier::initialize())
            .classify_conditions(input)
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Configuration(_)));
    }
}
