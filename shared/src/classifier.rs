//! Feature classifier
//!
//! Ranks the 22 crop profiles against a seven-feature soil/weather vector.
//! Each crop's score blends a Gaussian log-likelihood with the Euclidean
//! distance between globally normalized vectors:
//!
//! `score = -2.0 * distance + 0.1 * log_prob`
//!
//! Scores become percentages through a temperature-scaled softmax and are
//! then rescaled for display (see [`rescale_confidence`]).

use std::f64::consts::PI;

use crate::models::{ClassificationResult, ConfidenceBand, FeatureVector, ModelState};
use crate::tables::{
    crop_info, CropProfile, CROP_PROFILES, FEATURE_COUNT, GLOBAL_FEATURE_MEANS,
    GLOBAL_FEATURE_STDS,
};

pub const SOFTMAX_TEMPERATURE: f64 = 0.5;
pub const DISTANCE_WEIGHT: f64 = -2.0;
pub const LIKELIHOOD_WEIGHT: f64 = 0.1;
pub const MIN_CONFIDENCE: f64 = 20.0;
pub const MAX_CONFIDENCE: f64 = 95.0;

const ZERO_STD_SUBSTITUTE: f64 = 0.001;
const LOG_EPSILON: f64 = 1e-10;

/// Gaussian probability density
pub fn gaussian(x: f64, mean: f64, std: f64) -> f64 {
    let std = if std == 0.0 { ZERO_STD_SUBSTITUTE } else { std };
    let z = (x - mean) / std;
    (-0.5 * z * z).exp() / (std * (2.0 * PI).sqrt())
}

/// Sum of per-feature log densities under a crop profile
pub fn log_likelihood(features: &[f64; FEATURE_COUNT], profile: &CropProfile) -> f64 {
    features
        .iter()
        .zip(profile.mean.iter().zip(profile.std.iter()))
        .map(|(&x, (&mean, &std))| (gaussian(x, mean, std) + LOG_EPSILON).ln())
        .sum()
}

fn normalize(values: &[f64; FEATURE_COUNT]) -> [f64; FEATURE_COUNT] {
    let mut out = [0.0; FEATURE_COUNT];
    for (i, v) in values.iter().enumerate() {
        out[i] = (v - GLOBAL_FEATURE_MEANS[i]) / GLOBAL_FEATURE_STDS[i];
    }
    out
}

/// Euclidean distance between the input and a crop mean, both z-scored
/// with the global normalization constants
pub fn normalized_distance(features: &[f64; FEATURE_COUNT], profile: &CropProfile) -> f64 {
    let a = normalize(features);
    let b = normalize(&profile.mean);
    a.iter()
        .zip(b.iter())
        .map(|(x, y)| (x - y) * (x - y))
        .sum::<f64>()
        .sqrt()
}

/// Combined score for one crop; higher is better
pub fn crop_score(features: &[f64; FEATURE_COUNT], profile: &CropProfile) -> f64 {
    DISTANCE_WEIGHT * normalized_distance(features, profile)
        + LIKELIHOOD_WEIGHT * log_likelihood(features, profile)
}

/// Temperature-scaled softmax, as percentages summing to 100
pub fn softmax_percentages(scores: &[f64]) -> Vec<f64> {
    let scaled: Vec<f64> = scores.iter().map(|s| s / SOFTMAX_TEMPERATURE).collect();
    let max = scaled.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let exps: Vec<f64> = scaled.iter().map(|s| (s - max).exp()).collect();
    let sum: f64 = exps.iter().sum();
    exps.iter().map(|e| e / sum * 100.0).collect()
}

/// Display rescaling of a raw softmax percentage.
///
/// The top crop lands in 85-95; everything else is compressed into 50-90.
/// The result is clamped to [20, 95].
pub fn rescale_confidence(raw: f64, top_confidence: f64) -> f64 {
    let scaled = if top_confidence > 0.0 {
        let ratio = raw / top_confidence;
        if ratio > 0.9 {
            85.0 + (ratio - 0.9) * 100.0
        } else {
            50.0 + ratio * 45.0
        }
    } else {
        50.0
    };
    scaled.clamp(MIN_CONFIDENCE, MAX_CONFIDENCE)
}

fn result_for(key: &str, confidence: f64, raw_confidence: f64) -> ClassificationResult {
    let (display_name, icon, season) = match crop_info(key) {
        Some(info) => (info.display_name, info.icon, info.season),
        None => (key, "🌱", "Unknown"),
    };
    ClassificationResult {
        crop_key: key.to_string(),
        display_name: display_name.to_string(),
        icon: icon.to_string(),
        season: season.to_string(),
        confidence,
        raw_confidence,
        band: ConfidenceBand::from_confidence(confidence),
    }
}

/// Why a classification was served from the fallback list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FallbackReason {
    /// The classifier was not initialized or is pinned to the fallback list
    NotLoaded,
    /// Scoring produced NaN or infinity
    NonFinite,
}

fn score_all(features: &FeatureVector) -> Result<Vec<ClassificationResult>, FallbackReason> {
    let values = features.to_array();
    let scores: Vec<f64> = CROP_PROFILES
        .iter()
        .map(|profile| crop_score(&values, profile))
        .collect();
    if scores.iter().any(|s| !s.is_finite()) {
        return Err(FallbackReason::NonFinite);
    }

    let raw = softmax_percentages(&scores);
    if raw.iter().any(|r| !r.is_finite()) {
        return Err(FallbackReason::NonFinite);
    }
    let top = raw.iter().copied().fold(0.0, f64::max);

    let mut results: Vec<ClassificationResult> = CROP_PROFILES
        .iter()
        .zip(raw.iter())
        .map(|(profile, &r)| result_for(profile.key, rescale_confidence(r, top), r))
        .collect();

    // Stable: equal confidences keep profile table order
    results.sort_by(|a, b| b.confidence.total_cmp(&a.confidence));
    Ok(results)
}

/// Fixed degraded ranking derived from temperature and humidity alone.
///
/// Hot and humid (above 25 °C and 60 %) favours rice and jute; cool and dry
/// (at or below both) favours chickpea and lentil; anything else gets maize
/// and cotton. Three general crops are always appended.
pub fn fallback_predictions(temperature: f64, humidity: f64) -> Vec<ClassificationResult> {
    let primary: [(&str, f64); 2] = if temperature > 25.0 && humidity > 60.0 {
        [("rice", 85.0), ("jute", 75.0)]
    } else if temperature <= 25.0 && humidity <= 60.0 {
        [("chickpea", 85.0), ("lentil", 75.0)]
    } else {
        [("maize", 70.0), ("cotton", 65.0)]
    };
    let general: [(&str, f64); 3] = [("mungbean", 60.0), ("pigeonpeas", 55.0), ("blackgram", 50.0)];

    primary
        .iter()
        .chain(general.iter())
        .map(|&(key, confidence)| result_for(key, confidence, confidence))
        .collect()
}

/// Crop classifier over the built-in profile table
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CropClassifier {
    state: ModelState,
}

impl CropClassifier {
    /// A classifier that has not been initialized and serves the fallback list
    pub fn new() -> Self {
        Self::default()
    }

    /// A classifier ready to score against the profile table
    pub fn initialize() -> Self {
        Self {
            state: ModelState::Ready,
        }
    }

    /// A classifier pinned to the fallback list
    pub fn fallback_only() -> Self {
        Self {
            state: ModelState::FallbackOnly,
        }
    }

    pub fn with_state(state: ModelState) -> Self {
        Self { state }
    }

    pub fn state(&self) -> ModelState {
        self.state
    }

    pub fn is_loaded(&self) -> bool {
        self.state.is_ready()
    }

    /// Rank all 22 crops by descending confidence.
    ///
    /// Never fails: an unready classifier or a non-finite scoring pass
    /// returns [`fallback_predictions`] instead.
    pub fn classify(&self, features: &FeatureVector) -> Vec<ClassificationResult> {
        self.classify_with_outcome(features).0
    }

    /// Like [`CropClassifier::classify`], also reporting whether the
    /// fallback list was served and why
    pub fn classify_with_outcome(
        &self,
        features: &FeatureVector,
    ) -> (Vec<ClassificationResult>, Option<FallbackReason>) {
        let outcome = if self.is_loaded() {
            score_all(features)
        } else {
            Err(FallbackReason::NotLoaded)
        };
        match outcome {
            Ok(results) => (results, None),
            Err(reason) => (
                fallback_predictions(features.temperature, features.humidity),
                Some(reason),
            ),
        }
    }

    /// The first `n` entries of [`CropClassifier::classify`]
    pub fn top_n(&self, features: &FeatureVector, n: usize) -> Vec<ClassificationResult> {
        let mut results = self.classify(features);
        results.truncate(n);
        results
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rice_like() -> FeatureVector {
        FeatureVector::new(80.0, 48.0, 40.0, 23.7, 82.0, 6.4, 236.0)
    }

    #[test]
    fn gaussian_peaks_at_mean() {
        let at_mean = gaussian(5.0, 5.0, 1.0);
        assert!((at_mean - 1.0 / (2.0 * PI).sqrt()).abs() < 1e-12);
        assert!(gaussian(6.0, 5.0, 1.0) < at_mean);
    }

    #[test]
    fn zero_std_does_not_divide_by_zero() {
        assert!(gaussian(1.0, 1.0, 0.0).is_finite());
    }

    #[test]
    fn softmax_sums_to_hundred() {
        let raw = softmax_percentages(&[1.0, 2.0, 3.0]);
        let sum: f64 = raw.iter().sum();
        assert!((sum - 100.0).abs() < 1e-9);
        assert!(raw[2] > raw[1] && raw[1] > raw[0]);
    }

    #[test]
    fn rescale_branches() {
        assert_eq!(rescale_confidence(50.0, 50.0), 95.0);
        assert!((rescale_confidence(47.5, 50.0) - 90.0).abs() < 1e-9);
        assert!((rescale_confidence(25.0, 50.0) - 72.5).abs() < 1e-9);
        assert_eq!(rescale_confidence(0.0, 50.0), 50.0);
        assert_eq!(rescale_confidence(10.0, 0.0), 50.0);
    }

    #[test]
    fn rice_like_input_ranks_rice_first() {
        let results = CropClassifier::initialize().classify(&rice_like());
        assert_eq!(results.len(), 22);
        assert_eq!(results[0].crop_key, "rice");
        assert_eq!(results[0].confidence, 95.0);
        assert_eq!(results[0].band, ConfidenceBand::High);
    }

    #[test]
    fn raw_confidences_sum_to_hundred() {
        let results = CropClassifier::initialize().classify(&rice_like());
        let sum: f64 = results.iter().map(|r| r.raw_confidence).sum();
        assert!((sum - 100.0).abs() < 1e-6);
    }

    #[test]
    fn top_n_truncates() {
        let results = CropClassifier::initialize().top_n(&rice_like(), 3);
        assert_eq!(results.len(), 3);
    }

    #[test]
    fn unloaded_uses_fallback() {
        let v = FeatureVector::new(50.0, 50.0, 50.0, 30.0, 80.0, 6.5, 200.0);
        let results = CropClassifier::new().classify(&v);
        let keys: Vec<&str> = results.iter().map(|r| r.crop_key.as_str()).collect();
        assert_eq!(keys, ["rice", "jute", "mungbean", "pigeonpeas", "blackgram"]);
    }

    #[test]
    fn nan_input_uses_fallback() {
        let v = FeatureVector::new(f64::NAN, 50.0, 50.0, 22.0, 40.0, 6.5, 100.0);
        let results = CropClassifier::initialize().classify(&v);
        assert_eq!(results.len(), 5);
        assert_eq!(results[0].crop_key, "chickpea");
    }

    #[test]
    fn outcome_reports_fallback_reason() {
        let classifier = CropClassifier::initialize();
        let (results, reason) = classifier.classify_with_outcome(&rice_like());
        assert_eq!(results.len(), 22);
        assert_eq!(reason, None);

        // Finite but huge: the squared distance overflows to infinity
        let huge = FeatureVector::new(1e200, 50.0, 50.0, 30.0, 80.0, 6.5, 100.0);
        let (results, reason) = classifier.classify_with_outcome(&huge);
        assert_eq!(reason, Some(FallbackReason::NonFinite));
        assert_eq!(results.len(), 5);
        assert_eq!(results[0].crop_key, "rice");

        let (_, reason) = CropClassifier::fallback_only().classify_with_outcome(&rice_like());
        assert_eq!(reason, Some(FallbackReason::NotLoaded));
    }

    #[test]
    fn fallback_middle_branch() {
        let results = fallback_predictions(30.0, 40.0);
        assert_eq!(results[0].crop_key, "maize");
        assert_eq!(results[0].confidence, 70.0);
        assert_eq!(results[1].crop_key, "cotton");
        assert_eq!(results[1].confidence, 65.0);
    }
}
