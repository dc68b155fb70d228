//! Rule-based recommender tests
//!
//! Tests for catalog ranking including:
//! - Ordering and positivity of returned scores
//! - Region, soil and land-size tiers
//! - Season contribution by month

use chrono::NaiveDate;
use proptest::prelude::*;
use shared::recommender::{score_crop, season_score};
use shared::{default_catalog, recommend_on, CropCatalogEntry, Season, SuitabilityLevel};

fn date(month: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, month, 1).unwrap()
}

fn crop(regions: &[&str], soils: &[&str], min_land: f64, season: &str) -> CropCatalogEntry {
    CropCatalogEntry {
        id: "crop".to_string(),
        name: "Crop".to_string(),
        description: "Test crop".to_string(),
        suitable_regions: regions.iter().map(|r| r.to_string()).collect(),
        suitable_soil_types: soils.iter().map(|s| s.to_string()).collect(),
        min_land_size: min_land,
        growing_duration_days: 120,
        season: season.to_string(),
        expected_yield: "20 quintals/hectare".to_string(),
        water_requirement: "Moderate".to_string(),
    }
}

const REGIONS: [&str; 6] = ["Punjab", "Haryana", "Uttar Pradesh", "Rajasthan", "Kerala", ""];
const SOILS: [&str; 7] = ["Loamy", "Clay", "Sandy", "Black", "Red", "Alluvial", "Peat"];

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod unit_tests {
    use super::*;

    /// Full match in a Rabi month scores 35+35+20+5+10 with five reasons
    #[test]
    fn test_end_to_end_rabi_scenario() {
        let c = crop(&["Punjab"], &["Loamy"], 1.0, "Rabi (Winter)");
        for month in [10, 11, 12, 1, 2, 3] {
            let results = recommend_on(date(month), "Punjab", "Loamy", 2.0, &[c.clone()]);
            assert_eq!(results.len(), 1);
            assert_eq!(results[0].score, 105.0);
            assert_eq!(results[0].reasons.len(), 5);
        }
    }

    /// Same crop in a Kharif month is off season
    #[test]
    fn test_off_season_scenario() {
        let c = crop(&["Punjab"], &["Loamy"], 1.0, "Rabi (Winter)");
        let results = recommend_on(date(7), "Punjab", "Loamy", 2.0, &[c]);
        assert_eq!(results[0].score, 98.0);
    }

    /// Region literal > adjacent > none with everything else fixed
    #[test]
    fn test_region_tiers_order() {
        let c = crop(&["Haryana"], &["Loamy"], 1.0, "Year-round");
        let literal = score_crop("Haryana", "Loamy", 1.0, &c, Season::Rabi).total();
        let adjacent = score_crop("Punjab", "Loamy", 1.0, &c, Season::Rabi).total();
        let none = score_crop("Kerala", "Loamy", 1.0, &c, Season::Rabi).total();
        assert_eq!(literal - adjacent, 20.0);
        assert_eq!(adjacent - none, 15.0);
    }

    /// Land-size tiers relative to the crop minimum
    #[test]
    fn test_land_size_bonus() {
        let c = crop(&["Punjab"], &["Loamy"], 3.0, "Kharif");
        let at = |land: f64| score_crop("Punjab", "Loamy", land, &c, Season::Kharif).total();
        assert_eq!(at(6.0) - at(3.0), 5.0);
        assert_eq!(at(3.0) - at(1.5), 10.0);
        assert_eq!(at(1.5) - at(1.0), 10.0);
    }

    /// Zero and negative land sizes are scored, not rejected
    #[test]
    fn test_non_positive_land_scores_zero_component() {
        let c = crop(&["Punjab"], &["Loamy"], 1.0, "Year-round");
        let results = recommend_on(date(1), "Punjab", "Loamy", -3.0, &[c]);
        assert_eq!(results[0].score, 80.0);
    }

    /// Default catalog on a small Rajasthan plot favours the hardy crops
    #[test]
    fn test_default_catalog_rajasthan() {
        let results = recommend_on(date(11), "Rajasthan", "Sandy", 0.5, &default_catalog());
        assert_eq!(results.len(), 8);
        let top: Vec<&str> = results.iter().take(2).map(|r| r.crop.id.as_str()).collect();
        assert_eq!(top, ["mustard", "chickpea"]);
        assert_eq!(results[0].level, SuitabilityLevel::Excellent);
    }

    /// Season contribution depends only on month and label
    #[test]
    fn test_season_by_month() {
        for month in 1..=12 {
            let season = Season::from_month(month);
            let expected_rabi = if (4..=9).contains(&month) { 3.0 } else { 10.0 };
            assert_eq!(season_score("Rabi (Winter)", season), expected_rabi);
            assert_eq!(season_score("Year-round", season), 10.0);
            assert_eq!(season_score("Spring", season), 5.0);
        }
    }
}

// ============================================================================
// Property Tests
// ============================================================================

fn catalog_strategy() -> impl Strategy<Value = Vec<CropCatalogEntry>> {
    let entry = (
        prop::sample::subsequence(REGIONS.to_vec(), 0..4),
        prop::sample::subsequence(SOILS.to_vec(), 0..4),
        0.1f64..10.0,
        prop::sample::select(vec!["Rabi (Winter)", "Kharif (Monsoon)", "Year-round", "Zaid"]),
    )
        .prop_map(|(regions, soils, min_land, season)| crop(&regions, &soils, min_land, season));
    prop::collection::vec(entry, 1..12)
}

proptest! {
    /// Results are sorted by non-increasing score and every score is positive
    #[test]
    fn prop_results_sorted_and_positive(
        catalog in catalog_strategy(),
        region in prop::sample::select(REGIONS.to_vec()),
        soil in prop::sample::select(SOILS.to_vec()),
        land in -5.0f64..50.0,
        month in 1u32..=12,
    ) {
        let results = recommend_on(date(month), region, soil, land, &catalog);
        prop_assert!(results.iter().all(|r| r.score > 0.0));
        prop_assert!(results.windows(2).all(|w| w[0].score >= w[1].score));
        prop_assert!(results.iter().all(|r| r.score <= 105.0));
        prop_assert!(results.iter().all(|r| r.reasons.len() == 5));
    }

    /// Season contribution is one of 10, 3 or 5
    #[test]
    fn prop_season_contribution_values(
        label in "[A-Za-z() -]{0,20}",
        month in 1u32..=12,
    ) {
        let score = season_score(&label, Season::from_month(month));
        prop_assert!(score == 10.0 || score == 3.0 || score == 5.0);
    }

    /// Doubling land from the minimum adds exactly the 5 point bonus
    #[test]
    fn prop_land_bonus(min_land in 0.1f64..100.0) {
        let c = crop(&["Punjab"], &["Loamy"], min_land, "Year-round");
        let single = score_crop("Punjab", "Loamy", min_land, &c, Season::Rabi).total();
        let double = score_crop("Punjab", "Loamy", 2.0 * min_land, &c, Season::Rabi).total();
        let half = score_crop("Punjab", "Loamy", 0.5 * min_land, &c, Season::Rabi).total();
        prop_assert_eq!(double - single, 5.0);
        prop_assert_eq!(single - half, 10.0);
    }
}
