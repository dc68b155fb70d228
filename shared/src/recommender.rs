//! Rule-based crop recommender
//!
//! Scores each catalog entry against a farmer's region, soil type and land
//! size, plus the current cropping season:
//!
//! | Component | Full | Partial | None |
//! |-----------|------|---------|------|
//! | Region    | 35 (listed) | 15 (adjacent) | 0 |
//! | Soil      | 35 (listed) | 20 (similar)  | 0 |
//! | Land size | 20 (+5 at 2x minimum) | 10 (half minimum) | 0 |
//! | Season    | 10 (in season / year-round) | 3 off season, 5 unlabelled | - |
//!
//! Scores are not clamped, so the best case is 105.

use chrono::{Local, NaiveDate};

use crate::models::{CropCatalogEntry, Season, SuitabilityLevel, SuitabilityResult};
use crate::tables::{adjacent_regions, similar_soils};

pub const REGION_MATCH_SCORE: f64 = 35.0;
pub const REGION_ADJACENT_SCORE: f64 = 15.0;
pub const SOIL_MATCH_SCORE: f64 = 35.0;
pub const SOIL_SIMILAR_SCORE: f64 = 20.0;
pub const LAND_SUFFICIENT_SCORE: f64 = 20.0;
pub const LAND_SURPLUS_BONUS: f64 = 5.0;
pub const LAND_PARTIAL_SCORE: f64 = 10.0;
pub const SEASON_MATCH_SCORE: f64 = 10.0;
pub const SEASON_OFF_SCORE: f64 = 3.0;
pub const SEASON_DEFAULT_SCORE: f64 = 5.0;

/// Individual score contributions for one crop
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreBreakdown {
    pub region: f64,
    pub soil: f64,
    pub land: f64,
    pub season: f64,
}

impl ScoreBreakdown {
    pub fn total(&self) -> f64 {
        self.region + self.soil + self.land + self.season
    }
}

fn lists(values: &[String], needle: &str) -> bool {
    values.iter().any(|v| v == needle)
}

/// Region contribution: literal match, then adjacency
pub fn region_score(region: &str, crop: &CropCatalogEntry) -> f64 {
    if lists(&crop.suitable_regions, region) {
        return REGION_MATCH_SCORE;
    }
    let neighbours = adjacent_regions(region);
    if crop
        .suitable_regions
        .iter()
        .any(|r| neighbours.contains(&r.as_str()))
    {
        REGION_ADJACENT_SCORE
    } else {
        0.0
    }
}

/// Soil contribution: literal match, then similarity
pub fn soil_score(soil_type: &str, crop: &CropCatalogEntry) -> f64 {
    if lists(&crop.suitable_soil_types, soil_type) {
        return SOIL_MATCH_SCORE;
    }
    let similar = similar_soils(soil_type);
    if crop
        .suitable_soil_types
        .iter()
        .any(|s| similar.contains(&s.as_str()))
    {
        SOIL_SIMILAR_SCORE
    } else {
        0.0
    }
}

/// Land-size contribution relative to the crop's minimum
pub fn land_score(land_size: f64, crop: &CropCatalogEntry) -> f64 {
    let min = crop.min_land_size;
    if land_size >= min {
        if land_size >= 2.0 * min {
            LAND_SUFFICIENT_SCORE + LAND_SURPLUS_BONUS
        } else {
            LAND_SUFFICIENT_SCORE
        }
    } else if land_size >= 0.5 * min {
        LAND_PARTIAL_SCORE
    } else {
        0.0
    }
}

/// Season contribution for a crop's season label in the given season
pub fn season_score(season_label: &str, current: Season) -> f64 {
    if season_label.contains("Year-round") {
        SEASON_MATCH_SCORE
    } else if season_label.contains(current.label()) {
        SEASON_MATCH_SCORE
    } else if season_label.contains(current.other().label()) {
        SEASON_OFF_SCORE
    } else {
        SEASON_DEFAULT_SCORE
    }
}

/// Score a single crop without generating reasons
pub fn score_crop(
    region: &str,
    soil_type: &str,
    land_size: f64,
    crop: &CropCatalogEntry,
    current: Season,
) -> ScoreBreakdown {
    ScoreBreakdown {
        region: region_score(region, crop),
        soil: soil_score(soil_type, crop),
        land: land_score(land_size, crop),
        season: season_score(&crop.season, current),
    }
}

/// Human-readable justification: one line each for region, soil and land
/// size, then the season and water requirement.
pub fn build_reasons(
    region: &str,
    soil_type: &str,
    land_size: f64,
    crop: &CropCatalogEntry,
) -> Vec<String> {
    let mut reasons = Vec::with_capacity(5);

    if lists(&crop.suitable_regions, region) {
        reasons.push(format!("Well suited to the {} region", region));
    } else {
        reasons.push(format!(
            "Can still work in {} with proper care and local guidance",
            region
        ));
    }

    if lists(&crop.suitable_soil_types, soil_type) {
        reasons.push(format!("Grows well in {} soil", soil_type));
    } else {
        reasons.push(format!(
            "Can still work in {} soil with suitable amendments",
            soil_type
        ));
    }

    if land_size >= crop.min_land_size {
        reasons.push(format!(
            "Your {} acres meet the minimum of {} acres",
            land_size, crop.min_land_size
        ));
    } else {
        reasons.push(format!(
            "Can still work on {} acres with intensive practices (recommended minimum {} acres)",
            land_size, crop.min_land_size
        ));
    }

    reasons.push(format!("Season: {}", crop.season));
    reasons.push(format!("Water requirement: {}", crop.water_requirement));
    reasons
}

/// Rank the catalog for a farm, with the season taken from `date`.
///
/// Entries scoring zero or less are dropped; the rest are ordered by
/// descending score, keeping catalog order on ties.
pub fn recommend_on(
    date: NaiveDate,
    region: &str,
    soil_type: &str,
    land_size: f64,
    catalog: &[CropCatalogEntry],
) -> Vec<SuitabilityResult> {
    let current = Season::from_date(date);

    let mut results: Vec<SuitabilityResult> = catalog
        .iter()
        .filter_map(|crop| {
            let score = score_crop(region, soil_type, land_size, crop, current).total();
            if score <= 0.0 {
                return None;
            }
            Some(SuitabilityResult {
                crop: crop.clone(),
                score,
                level: SuitabilityLevel::from_score(score),
                reasons: build_reasons(region, soil_type, land_size, crop),
            })
        })
        .collect();

    // sort_by is stable, so equal scores keep catalog order
    results.sort_by(|a, b| b.score.total_cmp(&a.score));
    results
}

/// Rank the catalog for a farm using today's local date
pub fn recommend(
    region: &str,
    soil_type: &str,
    land_size: f64,
    catalog: &[CropCatalogEntry],
) -> Vec<SuitabilityResult> {
    recommend_on(Local::now().date_naive(), region, soil_type, land_size, catalog)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn crop(regions: &[&str], soils: &[&str], min_land: f64, season: &str) -> CropCatalogEntry {
        CropCatalogEntry {
            id: "test".to_string(),
            name: "Test Crop".to_string(),
            description: String::new(),
            suitable_regions: regions.iter().map(|r| r.to_string()).collect(),
            suitable_soil_types: soils.iter().map(|s| s.to_string()).collect(),
            min_land_size: min_land,
            growing_duration_days: 100,
            season: season.to_string(),
            expected_yield: "n/a".to_string(),
            water_requirement: "Moderate".to_string(),
        }
    }

    fn date(month: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, month, 15).unwrap()
    }

    #[test]
    fn region_tiers() {
        let c = crop(&["Haryana"], &["Loamy"], 1.0, "Rabi");
        assert_eq!(region_score("Haryana", &c), 35.0);
        assert_eq!(region_score("Punjab", &c), 15.0);
        assert_eq!(region_score("Kerala", &c), 0.0);
    }

    #[test]
    fn adjacency_is_directional() {
        // Uttar Pradesh lists only Haryana, so a Rajasthan-only crop is not adjacent
        let c = crop(&["Rajasthan"], &["Loamy"], 1.0, "Rabi");
        assert_eq!(region_score("Uttar Pradesh", &c), 0.0);
        assert_eq!(region_score("Haryana", &c), 15.0);
    }

    #[test]
    fn soil_tiers() {
        let c = crop(&["Punjab"], &["Alluvial"], 1.0, "Rabi");
        assert_eq!(soil_score("Alluvial", &c), 35.0);
        assert_eq!(soil_score("Loamy", &c), 20.0);
        assert_eq!(soil_score("Red", &c), 0.0);
    }

    #[test]
    fn land_tiers() {
        let c = crop(&["Punjab"], &["Loamy"], 2.0, "Rabi");
        assert_eq!(land_score(4.0, &c), 25.0);
        assert_eq!(land_score(2.0, &c), 20.0);
        assert_eq!(land_score(1.0, &c), 10.0);
        assert_eq!(land_score(0.9, &c), 0.0);
        assert_eq!(land_score(-1.0, &c), 0.0);
    }

    #[test]
    fn season_contributions() {
        assert_eq!(season_score("Year-round", Season::Rabi), 10.0);
        assert_eq!(season_score("Rabi (Winter)", Season::Rabi), 10.0);
        assert_eq!(season_score("Rabi (Winter)", Season::Kharif), 3.0);
        assert_eq!(season_score("Kharif (Monsoon)", Season::Kharif), 10.0);
        assert_eq!(season_score("Summer", Season::Kharif), 5.0);
    }

    #[test]
    fn full_match_scores_105_in_rabi() {
        let c = crop(&["Punjab"], &["Loamy"], 1.0, "Rabi (Winter)");
        let results = recommend_on(date(11), "Punjab", "Loamy", 2.0, &[c]);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].score, 105.0);
        assert_eq!(results[0].level, SuitabilityLevel::Excellent);
        assert_eq!(results[0].reasons.len(), 5);
    }

    #[test]
    fn qualified_reasons_when_not_literal() {
        let c = crop(&["Haryana"], &["Clay"], 5.0, "Kharif");
        let reasons = build_reasons("Punjab", "Loamy", 1.0, &c);
        assert!(reasons[0].starts_with("Can still work"));
        assert!(reasons[1].starts_with("Can still work"));
        assert!(reasons[2].starts_with("Can still work"));
        assert_eq!(reasons[3], "Season: Kharif");
        assert_eq!(reasons[4], "Water requirement: Moderate");
    }

    #[test]
    fn empty_catalog_yields_nothing() {
        assert!(recommend_on(date(5), "Punjab", "Loamy", 1.0, &[]).is_empty());
    }

    #[test]
    fn ties_keep_catalog_order() {
        let mut a = crop(&["Punjab"], &["Loamy"], 1.0, "Year-round");
        a.id = "a".to_string();
        let mut b = a.clone();
        b.id = "b".to_string();
        let results = recommend_on(date(5), "Punjab", "Loamy", 1.0, &[a, b]);
        assert_eq!(results[0].crop.id, "a");
        assert_eq!(results[1].crop.id, "b");
    }
}
