//! Crop catalog models

use serde::{Deserialize, Serialize};

/// A crop record supplied by the catalog store
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CropCatalogEntry {
    pub id: String,
    pub name: String,
    pub description: String,
    pub suitable_regions: Vec<String>,
    pub suitable_soil_types: Vec<String>,
    /// Minimum land size in acres
    pub min_land_size: f64,
    pub growing_duration_days: u32,
    /// Free text; may embed "Rabi", "Kharif" or "Year-round"
    pub season: String,
    pub expected_yield: String,
    pub water_requirement: String,
}

#[allow(clippy::too_many_arguments)]
fn entry(
    id: &str,
    name: &str,
    description: &str,
    regions: &[&str],
    soils: &[&str],
    min_land_size: f64,
    growing_duration_days: u32,
    season: &str,
    expected_yield: &str,
    water_requirement: &str,
) -> CropCatalogEntry {
    CropCatalogEntry {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        suitable_regions: regions.iter().map(|r| r.to_string()).collect(),
        suitable_soil_types: soils.iter().map(|s| s.to_string()).collect(),
        min_land_size,
        growing_duration_days,
        season: season.to_string(),
        expected_yield: expected_yield.to_string(),
        water_requirement: water_requirement.to_string(),
    }
}

/// Built-in catalog for callers without a catalog store
pub fn default_catalog() -> Vec<CropCatalogEntry> {
    vec![
        entry(
            "wheat",
            "Wheat",
            "Staple winter cereal, well suited to irrigated plains",
            &["Punjab", "Haryana", "Uttar Pradesh"],
            &["Loamy", "Clay", "Alluvial"],
            1.0,
            120,
            "Rabi (Winter)",
            "40-50 quintals/hectare",
            "Moderate",
        ),
        entry(
            "rice",
            "Rice",
            "Monsoon paddy crop that needs standing water",
            &["Punjab", "Haryana", "Uttar Pradesh"],
            &["Clay", "Loamy", "Alluvial"],
            1.0,
            120,
            "Kharif (Monsoon)",
            "50-60 quintals/hectare",
            "High",
        ),
        entry(
            "maize",
            "Maize",
            "Fast-growing cereal for grain and fodder",
            &["Punjab", "Uttar Pradesh", "Rajasthan"],
            &["Loamy", "Alluvial", "Sandy"],
            0.5,
            90,
            "Kharif (Monsoon)",
            "30-40 quintals/hectare",
            "Moderate",
        ),
        entry(
            "cotton",
            "Cotton",
            "Fibre crop for warm regions with a long frost-free season",
            &["Punjab", "Haryana", "Rajasthan"],
            &["Black", "Alluvial", "Loamy"],
            2.0,
            160,
            "Kharif (Monsoon)",
            "15-20 quintals/hectare",
            "Moderate",
        ),
        entry(
            "sugarcane",
            "Sugarcane",
            "Long-duration cash crop with high water demand",
            &["Uttar Pradesh", "Punjab", "Haryana"],
            &["Loamy", "Alluvial", "Clay"],
            2.0,
            365,
            "Year-round",
            "700-800 quintals/hectare",
            "High",
        ),
        entry(
            "mustard",
            "Mustard",
            "Oilseed that tolerates dry winters",
            &["Rajasthan", "Haryana", "Punjab"],
            &["Loamy", "Sandy", "Alluvial"],
            0.5,
            110,
            "Rabi (Winter)",
            "12-15 quintals/hectare",
            "Low",
        ),
        entry(
            "chickpea",
            "Chickpea",
            "Drought-hardy pulse that fixes nitrogen",
            &["Rajasthan", "Uttar Pradesh", "Haryana"],
            &["Sandy", "Loamy", "Black"],
            0.5,
            100,
            "Rabi (Winter)",
            "15-20 quintals/hectare",
            "Low",
        ),
        entry(
            "vegetables",
            "Seasonal Vegetables",
            "Mixed vegetables for small plots and local markets",
            &["Punjab", "Haryana", "Uttar Pradesh", "Rajasthan"],
            &["Loamy", "Alluvial", "Red"],
            0.25,
            75,
            "Year-round",
            "Varies by crop",
            "Moderate",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_catalog_has_eight_crops() {
        let catalog = default_catalog();
        assert_eq!(catalog.len(), 8);
        assert!(catalog.iter().all(|c| c.min_land_size > 0.0));
        assert!(catalog.iter().all(|c| c.growing_duration_days > 0));
    }
}
