//! Reference tables compiled into the scoring core
//!
//! Regional adjacency, soil similarity, per-crop feature statistics and the
//! default soil/rainfall estimates. All tables are read-only domain data.

use serde::Serialize;

/// Number of features in a classifier input vector
pub const FEATURE_COUNT: usize = 7;

/// Feature names in vector order
pub const FEATURE_NAMES: [&str; FEATURE_COUNT] = [
    "nitrogen",
    "phosphorus",
    "potassium",
    "temperature",
    "humidity",
    "ph",
    "rainfall",
];

/// Global per-feature mean used for z-score normalization (shared by all crops)
pub const GLOBAL_FEATURE_MEANS: [f64; FEATURE_COUNT] =
    [50.55, 53.36, 48.15, 25.62, 71.48, 6.47, 103.46];

/// Global per-feature standard deviation used for z-score normalization
pub const GLOBAL_FEATURE_STDS: [f64; FEATURE_COUNT] =
    [36.92, 32.99, 50.65, 5.06, 22.26, 0.77, 54.96];

// ============================================================================
// Regions and Soils
// ============================================================================

/// Neighbouring regions that earn the partial region score.
///
/// Encoded per source region; a region missing from the table has no neighbours.
pub fn adjacent_regions(region: &str) -> &'static [&'static str] {
    match region {
        "Punjab" => &["Haryana", "Rajasthan"],
        "Haryana" => &["Punjab", "Uttar Pradesh", "Rajasthan"],
        "Uttar Pradesh" => &["Haryana"],
        "Rajasthan" => &["Punjab", "Haryana"],
        _ => &[],
    }
}

/// Soil types that earn the partial soil score.
///
/// Red soil is intentionally absent and therefore has no similar types.
pub fn similar_soils(soil_type: &str) -> &'static [&'static str] {
    match soil_type {
        "Loamy" => &["Alluvial", "Clay"],
        "Clay" => &["Black", "Loamy"],
        "Sandy" => &["Loamy"],
        "Black" => &["Clay"],
        "Alluvial" => &["Loamy"],
        _ => &[],
    }
}

/// Typical nutrient and pH values for a soil type
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SoilDefaults {
    pub nitrogen: f64,
    pub phosphorus: f64,
    pub potassium: f64,
    pub ph: f64,
}

impl SoilDefaults {
    const fn new(nitrogen: f64, phosphorus: f64, potassium: f64, ph: f64) -> Self {
        Self {
            nitrogen,
            phosphorus,
            potassium,
            ph,
        }
    }
}

/// Default soil values keyed by soil type name
pub fn default_soil_values(soil_type: &str) -> SoilDefaults {
    match soil_type {
        "Loamy" => SoilDefaults::new(80.0, 45.0, 40.0, 6.5),
        "Clay" => SoilDefaults::new(60.0, 40.0, 45.0, 7.0),
        "Sandy" => SoilDefaults::new(30.0, 25.0, 20.0, 6.0),
        "Black" => SoilDefaults::new(70.0, 50.0, 60.0, 7.5),
        "Red" => SoilDefaults::new(40.0, 30.0, 35.0, 6.0),
        "Alluvial" => SoilDefaults::new(85.0, 50.0, 45.0, 7.0),
        _ => SoilDefaults::new(50.0, 40.0, 40.0, 6.5),
    }
}

/// Default rainfall estimate (mm, crop-profile scale) keyed by region name
pub fn default_rainfall(region: &str) -> f64 {
    match region {
        "Punjab" => 120.0,
        "Haryana" => 100.0,
        "Uttar Pradesh" => 180.0,
        "Rajasthan" => 60.0,
        _ => 100.0,
    }
}

// ============================================================================
// Crop Profiles
// ============================================================================

/// Per-crop statistics over the feature vector
#[derive(Debug, Clone, Copy)]
pub struct CropProfile {
    pub key: &'static str,
    pub mean: [f64; FEATURE_COUNT],
    pub std: [f64; FEATURE_COUNT],
}

/// Display metadata for a crop key
#[derive(Debug, Clone, Copy)]
pub struct CropInfo {
    pub key: &'static str,
    pub display_name: &'static str,
    pub icon: &'static str,
    pub season: &'static str,
}

/// The closed crop vocabulary, in scoring (and tie-break) order.
///
/// Feature order: N, P, K, temperature, humidity, pH, rainfall.
pub static CROP_PROFILES: [CropProfile; 22] = [
    CropProfile {
        key: "rice",
        mean: [79.89, 47.58, 39.87, 23.69, 82.27, 6.43, 236.18],
        std: [11.92, 7.90, 2.89, 2.02, 1.46, 0.76, 34.76],
    },
    CropProfile {
        key: "maize",
        mean: [77.76, 48.44, 19.79, 22.39, 65.09, 6.25, 84.77],
        std: [11.94, 5.61, 3.14, 2.58, 6.05, 0.42, 14.36],
    },
    CropProfile {
        key: "chickpea",
        mean: [40.09, 67.79, 79.92, 18.87, 16.86, 7.34, 80.06],
        std: [12.23, 7.37, 3.33, 1.03, 1.70, 0.83, 8.37],
    },
    CropProfile {
        key: "kidneybeans",
        mean: [20.75, 67.54, 20.05, 20.12, 21.61, 5.75, 105.92],
        std: [11.55, 7.42, 3.05, 2.64, 2.18, 0.15, 25.17],
    },
    CropProfile {
        key: "pigeonpeas",
        mean: [20.73, 67.73, 20.29, 27.74, 48.06, 5.79, 149.46],
        std: [11.55, 7.36, 3.10, 5.10, 11.29, 0.88, 27.59],
    },
    CropProfile {
        key: "mothbeans",
        mean: [21.44, 48.01, 20.23, 28.19, 53.16, 6.83, 51.20],
        std: [11.87, 7.41, 2.99, 1.82, 7.30, 1.95, 13.24],
    },
    CropProfile {
        key: "mungbean",
        mean: [20.99, 47.28, 19.87, 28.53, 85.50, 6.72, 48.40],
        std: [11.75, 7.30, 2.94, 1.04, 2.78, 0.27, 6.98],
    },
    CropProfile {
        key: "blackgram",
        mean: [40.02, 67.47, 19.24, 29.97, 65.12, 7.13, 67.88],
        std: [12.10, 7.40, 3.07, 2.72, 2.97, 0.38, 4.08],
    },
    CropProfile {
        key: "lentil",
        mean: [18.77, 68.36, 19.41, 24.51, 64.80, 6.93, 45.68],
        std: [12.04, 7.12, 3.22, 3.27, 2.98, 0.36, 5.72],
    },
    CropProfile {
        key: "pomegranate",
        mean: [18.87, 18.75, 40.21, 21.84, 90.13, 6.43, 107.53],
        std: [11.70, 7.43, 2.98, 1.18, 2.89, 0.39, 4.10],
    },
    CropProfile {
        key: "banana",
        mean: [100.23, 82.01, 50.05, 27.38, 80.36, 5.98, 104.63],
        std: [11.26, 7.26, 3.17, 1.54, 2.81, 0.27, 9.37],
    },
    CropProfile {
        key: "mango",
        mean: [20.07, 27.18, 29.92, 31.21, 50.16, 5.77, 94.70],
        std: [11.67, 7.06, 3.31, 2.89, 5.91, 0.80, 4.02],
    },
    CropProfile {
        key: "grapes",
        mean: [23.18, 132.53, 200.11, 23.85, 81.88, 6.03, 69.61],
        std: [11.25, 7.63, 2.92, 9.53, 1.19, 0.29, 2.93],
    },
    CropProfile {
        key: "watermelon",
        mean: [99.42, 17.00, 50.22, 25.59, 85.16, 6.50, 50.79],
        std: [11.92, 7.66, 2.98, 0.58, 2.84, 0.29, 5.53],
    },
    CropProfile {
        key: "muskmelon",
        mean: [100.32, 17.72, 50.08, 28.66, 92.34, 6.36, 24.69],
        std: [11.46, 7.05, 3.17, 0.85, 1.40, 0.29, 2.54],
    },
    CropProfile {
        key: "apple",
        mean: [20.80, 134.22, 199.89, 22.63, 92.33, 5.93, 112.65],
        std: [11.57, 8.06, 3.29, 0.83, 1.37, 0.27, 7.19],
    },
    CropProfile {
        key: "orange",
        mean: [19.58, 16.55, 10.01, 22.77, 92.17, 7.02, 110.47],
        std: [11.60, 7.29, 3.09, 7.20, 1.56, 0.45, 5.67],
    },
    CropProfile {
        key: "papaya",
        mean: [49.88, 59.05, 50.04, 33.72, 92.40, 6.74, 142.63],
        std: [11.41, 6.71, 3.30, 6.10, 1.59, 0.53, 59.40],
    },
    CropProfile {
        key: "coconut",
        mean: [21.98, 16.93, 30.59, 27.41, 94.84, 5.98, 175.69],
        std: [11.64, 7.62, 3.09, 1.55, 2.68, 0.30, 29.20],
    },
    CropProfile {
        key: "cotton",
        mean: [117.77, 46.24, 19.56, 23.99, 79.84, 6.91, 80.40],
        std: [11.63, 7.29, 3.02, 1.21, 2.96, 0.52, 11.61],
    },
    CropProfile {
        key: "jute",
        mean: [78.40, 46.86, 39.99, 24.96, 79.64, 6.73, 174.79],
        std: [11.75, 7.27, 3.31, 1.09, 5.21, 0.42, 14.70],
    },
    CropProfile {
        key: "coffee",
        mean: [101.20, 28.74, 29.94, 25.54, 58.87, 6.79, 158.07],
        std: [11.51, 7.14, 2.97, 1.50, 6.34, 0.45, 29.18],
    },
];

static CROP_INFO: [CropInfo; 22] = [
    CropInfo { key: "rice", display_name: "Rice", icon: "🌾", season: "Kharif" },
    CropInfo { key: "maize", display_name: "Maize", icon: "🌽", season: "Kharif" },
    CropInfo { key: "chickpea", display_name: "Chickpea", icon: "🫘", season: "Rabi" },
    CropInfo { key: "kidneybeans", display_name: "Kidney Beans", icon: "🫘", season: "Kharif" },
    CropInfo { key: "pigeonpeas", display_name: "Pigeon Peas", icon: "🌱", season: "Kharif" },
    CropInfo { key: "mothbeans", display_name: "Moth Beans", icon: "🌱", season: "Kharif" },
    CropInfo { key: "mungbean", display_name: "Mung Bean", icon: "🌱", season: "Kharif" },
    CropInfo { key: "blackgram", display_name: "Black Gram", icon: "🌱", season: "Kharif" },
    CropInfo { key: "lentil", display_name: "Lentil", icon: "🌱", season: "Rabi" },
    CropInfo { key: "pomegranate", display_name: "Pomegranate", icon: "🍎", season: "Year-round" },
    CropInfo { key: "banana", display_name: "Banana", icon: "🍌", season: "Year-round" },
    CropInfo { key: "mango", display_name: "Mango", icon: "🥭", season: "Summer" },
    CropInfo { key: "grapes", display_name: "Grapes", icon: "🍇", season: "Rabi" },
    CropInfo { key: "watermelon", display_name: "Watermelon", icon: "🍉", season: "Summer" },
    CropInfo { key: "muskmelon", display_name: "Muskmelon", icon: "🍈", season: "Summer" },
    CropInfo { key: "apple", display_name: "Apple", icon: "🍏", season: "Rabi" },
    CropInfo { key: "orange", display_name: "Orange", icon: "🍊", season: "Rabi" },
    CropInfo { key: "papaya", display_name: "Papaya", icon: "🥭", season: "Year-round" },
    CropInfo { key: "coconut", display_name: "Coconut", icon: "🥥", season: "Year-round" },
    CropInfo { key: "cotton", display_name: "Cotton", icon: "☁️", season: "Kharif" },
    CropInfo { key: "jute", display_name: "Jute", icon: "🌿", season: "Kharif" },
    CropInfo { key: "coffee", display_name: "Coffee", icon: "☕", season: "Year-round" },
];

/// Look up display metadata for a crop key
pub fn crop_info(key: &str) -> Option<&'static CropInfo> {
    CROP_INFO.iter().find(|info| info.key == key)
}
