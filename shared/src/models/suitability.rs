//! Rule-based suitability models

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use super::CropCatalogEntry;

/// South Asian cropping season
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Season {
    /// Winter-sown, October through March
    Rabi,
    /// Monsoon-sown, April through September
    Kharif,
}

impl Season {
    /// Season for a calendar month (1-12)
    pub fn from_month(month: u32) -> Self {
        match month {
            4..=9 => Season::Kharif,
            _ => Season::Rabi,
        }
    }

    pub fn from_date(date: NaiveDate) -> Self {
        Self::from_month(date.month())
    }

    /// Label as it appears inside catalog season text
    pub fn label(&self) -> &'static str {
        match self {
            Season::Rabi => "Rabi",
            Season::Kharif => "Kharif",
        }
    }

    pub fn other(&self) -> Self {
        match self {
            Season::Rabi => Season::Kharif,
            Season::Kharif => Season::Rabi,
        }
    }
}

impl std::fmt::Display for Season {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Suitability bucket over the unclamped score
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SuitabilityLevel {
    /// 80 and above
    Excellent,
    /// 60 to 80
    Good,
    /// 40 to 60
    Moderate,
    /// Below 40
    Low,
}

impl SuitabilityLevel {
    pub fn from_score(score: f64) -> Self {
        if score >= 80.0 {
            SuitabilityLevel::Excellent
        } else if score >= 60.0 {
            SuitabilityLevel::Good
        } else if score >= 40.0 {
            SuitabilityLevel::Moderate
        } else {
            SuitabilityLevel::Low
        }
    }
}

impl std::fmt::Display for SuitabilityLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SuitabilityLevel::Excellent => write!(f, "Excellent"),
            SuitabilityLevel::Good => write!(f, "Good"),
            SuitabilityLevel::Moderate => write!(f, "Moderate"),
            SuitabilityLevel::Low => write!(f, "Low"),
        }
    }
}

/// A scored catalog entry
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SuitabilityResult {
    pub crop: CropCatalogEntry,
    /// Sum of the region, soil, land-size and season contributions
    pub score: f64,
    pub level: SuitabilityLevel,
    pub reasons: Vec<String>,
}
