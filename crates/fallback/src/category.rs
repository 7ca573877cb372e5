//! AQI Category Thresholds

use serde::Serialize;
use std::fmt;

/// Coarse AQI label, ordered from cleanest to most polluted
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum AqiCategory {
    #[serde(rename = "Good")]
    Good,
    #[serde(rename = "Satisfactory")]
    Satisfactory,
    #[serde(rename = "Moderate")]
    Moderate,
    #[serde(rename = "Poor")]
    Poor,
    #[serde(rename = "Very Poor")]
    VeryPoor,
    #[serde(rename = "Severe")]
    Severe,
}

impl AqiCategory {
    /// All categories in ascending severity
    pub const ALL: [AqiCategory; 6] = [
        AqiCategory::Good,
        AqiCategory::Satisfactory,
        AqiCategory::Moderate,
        AqiCategory::Poor,
        AqiCategory::VeryPoor,
        AqiCategory::Severe,
    ];

    /// Get string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            AqiCategory::Good => "Good",
            AqiCategory::Satisfactory => "Satisfactory",
            AqiCategory::Moderate => "Moderate",
            AqiCategory::Poor => "Poor",
            AqiCategory::VeryPoor => "Very Poor",
            AqiCategory::Severe => "Severe",
        }
    }

    /// Inclusive PM2.5 upper bound of the category, `None` for `Severe`
    pub fn upper_bound(&self) -> Option<f64> {
        match self {
            AqiCategory::Good => Some(30.0),
            AqiCategory::Satisfactory => Some(60.0),
            AqiCategory::Moderate => Some(90.0),
            AqiCategory::Poor => Some(120.0),
            AqiCategory::VeryPoor => Some(250.0),
            AqiCategory::Severe => None,
        }
    }
}

impl fmt::Display for AqiCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Map a PM2.5 concentration to its AQI category.
///
/// Each threshold belongs to the lower band: exactly 30.0 is `Good`.
pub fn categorize_aqi(pm25: f64) -> AqiCategory {
    AqiCategory::ALL
        .into_iter()
        .find(|category| category.upper_bound().map_or(true, |upper| pm25 <= upper))
        .unwrap_or(AqiCategory::Severe)
}
