//! Tabular Feature Rows

use std::fmt;

/// Column order expected by the PM2.5 regression model
pub const REGRESSION_COLUMNS: [&str; 3] = ["PM10", "Latitude", "Longitude"];

/// Column order expected by the AQI classification model
pub const CLASSIFICATION_COLUMNS: [&str; 4] = ["PM2.5", "PM10", "Latitude", "Longitude"];

/// Kind of model held by the gateway
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModelKind {
    /// PM2.5 concentration regressor
    Regression,
    /// AQI category classifier
    Classification,
}

impl ModelKind {
    /// Get string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            ModelKind::Regression => "regression",
            ModelKind::Classification => "classification",
        }
    }
}

impl fmt::Display for ModelKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single row of named numeric features, in model column order
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureRow {
    columns: Vec<(&'static str, f64)>,
}

impl FeatureRow {
    /// Row for the regression model: `[PM10, Latitude, Longitude]`
    pub fn regression(pm10: f64, latitude: f64, longitude: f64) -> Self {
        Self::from_columns(&REGRESSION_COLUMNS, &[pm10, latitude, longitude])
    }

    /// Row for the classification model: `[PM2.5, PM10, Latitude, Longitude]`
    pub fn classification(pm25: f64, pm10: f64, latitude: f64, longitude: f64) -> Self {
        Self::from_columns(&CLASSIFICATION_COLUMNS, &[pm25, pm10, latitude, longitude])
    }

    fn from_columns(names: &[&'static str], values: &[f64]) -> Self {
        Self {
            columns: names.iter().copied().zip(values.iter().copied()).collect(),
        }
    }

    /// Number of columns
    pub(crate) fn len(&self) -> usize {
        self.columns.len()
    }

    /// Column values in order
    pub fn values(&self) -> impl Iterator<Item = f64> + '_ {
        self.columns.iter().map(|(_, value)| *value)
    }
}
