//! Prediction Result Types

use serde::Serialize;

/// How a prediction was produced
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PredictionMethod {
    /// Trained model output
    #[serde(rename = "ML_Model")]
    ModelBased,
    /// Rule-based estimate
    #[serde(rename = "Fallback_Estimation")]
    FallbackEstimation,
}

impl PredictionMethod {
    /// Get string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            PredictionMethod::ModelBased => "ML_Model",
            PredictionMethod::FallbackEstimation => "Fallback_Estimation",
        }
    }
}

/// Response for PM2.5 prediction
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Pm25Prediction {
    /// PM2.5 estimate rounded to two decimals (µg/m³)
    #[serde(rename = "predicted_PM2.5")]
    pub predicted_pm25: f64,
    pub method: PredictionMethod,
}

/// Response for AQI category prediction
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryPrediction {
    #[serde(rename = "predicted_AQI_Category")]
    pub category: String,
    pub method: PredictionMethod,
}
