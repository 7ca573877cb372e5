//! Prediction Service
//!
//! Validates prediction requests, prefers the trained model for each
//! prediction type, falls back to rule-based estimation when that model is
//! not loaded, and tags every result with the method actually used.

mod service;
mod telemetry;
mod types;

pub use service::PredictionService;
pub use types::{CategoryPrediction, Pm25Prediction, PredictionMethod};

use data_validator::ValidationError;
use inference_engine::InferenceError;
use thiserror::Error;

/// Errors surfaced to the HTTP boundary
#[derive(Debug, Error)]
pub enum ServiceError {
    /// Request body failed validation
    #[error(transparent)]
    Validation(#[from] ValidationError),
    /// Unexpected failure while predicting
    #[error("{0}")]
    Internal(String),
    /// Operation declared but not available
    #[error("{0} is not implemented")]
    NotImplemented(&'static str),
}

impl ServiceError {
    /// Short label used for metrics
    pub fn kind(&self) -> &'static str {
        match self {
            ServiceError::Validation(_) => "validation",
            ServiceError::Internal(_) => "internal",
            ServiceError::NotImplemented(_) => "not_implemented",
        }
    }
}

impl From<InferenceError> for ServiceError {
    fn from(err: InferenceError) -> Self {
        ServiceError::Internal(err.to_string())
    }
}
