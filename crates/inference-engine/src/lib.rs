//! Model Gateway
//!
//! Owns the externally trained PM2.5 regression and AQI classification
//! models. Each is loaded once at startup; a model that fails to load stays
//! absent for the lifetime of the process and callers route to the
//! rule-based fallback instead.

mod features;
mod gateway;
mod onnx;

pub use features::{FeatureRow, ModelKind, CLASSIFICATION_COLUMNS, REGRESSION_COLUMNS};
pub use gateway::{ClassificationModel, GatewayStatus, ModelGateway, ModelPaths, RegressionModel};
pub use onnx::{OnnxClassifier, OnnxRegressor};

use std::path::PathBuf;
use thiserror::Error;

/// Errors while loading a model artifact
#[derive(Debug, Error)]
pub enum ModelLoadError {
    #[error("Model artifact not found: {}", .0.display())]
    NotFound(PathBuf),
    #[error("Invalid model artifact {path}: {reason}")]
    Invalid { path: String, reason: String },
    #[error("Invalid label file {path}: {reason}")]
    Labels { path: String, reason: String },
}

/// Errors during a single prediction
#[derive(Debug, Error)]
pub enum InferenceError {
    #[error("The {0} model is not loaded")]
    ModelUnavailable(ModelKind),
    #[error("Invalid input shape: expected {expected} features, got {actual}")]
    InvalidInputShape { expected: usize, actual: usize },
    #[error("Inference failed: {0}")]
    InferenceFailed(String),
    #[error("Model returned an empty output")]
    EmptyOutput,
    #[error("Model returned unknown class index {0}")]
    UnknownLabel(i64),
}
