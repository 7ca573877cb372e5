//! Model Gateway Implementation

use crate::features::{FeatureRow, ModelKind};
use crate::onnx::{OnnxClassifier, OnnxRegressor};
use crate::InferenceError;
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// A model that predicts one numeric value per row
pub trait RegressionModel: Send + Sync {
    fn predict(&self, row: &FeatureRow) -> Result<f64, InferenceError>;
}

/// A model that predicts one label per row
pub trait ClassificationModel: Send + Sync {
    fn predict(&self, row: &FeatureRow) -> Result<String, InferenceError>;
}

/// Locations of the model artifacts
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelPaths {
    /// PM2.5 regression model
    pub regression: PathBuf,
    /// AQI classification model
    pub classification: PathBuf,
    /// Class index to label mapping for the classifier
    pub classification_labels: PathBuf,
}

impl ModelPaths {
    pub const REGRESSION_FILE: &'static str = "pm25_regression_model.onnx";
    pub const CLASSIFICATION_FILE: &'static str = "aqi_classification_model.onnx";
    pub const CLASSIFICATION_LABELS_FILE: &'static str = "aqi_classification_model.labels.json";

    /// Default artifact names inside `dir`
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        Self {
            regression: dir.join(Self::REGRESSION_FILE),
            classification: dir.join(Self::CLASSIFICATION_FILE),
            classification_labels: dir.join(Self::CLASSIFICATION_LABELS_FILE),
        }
    }
}

/// Availability of each model
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GatewayStatus {
    pub regression: bool,
    pub classification: bool,
}

/// Holds zero, one or both models. Immutable once built.
#[derive(Default)]
pub struct ModelGateway {
    regression: Option<Box<dyn RegressionModel>>,
    classification: Option<Box<dyn ClassificationModel>>,
}

impl ModelGateway {
    /// Gateway with no models; every prediction goes to the fallback
    pub fn empty() -> Self {
        Self::default()
    }

    /// Attach a regression model
    pub fn with_regression(mut self, model: impl RegressionModel + 'static) -> Self {
        self.regression = Some(Box::new(model));
        self
    }

    /// Attach a classification model
    pub fn with_classification(mut self, model: impl ClassificationModel + 'static) -> Self {
        self.classification = Some(Box::new(model));
        self
    }

    /// Load both models from disk.
    ///
    /// Never fails: a model that cannot be loaded is logged and left absent.
    pub fn load(paths: &ModelPaths) -> Self {
        let mut gateway = Self::empty();

        match OnnxRegressor::load(&paths.regression) {
            Ok(model) => {
                info!(path = %paths.regression.display(), "Regression model loaded");
                gateway.regression = Some(Box::new(model));
            }
            Err(e) => {
                warn!(error = %e, "Regression model unavailable, PM2.5 will use fallback");
            }
        }

        match OnnxClassifier::load(&paths.classification, &paths.classification_labels) {
            Ok(model) => {
                info!(path = %paths.classification.display(), "Classification model loaded");
                gateway.classification = Some(Box::new(model));
            }
            Err(e) => {
                warn!(error = %e, "Classification model unavailable, AQI will use fallback");
            }
        }

        gateway
    }

    /// Whether the given model is loaded
    pub fn is_available(&self, kind: ModelKind) -> bool {
        match kind {
            ModelKind::Regression => self.regression.is_some(),
            ModelKind::Classification => self.classification.is_some(),
        }
    }

    /// Availability of both models
    pub fn status(&self) -> GatewayStatus {
        GatewayStatus {
            regression: self.is_available(ModelKind::Regression),
            classification: self.is_available(ModelKind::Classification),
        }
    }

    /// Predict PM2.5 for one row
    pub fn predict_regression(&self, row: &FeatureRow) -> Result<f64, InferenceError> {
        self.regression
            .as_deref()
            .ok_or(InferenceError::ModelUnavailable(ModelKind::Regression))?
            .predict(row)
    }

    /// Predict the AQI label for one row
    pub fn predict_classification(&self, row: &FeatureRow) -> Result<String, InferenceError> {
        self.classification
            .as_deref()
            .ok_or(InferenceError::ModelUnavailable(ModelKind::Classification))?
            .predict(row)
    }
}
