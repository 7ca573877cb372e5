//! ONNX-backed models using tract

use crate::features::{FeatureRow, CLASSIFICATION_COLUMNS, REGRESSION_COLUMNS};
use crate::gateway::{ClassificationModel, RegressionModel};
use crate::{InferenceError, ModelLoadError};
use std::path::Path;
use tract_onnx::prelude::*;
use tracing::debug;

type OnnxPlan = TypedRunnableModel<TypedModel>;

/// Load and optimize an ONNX graph taking a `[1, width]` f32 input
fn load_plan(path: &Path, width: usize) -> Result<OnnxPlan, ModelLoadError> {
    if !path.is_file() {
        return Err(ModelLoadError::NotFound(path.to_path_buf()));
    }

    tract_onnx::onnx()
        .model_for_path(path)
        .and_then(|model| model.with_input_fact(0, f32::fact([1, width]).into()))
        .and_then(|model| model.into_optimized())
        .and_then(|model| model.into_runnable())
        .map_err(|e| ModelLoadError::Invalid {
            path: path.display().to_string(),
            reason: format!("{e:#}"),
        })
}

/// Run a single row through the plan
fn run_row(
    plan: &OnnxPlan,
    width: usize,
    row: &FeatureRow,
) -> Result<TVec<TValue>, InferenceError> {
    if row.len() != width {
        return Err(InferenceError::InvalidInputShape {
            expected: width,
            actual: row.len(),
        });
    }

    let values: Vec<f32> = row.values().map(|v| v as f32).collect();
    let input: Tensor = tract_ndarray::Array2::from_shape_vec((1, width), values)
        .map_err(|e| InferenceError::InferenceFailed(e.to_string()))?
        .into();

    plan.run(tvec!(input.into()))
        .map_err(|e| InferenceError::InferenceFailed(format!("{e:#}")))
}

/// PM2.5 regressor exported to ONNX
pub struct OnnxRegressor {
    plan: OnnxPlan,
}

impl OnnxRegressor {
    const WIDTH: usize = REGRESSION_COLUMNS.len();

    /// Load the model from `path`
    pub fn load(path: &Path) -> Result<Self, ModelLoadError> {
        Ok(Self {
            plan: load_plan(path, Self::WIDTH)?,
        })
    }
}

impl RegressionModel for OnnxRegressor {
    fn predict(&self, row: &FeatureRow) -> Result<f64, InferenceError> {
        let outputs = run_row(&self.plan, Self::WIDTH, row)?;
        let output = outputs.first().ok_or(InferenceError::EmptyOutput)?;

        let values = output
            .cast_to::<f64>()
            .map_err(|e| InferenceError::InferenceFailed(format!("{e:#}")))?;
        let value = values
            .as_slice::<f64>()
            .map_err(|e| InferenceError::InferenceFailed(format!("{e:#}")))?
            .first()
            .copied()
            .ok_or(InferenceError::EmptyOutput)?;

        debug!(value, "Regression output");
        Ok(value)
    }
}

/// AQI classifier exported to ONNX.
///
/// Classifiers exported with string classes emit the label directly;
/// those with integer classes emit an index resolved through `labels`.
pub struct OnnxClassifier {
    plan: OnnxPlan,
    labels: Option<Vec<String>>,
}

impl OnnxClassifier {
    const WIDTH: usize = CLASSIFICATION_COLUMNS.len();

    /// Load the model from `path` and, if present, the label list from `labels_path`
    pub fn load(path: &Path, labels_path: &Path) -> Result<Self, ModelLoadError> {
        let plan = load_plan(path, Self::WIDTH)?;
        let labels = if labels_path.is_file() {
            Some(read_labels(labels_path)?)
        } else {
            None
        };

        Ok(Self { plan, labels })
    }
}

/// Read a JSON array of class labels
fn read_labels(path: &Path) -> Result<Vec<String>, ModelLoadError> {
    let labels_error = |reason: String| ModelLoadError::Labels {
        path: path.display().to_string(),
        reason,
    };

    let raw = std::fs::read(path).map_err(|e| labels_error(e.to_string()))?;
    serde_json::from_slice(&raw).map_err(|e| labels_error(e.to_string()))
}

impl ClassificationModel for OnnxClassifier {
    fn predict(&self, row: &FeatureRow) -> Result<String, InferenceError> {
        let outputs = run_row(&self.plan, Self::WIDTH, row)?;
        let output = outputs.first().ok_or(InferenceError::EmptyOutput)?;

        if output.datum_type() == DatumType::String {
            return output
                .as_slice::<String>()
                .map_err(|e| InferenceError::InferenceFailed(format!("{e:#}")))?
                .first()
                .cloned()
                .ok_or(InferenceError::EmptyOutput);
        }

        let indices = output
            .cast_to::<i64>()
            .map_err(|e| InferenceError::InferenceFailed(format!("{e:#}")))?;
        let index = indices
            .as_slice::<i64>()
            .map_err(|e| InferenceError::InferenceFailed(format!("{e:#}")))?
            .first()
            .copied()
            .ok_or(InferenceError::EmptyOutput)?;

        debug!(index, "Classification output");
        usize::try_from(index)
            .ok()
            .and_then(|i| self.labels.as_ref()?.get(i))
            .cloned()
            .ok_or(InferenceError::UnknownLabel(index))
    }
}
