//! Prediction counters exported through the `metrics` facade

use crate::types::PredictionMethod;
use crate::ServiceError;

pub(crate) const PM25: &str = "pm25";
pub(crate) const CATEGORY: &str = "category";

/// Count a completed prediction
pub(crate) fn record_prediction(kind: &'static str, method: PredictionMethod) {
    metrics::counter!("predictions_total", "kind" => kind, "method" => method.as_str())
        .increment(1);
}

/// Count a failed prediction
pub(crate) fn record_error(kind: &'static str, err: &ServiceError) {
    metrics::counter!("prediction_errors_total", "kind" => kind, "error" => err.kind())
        .increment(1);
}
