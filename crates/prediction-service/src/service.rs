//! Prediction Service Implementation

use crate::telemetry::{self, CATEGORY, PM25};
use crate::types::{CategoryPrediction, Pm25Prediction, PredictionMethod};
use crate::ServiceError;
use data_validator::{parse_body, CategoryRequest, Pm25Request};
use fallback::{categorize_aqi, estimate_pm25};
use inference_engine::{FeatureRow, ModelGateway, ModelKind};
use serde_json::Value;
use tracing::{debug, error, info};

/// Round to two decimal places, ties to even (`45.125` becomes `45.12`)
fn round2(value: f64) -> f64 {
    let scaled = value * 100.0;
    if scaled.is_finite() {
        scaled.round_ties_even() / 100.0
    } else {
        value
    }
}

/// Stateless request handler over an immutable model gateway
pub struct PredictionService {
    gateway: ModelGateway,
}

impl PredictionService {
    /// Create a service over an already-loaded gateway
    pub fn new(gateway: ModelGateway) -> Self {
        info!(status = ?gateway.status(), "Creating prediction service");
        Self { gateway }
    }

    /// The underlying model gateway
    pub fn gateway(&self) -> &ModelGateway {
        &self.gateway
    }

    /// Predict PM2.5 from a raw `{Latitude, Longitude, PM10?}` body
    pub fn handle_pm25(&self, body: &[u8]) -> Result<Pm25Prediction, ServiceError> {
        let result = parse_body(body)
            .map_err(ServiceError::from)
            .and_then(|body| self.predict_pm25(&body));
        match &result {
            Ok(prediction) => telemetry::record_prediction(PM25, prediction.method),
            Err(e) => telemetry::record_error(PM25, e),
        }
        result
    }

    /// Predict the AQI category from a raw `{PM2.5, PM10?, Latitude?, Longitude?}` body
    pub fn handle_category(&self, body: &[u8]) -> Result<CategoryPrediction, ServiceError> {
        let result = parse_body(body)
            .map_err(ServiceError::from)
            .and_then(|body| self.predict_category(&body));
        match &result {
            Ok(prediction) => telemetry::record_prediction(CATEGORY, prediction.method),
            Err(e) => telemetry::record_error(CATEGORY, e),
        }
        result
    }

    /// Batch prediction over a coordinate grid.
    ///
    /// Reserved route; it would apply the PM2.5 per-point logic to an
    /// externally supplied grid but has no defined semantics yet.
    pub fn handle_grid(&self) -> Result<Value, ServiceError> {
        Err(ServiceError::NotImplemented("Grid prediction"))
    }

    fn predict_pm25(&self, body: &Value) -> Result<Pm25Prediction, ServiceError> {
        let request = Pm25Request::from_json(body)?;

        let (value, method) = if self.gateway.is_available(ModelKind::Regression) {
            let row = FeatureRow::regression(request.pm10, request.latitude, request.longitude);
            let value = self.gateway.predict_regression(&row).map_err(|e| {
                error!(error = %e, "PM2.5 regression failed");
                ServiceError::from(e)
            })?;
            (value, PredictionMethod::ModelBased)
        } else {
            info!(
                latitude = request.latitude,
                longitude = request.longitude,
                "Using fallback PM2.5 estimation"
            );
            (
                estimate_pm25(request.latitude, request.longitude),
                PredictionMethod::FallbackEstimation,
            )
        };

        if !value.is_finite() {
            return Err(ServiceError::Internal(format!(
                "PM2.5 prediction is not a finite number: {value}"
            )));
        }
        let predicted_pm25 = round2(value);

        debug!(predicted_pm25, method = method.as_str(), "PM2.5 prediction");
        Ok(Pm25Prediction {
            predicted_pm25,
            method,
        })
    }

    fn predict_category(&self, body: &Value) -> Result<CategoryPrediction, ServiceError> {
        let request = CategoryRequest::from_json(body)?;

        let (category, method) = if self.gateway.is_available(ModelKind::Classification) {
            let row = FeatureRow::classification(
                request.pm25,
                request.pm10,
                request.latitude,
                request.longitude,
            );
            let label = self.gateway.predict_classification(&row).map_err(|e| {
                error!(error = %e, "AQI classification failed");
                ServiceError::from(e)
            })?;
            (label, PredictionMethod::ModelBased)
        } else {
            info!(pm25 = request.pm25, "Using fallback AQI categorization");
            (
                categorize_aqi(request.pm25).as_str().to_string(),
                PredictionMethod::FallbackEstimation,
            )
        };

        debug!(category = %category, method = method.as_str(), "AQI prediction");
        Ok(CategoryPrediction { category, method })
    }
}
