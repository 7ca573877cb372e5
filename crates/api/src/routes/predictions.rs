//! Prediction Routes
//!
//! Bodies are passed through as raw bytes so malformed or missing JSON is
//! reported (and counted) by the service rather than an extractor rejection.

use axum::{body::Bytes, extract::State, Json};
use prediction_service::{CategoryPrediction, Pm25Prediction};
use serde_json::Value;
use std::sync::Arc;

use crate::{error::ApiError, AppState};

/// `POST /predict/pm25`
pub async fn predict_pm25(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<Json<Pm25Prediction>, ApiError> {
    Ok(Json(state.service.handle_pm25(&body)?))
}

/// `POST /predict/category`
pub async fn predict_category(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<Json<CategoryPrediction>, ApiError> {
    Ok(Json(state.service.handle_category(&body)?))
}

/// `POST /predict/grid`, reserved; the body is ignored
pub async fn predict_grid(State(state): State<Arc<AppState>>) -> Result<Json<Value>, ApiError> {
    Ok(Json(state.service.handle_grid()?))
}
