//! Service Status Routes

use axum::{extract::State, Json};
use inference_engine::GatewayStatus;
use serde::Serialize;
use serde_json::{json, Value};
use std::sync::Arc;

use crate::AppState;

/// Banner returned from `/`
pub const BANNER: &str = "✅ Air Pollution API is running!";

/// Health response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub uptime_seconds: u64,
    pub models: GatewayStatus,
}

/// Root handler
pub async fn home() -> Json<Value> {
    Json(json!({ "message": BANNER }))
}

/// Health check handler
pub async fn health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: state.version,
        uptime_seconds: state.start_time.elapsed().as_secs(),
        models: state.service.gateway().status(),
    })
}

/// Prometheus exposition
pub async fn metrics(State(state): State<Arc<AppState>>) -> String {
    state.metrics.render()
}
