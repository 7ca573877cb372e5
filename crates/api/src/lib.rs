//! Air Quality Prediction API Server
//!
//! HTTP boundary for the prediction service: routing, JSON, CORS, logging
//! and startup.

use anyhow::Context;
use axum::{
    routing::{get, post},
    Router,
};
use inference_engine::{ModelGateway, ModelPaths};
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use prediction_service::PredictionService;
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

pub mod config;
mod error;
mod routes;

pub use crate::config::{LogFormat, ServerConfig};
pub use error::ApiError;
pub use routes::health::BANNER;

/// Application state shared across handlers.
///
/// Read-only after startup, so handlers share it without locking.
pub struct AppState {
    /// Prediction service with its loaded models
    pub service: PredictionService,
    /// Prometheus render handle
    pub metrics: PrometheusHandle,
    /// Version string
    pub version: &'static str,
    /// Start time
    pub start_time: std::time::Instant,
}

impl AppState {
    /// Create new application state
    pub fn new(service: PredictionService, metrics: PrometheusHandle) -> Self {
        Self {
            service,
            metrics,
            version: env!("CARGO_PKG_VERSION"),
            start_time: std::time::Instant::now(),
        }
    }
}

/// Create the application router
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(routes::health::home))
        .route("/health", get(routes::health::health))
        .route("/metrics", get(routes::health::metrics))
        .route("/predict/pm25", post(routes::predictions::predict_pm25))
        .route("/predict/category", post(routes::predictions::predict_category))
        .route("/predict/grid", post(routes::predictions::predict_grid))
        .layer(
            ServiceBuilder::new().layer(TraceLayer::new_for_http()).layer(
                CorsLayer::new()
                    .allow_origin(Any)
                    .allow_methods(Any)
                    .allow_headers(Any),
            ),
        )
        .with_state(state)
}

/// Initialize logging. `RUST_LOG` overrides the default `info` level.
pub fn init_logging(format: LogFormat) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    match format {
        LogFormat::Pretty => registry
            .with(tracing_subscriber::fmt::layer().with_target(true))
            .init(),
        LogFormat::Json => registry.with(tracing_subscriber::fmt::layer().json()).init(),
    }
}

/// Load models and run the server until Ctrl-C
pub async fn run_server(config: ServerConfig) -> anyhow::Result<()> {
    let gateway = ModelGateway::load(&ModelPaths::in_dir(&config.model_dir));
    let metrics = PrometheusBuilder::new()
        .install_recorder()
        .context("Failed to install metrics recorder")?;

    let state = Arc::new(AppState::new(PredictionService::new(gateway), metrics));
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind((config.host.as_str(), config.port))
        .await
        .with_context(|| format!("Failed to bind {}:{}", config.host, config.port))?;
    info!("Starting API server on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
}
