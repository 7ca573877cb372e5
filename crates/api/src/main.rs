//! Air Quality Prediction API - Main Entry Point

use api::{init_logging, run_server, ServerConfig};
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ServerConfig::load()?;
    init_logging(config.log_format);

    info!("=== Air Quality API v{} ===", env!("CARGO_PKG_VERSION"));
    info!(model_dir = %config.model_dir.display(), "Loading prediction models...");

    run_server(config).await
}
