//! Server Configuration

use config::{Config, ConfigError, Environment};
use serde::Deserialize;
use std::path::PathBuf;

/// Log output format
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human readable
    #[default]
    Pretty,
    /// One JSON object per line
    Json,
}

/// Server configuration.
///
/// `PORT` sets the listen port; everything else is read from `AQ_`-prefixed
/// variables (`AQ_HOST`, `AQ_MODEL_DIR`, `AQ_LOG_FORMAT`).
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Bind address
    pub host: String,
    /// Listen port
    pub port: u16,
    /// Directory holding the model artifacts
    pub model_dir: PathBuf,
    /// Log output format
    pub log_format: LogFormat,
}

impl ServerConfig {
    pub const DEFAULT_PORT: u16 = 5000;

    /// Load from the process environment
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_sources(std::env::var("PORT").ok(), Environment::with_prefix("AQ"))
    }

    /// Build from an explicit port override and environment source
    pub fn from_sources(port: Option<String>, env: Environment) -> Result<Self, ConfigError> {
        Config::builder()
            .set_default("host", "0.0.0.0")?
            .set_default("port", i64::from(Self::DEFAULT_PORT))?
            .set_default("model_dir", ".")?
            .set_default("log_format", "pretty")?
            .add_source(env)
            .set_override_option("port", port)?
            .build()?
            .try_deserialize()
    }
}
