//! Tracing subscriber setup.
//!
//! Logs go to stderr so that JSON printed on stdout by the launcher stays
//! machine-readable.

use tracing_bunyan_formatter::{BunyanFormattingLayer, JsonStorageLayer};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter, Registry};

use crate::config::{AppConfig, LogFormat};
use crate::error::AppError;

const APP_NAME: &str = "pollstats";

/// Build the filter from `RUST_LOG`, or from the configured level when unset
pub fn env_filter(config: &AppConfig) -> Result<EnvFilter, AppError> {
    match EnvFilter::try_from_default_env() {
        Ok(filter) => Ok(filter),
        Err(_) => Ok(EnvFilter::try_new(&config.log_level)?),
    }
}

/// Install the global subscriber. Fails if one is already installed.
pub fn init_tracing(config: &AppConfig) -> Result<(), AppError> {
    let registry = Registry::default().with(env_filter(config)?);

    let result = match config.log_format {
        LogFormat::Pretty => registry
            .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
            .try_init(),
        LogFormat::Json => registry
            .with(JsonStorageLayer)
            .with(BunyanFormattingLayer::new(APP_NAME.into(), std::io::stderr))
            .try_init(),
    };

    result.map_err(|e| AppError::Internal(format!("Failed to install tracing subscriber: {}", e)))
}
