//! Structured diagnostics via `tracing`. User-facing progress lines are printed
//! by the binary and do not go through the subscriber.

use crate::config::{LogConfig, LogFormat};
use crate::error::{CoreError, CoreResult};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Registry};

pub fn build_env_filter(config: &LogConfig) -> CoreResult<EnvFilter> {
    EnvFilter::try_new(&config.filter)
        .map_err(|e| CoreError::Logging(format!("invalid filter '{}': {}", config.filter, e)))
}

/// Installs the global subscriber, writing to stderr. Fails if one is already set.
pub fn init_logging(config: &LogConfig) -> CoreResult<()> {
    let filter = build_env_filter(config)?;
    let registry = Registry::default().with(filter);

    let result = match config.format {
        LogFormat::Json => registry
            .with(
                fmt::layer()
                    .json()
                    .with_target(true)
                    .with_writer(std::io::stderr),
            )
            .try_init(),
        LogFormat::Text => registry
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_ansi(false)
                    .with_writer(std::io::stderr),
            )
            .try_init(),
    };
    result.map_err(|e| CoreError::Logging(e.to_string()))
}
