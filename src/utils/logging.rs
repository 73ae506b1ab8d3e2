//! Tracing subscriber setup

use crate::config::LoggingConfig;
use crate::utils::error::{DashboardError, Result};
use tracing::Dispatch;
use tracing_subscriber::EnvFilter;

/// Filter directives: `RUST_LOG` when set, else the configured level
pub fn env_filter(config: &LoggingConfig) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.level.to_ascii_lowercase()))
}

/// Scoped subscriber for the work done before the configuration is known
///
/// Uses the default level (or `RUST_LOG`) and writes to stderr, so startup
/// warnings from loading and validating the configuration are not lost.
pub fn bootstrap_dispatch() -> Dispatch {
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(env_filter(&LoggingConfig::default()))
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();

    Dispatch::new(subscriber)
}

/// Install the global subscriber. Fails if one is already installed.
pub fn init_tracing(config: &LoggingConfig) -> Result<()> {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(env_filter(config))
        .with_target(false)
        .with_thread_ids(false);

    let installed = if config.json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };

    installed.map_err(|e| DashboardError::internal(format!("Failed to initialize logging: {}", e)))
}
