//! Subscriber setup for hosts that embed the site.

use thiserror::Error;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Error)]
pub enum LoggingError {
    #[error("Invalid log filter '{filter}': {source}")]
    InvalidFilter {
        filter: String,
        #[source]
        source: tracing_subscriber::filter::ParseError,
    },

    #[error("A global tracing subscriber is already installed")]
    AlreadyInstalled,
}

/// Builds the filter: `RUST_LOG` when set, `fallback` otherwise.
///
/// # Errors
/// Returns an error if the chosen directive does not parse.
pub fn env_filter(fallback: &str) -> Result<EnvFilter, LoggingError> {
    let directive = std::env::var(EnvFilter::DEFAULT_ENV)
        .ok()
        .filter(|value| !value.trim().is_empty())
        .unwrap_or_else(|| fallback.to_string());

    EnvFilter::try_new(&directive)
        .map_err(|source| LoggingError::InvalidFilter { filter: directive, source })
}

/// Installs a global `fmt` subscriber filtered by [`env_filter`].
///
/// # Errors
/// Returns an error if the filter is invalid or a subscriber is already set.
pub fn init(fallback: &str) -> Result<(), LoggingError> {
    let filter = env_filter(fallback)?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init()
        .map_err(|_| LoggingError::AlreadyInstalled)?;

    tracing::debug!("Logging initialized");
    Ok(())
}
