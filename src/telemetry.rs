//! Tracing subscriber installation.

use thiserror::Error;
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Errors raised while installing the tracing subscriber.
#[derive(Debug, Error)]
pub enum TelemetryError {
    /// The filter directive could not be parsed.
    #[error("invalid tracing filter '{directive}': {source}")]
    InvalidFilter {
        /// The rejected directive.
        directive: String,
        /// Parser failure.
        source: tracing_subscriber::filter::ParseError,
    },
}

/// Installs a formatted tracing subscriber.
///
/// A valid `RUST_LOG` takes precedence; otherwise `directive` is used. It
/// follows the `EnvFilter` syntax, for example `info,todo_keeper=debug`.
/// Calling this again once a global subscriber exists leaves that
/// subscriber in place and succeeds.
///
/// # Errors
///
/// Returns [`TelemetryError::InvalidFilter`] when `RUST_LOG` is unusable and
/// `directive` is malformed.
pub fn init_tracing(directive: &str) -> Result<(), TelemetryError> {
    let from_env = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    let filter = resolve_filter(from_env.as_deref(), directive)?;
    if let Err(err) = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init()
    {
        debug!(%err, "tracing subscriber already installed");
    }
    Ok(())
}

fn resolve_filter(from_env: Option<&str>, directive: &str) -> Result<EnvFilter, TelemetryError> {
    if let Some(filter) = from_env.and_then(|value| EnvFilter::try_new(value).ok()) {
        return Ok(filter);
    }
    EnvFilter::try_new(directive).map_err(|source| TelemetryError::InvalidFilter {
        directive: directive.to_owned(),
        source,
    })
}
