//! Structured logging setup.
//!
//! The library only emits `tracing` events; nothing is printed unless the
//! host installs a subscriber. [`init_logging`] installs a stderr subscriber
//! for binaries and tests that do not bring their own.

use std::env;
use std::io;
use std::sync::OnceLock;

use thiserror::Error;
use tracing_subscriber::filter::ParseError;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

/// Environment variable holding the filter directives, e.g.
/// `ALMANAC_LOG=alm_time=debug`.
pub const LOG_ENV: &str = "ALMANAC_LOG";

const DEFAULT_FILTER: &str = "warn";

static LOGGING_STATE: OnceLock<()> = OnceLock::new();

/// Errors that can arise while standing up structured logging.
#[derive(Debug, Error)]
pub enum LoggingError {
    /// The filter directives could not be parsed.
    #[error("invalid logging filter: {0}")]
    Filter(#[from] ParseError),
    /// Another global subscriber is already installed.
    #[error("failed to install logging subscriber: {0}")]
    Subscriber(#[from] tracing_subscriber::util::TryInitError),
}

/// Install the global logging subscriber.
///
/// The filter is read from [`LOG_ENV`], falling back to `warn`. The first
/// call wins; subsequent calls are no-ops.
pub fn init_logging() -> Result<(), LoggingError> {
    if LOGGING_STATE.get().is_some() {
        return Ok(());
    }
    let filter = build_filter(env::var(LOG_ENV).ok().as_deref())?;
    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(io::stderr)
                .with_target(true)
                .with_ansi(false),
        )
        .try_init()?;
    let _ = LOGGING_STATE.set(());
    tracing::debug!(env = LOG_ENV, "logging initialised");
    Ok(())
}

fn build_filter(spec: Option<&str>) -> Result<EnvFilter, ParseError> {
    match spec.map(str::trim) {
        Some(spec) if !spec.is_empty() => EnvFilter::try_new(spec),
        _ => EnvFilter::try_new(DEFAULT_FILTER),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_filter_when_unset_or_blank() {
        assert_eq!(build_filter(None).unwrap().to_string(), "warn");
        assert_eq!(build_filter(Some("  ")).unwrap().to_string(), "warn");
    }

    #[test]
    fn custom_filter() {
        assert_eq!(build_filter(Some("alm_time=debug")).unwrap().to_string(), "alm_time=debug");
        assert!(build_filter(Some("alm_time=loud")).is_err());
    }

    #[test]
    fn second_call_is_a_no_op() {
        // the first call may fail if the test harness already installed one
        let first = init_logging();
        if first.is_ok() {
            assert!(init_logging().is_ok());
        }
    }
}
