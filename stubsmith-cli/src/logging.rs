//! Tracing subscriber installation for the `stubsmith` binary.
//!
//! Logs go to stderr so stdout carries nothing but generated stubs.

use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use crate::error::CliError;

/// Builds the event filter: `RUST_LOG` when set, `default_level` otherwise.
///
/// # Errors
///
/// Returns [`CliError::Logging`] when `default_level` is not a valid filter
/// directive.
pub fn filter(default_level: &str) -> Result<EnvFilter, CliError> {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_level))
        .map_err(|err| CliError::Logging(err.to_string()))
}

/// Installs the global subscriber.
///
/// # Errors
///
/// Returns [`CliError::Logging`] when the filter is invalid or a subscriber
/// is already installed.
pub fn init(default_level: &str) -> Result<(), CliError> {
    tracing_subscriber::registry()
        .with(filter(default_level)?)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init()
        .map_err(|err| CliError::Logging(err.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_level_accepts_directive_lists() {
        assert!(filter("stubsmith=debug,info").is_ok());
    }
}
