//! Tracing setup shared by the binaries.
//!
//! Output goes to stderr so stdout stays clean for results and JSON reports.

use tracing_subscriber::EnvFilter;

use crate::config::LoggingConfig;
use crate::error::{AppError, Result};

/// Build the filter: `RUST_LOG` wins, else the configured directive.
pub fn env_filter(config: &LoggingConfig) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.filter))
}

/// Install the global subscriber.
///
/// # Errors
///
/// Returns [`AppError::Config`] if a global subscriber is already set.
pub fn init(config: &LoggingConfig) -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(env_filter(config))
        .try_init()
        .map_err(|e| AppError::Config(format!("failed to initialise logging: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn configured_filter_parses() {
        let config = LoggingConfig {
            filter: "docsearch=debug,docsearch_client=trace".into(),
        };
        // RUST_LOG may be set in CI; either way a filter is produced.
        let filter = env_filter(&config);
        assert!(!filter.to_string().is_empty());
    }

    #[test]
    fn second_init_is_config_error() {
        let config = LoggingConfig::default();
        let _ = init(&config);
        let err = init(&config).unwrap_err();
        assert!(matches!(err, AppError::Config(_)));
    }
}
