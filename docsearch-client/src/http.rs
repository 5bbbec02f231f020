//! Shared HTTP client construction for backend requests.

use std::time::Duration;

use crate::config::ClientConfig;
use crate::error::ClientError;

/// User-Agent sent when the config does not override it.
pub const DEFAULT_USER_AGENT: &str = concat!("docsearch-client/", env!("CARGO_PKG_VERSION"));

/// Build a [`reqwest::Client`] configured for the search backend.
///
/// The client has:
/// - Timeout from config, if any
/// - Configured or default User-Agent
/// - gzip decompression
///
/// # Errors
///
/// Returns [`ClientError::Config`] if the client cannot be constructed.
pub fn build_client(config: &ClientConfig) -> Result<reqwest::Client, ClientError> {
    let ua = config
        .user_agent
        .clone()
        .unwrap_or_else(|| DEFAULT_USER_AGENT.to_owned());

    let mut builder = reqwest::Client::builder()
        .user_agent(ua)
        .redirect(reqwest::redirect::Policy::limited(10));
    if let Some(secs) = config.timeout_seconds {
        builder = builder.timeout(Duration::from_secs(secs));
    }

    builder
        .build()
        .map_err(|e| ClientError::Config(format!("failed to build HTTP client: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_user_agent_names_crate() {
        assert!(DEFAULT_USER_AGENT.starts_with("docsearch-client/"));
    }

    #[test]
    fn build_client_with_default_config() {
        assert!(build_client(&ClientConfig::default()).is_ok());
    }

    #[test]
    fn build_client_with_timeout_and_custom_ua() {
        let config = ClientConfig {
            user_agent: Some("CustomBot/1.0".into()),
            ..ClientConfig::default().with_timeout_seconds(3)
        };
        assert!(build_client(&config).is_ok());
    }
}
