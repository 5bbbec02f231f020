//! Client configuration with sensible defaults.
//!
//! [`ClientConfig`] selects the backend base URL, which endpoint contract the
//! backend speaks, and HTTP client behaviour.

use serde::{Deserialize, Serialize};

use crate::contract::EndpointContract;
use crate::error::ClientError;

/// Default backend base URL, including the `/api` prefix.
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000/api";

/// Configuration for a [`SearchClient`](crate::SearchClient).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Base URL every endpoint path is appended to (`/api` prefixed).
    pub base_url: String,
    /// Which backend endpoint layout to target.
    pub contract: EndpointContract,
    /// Per-request timeout in seconds. `None` leaves the HTTP stack default
    /// (no timeout).
    pub timeout_seconds: Option<u64>,
    /// Custom User-Agent. Defaults to `docsearch-client/<version>`.
    pub user_agent: Option<String>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_owned(),
            contract: EndpointContract::default(),
            timeout_seconds: None,
            user_agent: None,
        }
    }
}

impl ClientConfig {
    /// Set a custom base URL.
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the endpoint contract.
    pub fn with_contract(mut self, contract: EndpointContract) -> Self {
        self.contract = contract;
        self
    }

    /// Set a request timeout.
    pub fn with_timeout_seconds(mut self, seconds: u64) -> Self {
        self.timeout_seconds = Some(seconds);
        self
    }

    /// Base URL without trailing slashes, ready for path joining.
    pub fn trimmed_base_url(&self) -> &str {
        self.base_url.trim_end_matches('/')
    }

    /// Validates this configuration.
    ///
    /// Checks:
    /// - `base_url` parses as an `http` or `https` URL
    /// - `timeout_seconds`, when set, is greater than 0
    pub fn validate(&self) -> Result<(), ClientError> {
        let parsed = url::Url::parse(self.trimmed_base_url())
            .map_err(|e| ClientError::Config(format!("invalid base_url {:?}: {e}", self.base_url)))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(ClientError::Config(format!(
                "base_url must use http or https, got {}",
                parsed.scheme()
            )));
        }
        if self.timeout_seconds == Some(0) {
            return Err(ClientError::Config(
                "timeout_seconds must be greater than 0".into(),
            ));
        }
        Ok(())
    }
}
