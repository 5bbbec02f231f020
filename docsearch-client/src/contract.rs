//! Request-building policies for the backend's search endpoints.
//!
//! The backend has exposed keyword and pattern search either as two
//! endpoints (`/basic_search`, `/regex_search`) or as one `/search` endpoint
//! with a `type` discriminator. A [`RequestPolicy`] turns a
//! [`SearchRequest`] into the URL and JSON body for one of those layouts, so
//! the dispatcher never hardcodes either.

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::types::{SearchMode, SearchRequest};

/// Endpoint layout the backend speaks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EndpointContract {
    /// One endpoint per mode: `/basic_search` and `/regex_search`.
    #[default]
    Split,
    /// A single `/search` endpoint with `type = "basic" | "regex"`.
    Unified,
}

impl EndpointContract {
    /// Returns the policy implementing this layout.
    pub fn policy(self) -> Arc<dyn RequestPolicy> {
        match self {
            Self::Split => Arc::new(SplitEndpoints),
            Self::Unified => Arc::new(UnifiedEndpoint),
        }
    }

    /// Config/CLI spelling.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Split => "split",
            Self::Unified => "unified",
        }
    }
}

impl fmt::Display for EndpointContract {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for EndpointContract {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "split" => Ok(Self::Split),
            "unified" => Ok(Self::Unified),
            other => Err(format!(
                "unknown endpoint contract {other:?} (expected \"split\" or \"unified\")"
            )),
        }
    }
}

/// A fully formed POST the dispatcher will send.
#[derive(Debug, Clone, PartialEq)]
pub struct OutboundRequest {
    /// Absolute endpoint URL.
    pub url: String,
    /// JSON request body.
    pub body: serde_json::Value,
}

/// Builds the backend request for a search.
///
/// Implementations must be pure: no I/O, same input gives same output.
pub trait RequestPolicy: Send + Sync {
    /// Build the request for `request` against `base_url` (no trailing slash).
    fn build(&self, base_url: &str, request: &SearchRequest) -> OutboundRequest;

    /// Short name used in logs.
    fn name(&self) -> &'static str;
}

/// Per-mode endpoints.
#[derive(Debug, Clone, Copy, Default)]
pub struct SplitEndpoints;

impl RequestPolicy for SplitEndpoints {
    fn build(&self, base_url: &str, request: &SearchRequest) -> OutboundRequest {
        let endpoint = match request.mode {
            SearchMode::Keyword => "basic_search",
            SearchMode::Pattern => "regex_search",
        };
        OutboundRequest {
            url: format!("{base_url}/{endpoint}"),
            body: serde_json::json!({
                "query": request.query,
                "ranking": request.ranking,
            }),
        }
    }

    fn name(&self) -> &'static str {
        "split"
    }
}

/// Single endpoint with a mode discriminator.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnifiedEndpoint;

impl RequestPolicy for UnifiedEndpoint {
    fn build(&self, base_url: &str, request: &SearchRequest) -> OutboundRequest {
        OutboundRequest {
            url: format!("{base_url}/search"),
            body: serde_json::json!({
                "query": request.query,
                "type": request.mode.wire_type(),
                "ranking": request.ranking,
            }),
        }
    }

    fn name(&self) -> &'static str {
        "unified"
    }
}
