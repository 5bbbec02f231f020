//! Error types for the docsearch-client crate.
//!
//! Each [`ClientError`] variant carries a stable error code accessible via
//! [`ClientError::code()`]. Transport failures are kept as a typed
//! [`TransportError`] so callers can inspect the underlying cause.

/// Stable error codes for programmatic error handling.
pub mod error_codes {
    /// Network or backend failure during a search request.
    pub const SEARCH_REQUEST_FAILED: &str = "SEARCH_REQUEST_FAILED";

    /// Network or backend failure while fetching document text.
    pub const DOCUMENT_FETCH_FAILED: &str = "DOCUMENT_FETCH_FAILED";

    /// Backend body could not be decoded as structured data.
    pub const MALFORMED_RESPONSE: &str = "MALFORMED_RESPONSE";

    /// Invalid client configuration.
    pub const CONFIG_INVALID: &str = "CONFIG_INVALID";
}

/// The underlying cause of a failed backend call.
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    /// The request never produced a response (connect, DNS, TLS, body read).
    #[error("HTTP transport error: {0}")]
    Http(#[from] reqwest::Error),

    /// The backend answered with a non-success status.
    #[error("backend returned HTTP {status}: {body}")]
    Status {
        /// Numeric HTTP status code.
        status: u16,
        /// Response body text, possibly empty.
        body: String,
    },
}

impl TransportError {
    /// Returns the HTTP status if the backend produced one.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Http(e) => e.status().map(|s| s.as_u16()),
            Self::Status { status, .. } => Some(*status),
        }
    }
}

/// Errors produced by the search dispatcher and document fetcher.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// A search call failed in transport or was rejected by the backend.
    #[error("[{}] search request failed: {}", error_codes::SEARCH_REQUEST_FAILED, .0)]
    SearchRequest(#[source] TransportError),

    /// A document text call failed in transport or was rejected by the backend.
    #[error("[{}] document fetch failed: {}", error_codes::DOCUMENT_FETCH_FAILED, .0)]
    DocumentFetch(#[source] TransportError),

    /// The backend body is not parseable as structured data.
    #[error("[{}] malformed response: {}", error_codes::MALFORMED_RESPONSE, .0)]
    MalformedResponse(String),

    /// Invalid client configuration.
    #[error("[{}] config error: {}", error_codes::CONFIG_INVALID, .0)]
    Config(String),
}

impl ClientError {
    /// Returns the stable error code for this error.
    pub fn code(&self) -> &'static str {
        match self {
            Self::SearchRequest(_) => error_codes::SEARCH_REQUEST_FAILED,
            Self::DocumentFetch(_) => error_codes::DOCUMENT_FETCH_FAILED,
            Self::MalformedResponse(_) => error_codes::MALFORMED_RESPONSE,
            Self::Config(_) => error_codes::CONFIG_INVALID,
        }
    }

    /// Returns the transport cause for search and document failures.
    pub fn transport(&self) -> Option<&TransportError> {
        match self {
            Self::SearchRequest(t) | Self::DocumentFetch(t) => Some(t),
            Self::MalformedResponse(_) | Self::Config(_) => None,
        }
    }

    /// True when the backend reported the requested resource as missing.
    pub fn is_not_found(&self) -> bool {
        self.transport().and_then(TransportError::status) == Some(404)
    }
}

/// Convenience type alias for docsearch-client results.
pub type Result<T> = std::result::Result<T, ClientError>;

#[cfg(test)]
mod tests {
    use super::*;

    fn status(code: u16, body: &str) -> TransportError {
        TransportError::Status {
            status: code,
            body: body.into(),
        }
    }

    #[test]
    fn display_search_request() {
        let err = ClientError::SearchRequest(status(500, "boom"));
        assert_eq!(
            err.to_string(),
            "[SEARCH_REQUEST_FAILED] search request failed: backend returned HTTP 500: boom"
        );
    }

    #[test]
    fn display_document_fetch() {
        let err = ClientError::DocumentFetch(status(404, "not found"));
        assert_eq!(
            err.to_string(),
            "[DOCUMENT_FETCH_FAILED] document fetch failed: backend returned HTTP 404: not found"
        );
    }

    #[test]
    fn display_malformed_and_config() {
        let err = ClientError::MalformedResponse("expected value at line 1".into());
        assert_eq!(
            err.to_string(),
            "[MALFORMED_RESPONSE] malformed response: expected value at line 1"
        );
        let err = ClientError::Config("base_url is empty".into());
        assert_eq!(err.to_string(), "[CONFIG_INVALID] config error: base_url is empty");
    }

    #[test]
    fn codes_are_stable() {
        assert_eq!(
            ClientError::SearchRequest(status(502, "")).code(),
            "SEARCH_REQUEST_FAILED"
        );
        assert_eq!(
            ClientError::DocumentFetch(status(502, "")).code(),
            "DOCUMENT_FETCH_FAILED"
        );
        assert_eq!(
            ClientError::MalformedResponse(String::new()).code(),
            "MALFORMED_RESPONSE"
        );
        assert_eq!(ClientError::Config(String::new()).code(), "CONFIG_INVALID");
    }

    #[test]
    fn not_found_only_for_404() {
        assert!(ClientError::DocumentFetch(status(404, "")).is_not_found());
        assert!(!ClientError::DocumentFetch(status(500, "")).is_not_found());
        assert!(!ClientError::MalformedResponse("x".into()).is_not_found());
    }

    #[test]
    fn source_is_transport_error() {
        use std::error::Error as _;
        let err = ClientError::SearchRequest(status(503, "down"));
        let source = err.source().expect("has source");
        assert!(source.to_string().contains("503"));
    }

    #[test]
    fn error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ClientError>();
    }
}
