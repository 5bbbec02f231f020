//! Error types for the docsearch application layer.

use docsearch_client::ClientError;

/// Top-level error type for sessions, configuration, and tooling.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Search or document call failed.
    #[error("client error: {0}")]
    Client(#[from] ClientError),

    /// Configuration error.
    #[error("config error: {0}")]
    Config(String),

    /// Benchmark setup or reporting error.
    #[error("bench error: {0}")]
    Bench(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience result type.
pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_errors_convert() {
        let err: AppError = ClientError::MalformedResponse("bad".into()).into();
        assert!(matches!(err, AppError::Client(_)));
        assert_eq!(
            err.to_string(),
            "client error: [MALFORMED_RESPONSE] malformed response: bad"
        );
    }

    #[test]
    fn io_errors_convert() {
        let err: AppError = std::io::Error::new(std::io::ErrorKind::NotFound, "gone").into();
        assert_eq!(err.to_string(), "I/O error: gone");
    }
}
