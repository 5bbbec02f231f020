//! # docsearch-client
//!
//! Client-side search dispatch and response normalization for the docsearch
//! backend.
//!
//! ## Design
//!
//! - Keyword or pattern (regex) search, routed by a pluggable request policy
//!   to either per-mode endpoints or a single discriminated endpoint
//! - Every search response, whatever its historical shape, is normalized to
//!   `{results, recommendations}` before it reaches the caller
//! - Document text is fetched by id and returned verbatim
//! - One network call per operation: no retry, no caching
//!
//! Queries are logged only at trace level.

pub mod client;
pub mod config;
pub mod contract;
pub mod dispatch;
pub mod document;
pub mod error;
pub mod http;
pub mod normalize;
pub mod service;
pub mod types;

pub use client::SearchClient;
pub use config::ClientConfig;
pub use contract::{EndpointContract, RequestPolicy};
pub use error::{ClientError, Result, TransportError};
pub use normalize::{normalize, SearchPayload};
pub use service::SearchService;
pub use types::{DocumentId, DocumentMeta, DocumentText, NormalizedResult, SearchMode, SearchRequest};

/// Search the backend with a one-off client.
///
/// Convenience wrapper building a [`SearchClient`] from `config`. Prefer
/// keeping a client around when issuing more than one request.
///
/// # Errors
///
/// Returns [`ClientError::Config`] for an invalid config and otherwise the
/// same errors as [`SearchClient::dispatch`].
///
/// # Examples
///
/// ```no_run
/// # async fn example() -> docsearch_client::Result<()> {
/// let config = docsearch_client::ClientConfig::default();
/// let found = docsearch_client::search("invoice", "keyword", "relevance", &config).await?;
/// for doc in &found.results {
///     println!("{}", doc.title);
/// }
/// # Ok(())
/// # }
/// ```
pub async fn search(
    query: &str,
    mode: &str,
    ranking: &str,
    config: &ClientConfig,
) -> Result<NormalizedResult> {
    let client = SearchClient::new(config.clone())?;
    client.search(query, mode, ranking).await
}

/// Fetch the text of document `id` with a one-off client.
///
/// # Errors
///
/// Same as [`SearchClient::fetch_document`], plus [`ClientError::Config`].
pub async fn get_document_text(id: DocumentId, config: &ClientConfig) -> Result<DocumentText> {
    let client = SearchClient::new(config.clone())?;
    client.fetch_document(id).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn search_validates_config() {
        let config = ClientConfig::default().with_base_url("");
        let err = search("test", "keyword", "occurrences", &config).await.unwrap_err();
        assert!(matches!(err, ClientError::Config(_)));
    }

    #[tokio::test]
    async fn document_validates_config() {
        let config = ClientConfig::default().with_timeout_seconds(0);
        let err = get_document_text(1, &config).await.unwrap_err();
        assert!(err.to_string().contains("timeout_seconds"));
    }
}
