//! Trait seam between the search core and whatever consumes it.
//!
//! [`SearchClient`](crate::SearchClient) is the HTTP implementation; session
//! state and tooling are written against [`SearchService`] so they can be
//! driven by in-process fakes.

use std::future::Future;

use crate::error::Result;
use crate::types::{DocumentId, DocumentText, NormalizedResult, SearchRequest};

/// Search and document retrieval against a backend.
///
/// All implementations must be `Send + Sync` so a service can be shared
/// across tasks.
pub trait SearchService: Send + Sync {
    /// Dispatch a prepared request and return the normalized result.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::SearchRequest`](crate::ClientError::SearchRequest)
    /// on transport or backend failure.
    fn search_request(
        &self,
        request: &SearchRequest,
    ) -> impl Future<Output = Result<NormalizedResult>> + Send;

    /// Retrieve the full body of a document.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::DocumentFetch`](crate::ClientError::DocumentFetch)
    /// on transport failure or a not-found response.
    fn get_document_text(&self, id: DocumentId) -> impl Future<Output = Result<DocumentText>> + Send;

    /// Search from the raw boundary strings.
    ///
    /// `mode` follows [`SearchMode::from_mode_str`](crate::SearchMode::from_mode_str).
    fn search(
        &self,
        query: &str,
        mode: &str,
        ranking: &str,
    ) -> impl Future<Output = Result<NormalizedResult>> + Send {
        let request = SearchRequest::new(query, mode, ranking);
        async move { self.search_request(&request).await }
    }
}
