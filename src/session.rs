//! UI session: a search service plus the result store it feeds.
//!
//! [`SearchSession`] is created at session start and passed explicitly to
//! consumers. It owns the only code path that writes search results into the
//! [`ResultStore`].
//!
//! Overlapping searches are sequenced: every search takes a generation
//! ticket, and its results are written only if no newer search or reset has
//! started since. A stale response is still returned to its caller.

use std::sync::atomic::{AtomicU64, Ordering};

use docsearch_client::{DocumentId, DocumentText, NormalizedResult, SearchRequest, SearchService};

use crate::error::Result;
use crate::store::ResultStore;

/// Whether a completed search was written to the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Applied {
    /// Results replaced the store contents.
    Stored,
    /// A newer search or a reset started first; the store was left alone.
    Superseded,
}

/// Outcome of [`SearchSession::search`].
#[derive(Debug, Clone, PartialEq)]
pub struct SearchOutcome {
    /// The normalized response, returned even when superseded.
    pub result: NormalizedResult,
    /// Whether `result.results` reached the store.
    pub applied: Applied,
}

/// Search session state for one running UI.
#[derive(Debug)]
pub struct SearchSession<S> {
    service: S,
    store: ResultStore,
    generation: AtomicU64,
}

impl<S: SearchService> SearchSession<S> {
    /// Start a session with a fresh, empty store.
    pub fn new(service: S) -> Self {
        Self::with_store(service, ResultStore::new())
    }

    /// Start a session around an existing store handle.
    pub fn with_store(service: S, store: ResultStore) -> Self {
        Self {
            service,
            store,
            generation: AtomicU64::new(0),
        }
    }

    /// The store UI consumers read from.
    pub fn store(&self) -> &ResultStore {
        &self.store
    }

    /// The backend service this session searches through.
    pub fn service(&self) -> &S {
        &self.service
    }

    /// Run a search and, unless superseded, store its `results`.
    ///
    /// # Errors
    ///
    /// Propagates the service error untouched; the store is not modified.
    pub async fn search(&self, query: &str, mode: &str, ranking: &str) -> Result<SearchOutcome> {
        self.search_request(&SearchRequest::new(query, mode, ranking))
            .await
    }

    /// [`search`](Self::search) for a prepared request.
    ///
    /// # Errors
    ///
    /// Propagates the service error untouched; the store is not modified.
    pub async fn search_request(&self, request: &SearchRequest) -> Result<SearchOutcome> {
        let ticket = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        let result = self.service.search_request(request).await?;

        let applied = if self.generation.load(Ordering::SeqCst) == ticket {
            self.store.set_results(result.results.clone());
            Applied::Stored
        } else {
            tracing::debug!(ticket, "discarding superseded search response");
            Applied::Superseded
        };
        Ok(SearchOutcome { result, applied })
    }

    /// Fetch full text for a document the user opened.
    ///
    /// # Errors
    ///
    /// Propagates the service error untouched.
    pub async fn open_document(&self, id: DocumentId) -> Result<DocumentText> {
        Ok(self.service.get_document_text(id).await?)
    }

    /// Clear the store and invalidate any search still in flight.
    pub fn reset(&self) {
        self.generation.fetch_add(1, Ordering::SeqCst);
        self.store.clear_results();
    }
}
