//! HTTP implementation of [`SearchService`].

use std::fmt;
use std::sync::Arc;

use crate::config::ClientConfig;
use crate::contract::RequestPolicy;
use crate::error::Result;
use crate::http::build_client;
use crate::service::SearchService;
use crate::types::{DocumentId, DocumentText, NormalizedResult, SearchRequest};

/// Talks to the search backend over HTTP.
///
/// Cheap to clone; clones share the connection pool.
#[derive(Clone)]
pub struct SearchClient {
    pub(crate) http: reqwest::Client,
    pub(crate) config: ClientConfig,
    pub(crate) policy: Arc<dyn RequestPolicy>,
}

impl SearchClient {
    /// Create a client using the policy named by `config.contract`.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Config`](crate::ClientError::Config) if the
    /// configuration is invalid or the HTTP client cannot be built.
    pub fn new(config: ClientConfig) -> Result<Self> {
        config.validate()?;
        let http = build_client(&config)?;
        let policy = config.contract.policy();
        tracing::debug!(
            base_url = %config.base_url,
            contract = policy.name(),
            "search client ready"
        );
        Ok(Self {
            http,
            config,
            policy,
        })
    }

    /// Replace the request-building policy.
    pub fn with_policy(mut self, policy: Arc<dyn RequestPolicy>) -> Self {
        self.policy = policy;
        self
    }

    /// The active configuration.
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Name of the active request policy.
    pub fn policy_name(&self) -> &'static str {
        self.policy.name()
    }
}

impl fmt::Debug for SearchClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SearchClient")
            .field("base_url", &self.config.base_url)
            .field("policy", &self.policy.name())
            .finish_non_exhaustive()
    }
}

impl SearchService for SearchClient {
    async fn search_request(&self, request: &SearchRequest) -> Result<NormalizedResult> {
        self.dispatch(request).await
    }

    async fn get_document_text(&self, id: DocumentId) -> Result<DocumentText> {
        self.fetch_document(id).await
    }
}
