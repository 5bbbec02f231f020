//! Search dispatcher: one POST per search, response normalized on the way back.
//!
//! # Pipeline
//!
//! 1. The active [`RequestPolicy`](crate::contract::RequestPolicy) builds the
//!    endpoint URL and JSON body from the [`SearchRequest`]
//! 2. A single POST is sent; there is no retry and no result caching
//! 3. Transport failures and non-success statuses become
//!    [`ClientError::SearchRequest`]
//! 4. The body goes through [`decode_payload`] regardless of its shape

use crate::client::SearchClient;
use crate::error::{ClientError, Result, TransportError};
use crate::normalize::decode_payload;
use crate::types::{NormalizedResult, SearchRequest};

impl SearchClient {
    /// Send `request` to the backend and normalize the answer.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::SearchRequest`] if the request cannot be sent,
    /// the backend answers with a non-success status, or the body cannot be
    /// read. Returns [`ClientError::MalformedResponse`] if the body is not
    /// structured data.
    pub async fn dispatch(&self, request: &SearchRequest) -> Result<NormalizedResult> {
        let outbound = self.policy.build(self.config.trimmed_base_url(), request);
        tracing::trace!(query = %request.query, "search query");
        tracing::debug!(
            url = %outbound.url,
            mode = %request.mode,
            ranking = %request.ranking,
            policy = self.policy.name(),
            "dispatching search"
        );

        let response = self
            .http
            .post(&outbound.url)
            .json(&outbound.body)
            .send()
            .await
            .map_err(|e| {
                tracing::warn!(url = %outbound.url, error = %e, "search request failed");
                ClientError::SearchRequest(TransportError::Http(e))
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::warn!(url = %outbound.url, status = status.as_u16(), "search rejected by backend");
            return Err(ClientError::SearchRequest(TransportError::Status {
                status: status.as_u16(),
                body,
            }));
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| ClientError::SearchRequest(TransportError::Http(e)))?;
        let normalized = decode_payload(&bytes)?;
        tracing::debug!(
            results = normalized.results.len(),
            recommendations = normalized.recommendations.len(),
            "search normalized"
        );
        Ok(normalized)
    }
}
