//! Document fetcher: full text for a single document id.

use crate::client::SearchClient;
use crate::error::{ClientError, Result, TransportError};
use crate::types::{DocumentId, DocumentText};

impl SearchClient {
    /// URL of the document text endpoint for `id`.
    pub fn document_url(&self, id: DocumentId) -> String {
        format!("{}/document_text/{id}", self.config.trimmed_base_url())
    }

    /// GET the full body of document `id`.
    ///
    /// The id is forwarded without any local existence check; the body is
    /// returned exactly as the backend sent it.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::DocumentFetch`] on transport failure or any
    /// non-success status (see [`ClientError::is_not_found`]), and
    /// [`ClientError::MalformedResponse`] if the body is not JSON.
    pub async fn fetch_document(&self, id: DocumentId) -> Result<DocumentText> {
        let url = self.document_url(id);
        tracing::debug!(%url, id, "fetching document text");

        let response = self.http.get(&url).send().await.map_err(|e| {
            tracing::warn!(%url, error = %e, "document request failed");
            ClientError::DocumentFetch(TransportError::Http(e))
        })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::warn!(%url, status = status.as_u16(), "document fetch rejected by backend");
            return Err(ClientError::DocumentFetch(TransportError::Status {
                status: status.as_u16(),
                body,
            }));
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| ClientError::DocumentFetch(TransportError::Http(e)))?;
        serde_json::from_slice(&bytes).map_err(|e| {
            ClientError::MalformedResponse(format!("document {id} body is not JSON: {e}"))
        })
    }
}
