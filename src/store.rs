//! Session-scoped holder of the latest search results.
//!
//! A [`ResultStore`] is created when a UI session starts and handed to
//! whatever needs it; there is no global instance. Writes replace the whole
//! sequence at once, so a reader sees either the previous sequence or the
//! new one, never a mix. The lock is only held for the duration of a swap or
//! a clone and never across an `.await`.

use std::sync::{Arc, RwLock};

use docsearch_client::DocumentMeta;

/// Whether the store currently holds any results.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreState {
    /// No results stored.
    Empty,
    /// At least one result stored.
    Populated,
}

/// Cheaply cloneable handle to the current result sequence.
///
/// Clones share the same underlying state.
#[derive(Debug, Clone, Default)]
pub struct ResultStore {
    results: Arc<RwLock<Vec<DocumentMeta>>>,
}

impl ResultStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the stored sequence with `data`. Nothing is merged.
    pub fn set_results(&self, data: Vec<DocumentMeta>) {
        let count = data.len();
        let previous = {
            let mut guard = self.results.write().unwrap_or_else(|e| e.into_inner());
            std::mem::replace(&mut *guard, data)
        };
        tracing::debug!(count, replaced = previous.len(), "result store updated");
    }

    /// Reset the stored sequence to empty.
    pub fn clear_results(&self) {
        self.results
            .write()
            .unwrap_or_else(|e| e.into_inner())
            .clear();
        tracing::debug!("result store cleared");
    }

    /// A copy of the current sequence.
    pub fn get_results(&self) -> Vec<DocumentMeta> {
        self.results
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }

    /// Number of stored results.
    pub fn len(&self) -> usize {
        self.results.read().unwrap_or_else(|e| e.into_inner()).len()
    }

    /// True when no results are stored.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Current [`StoreState`].
    pub fn state(&self) -> StoreState {
        if self.is_empty() {
            StoreState::Empty
        } else {
            StoreState::Populated
        }
    }
}
