//! Core types for search requests, hits, and normalized result sets.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Backend-assigned document identifier.
pub type DocumentId = u64;

/// A single search hit returned by the backend.
///
/// Decoding never fails for a JSON object. A known field whose value has an
/// unexpected type (a string `id`, say) is left as `None` and its raw value
/// stays in `extra`, next to any fields this type does not know about, so
/// re-encoding a hit gives back the object the backend sent. A hit without a
/// string title has an empty `title`, which is omitted when encoding.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "serde_json::Map<String, serde_json::Value>")]
pub struct DocumentMeta {
    /// Absent until the backend has resolved the document.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<DocumentId>,
    /// Document title.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub title: String,
    /// Author, when known.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    /// Short excerpt around the match.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub snippet: Option<String>,
    /// Backend relevance score (higher is better), kept as the number sent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score: Option<serde_json::Number>,
    /// Unrecognized or mistyped backend fields, preserved verbatim.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl DocumentMeta {
    /// Create a hit carrying only a title.
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            id: None,
            title: title.into(),
            author: None,
            snippet: None,
            score: None,
            extra: serde_json::Map::new(),
        }
    }

    /// The score as a float, for sorting or display.
    pub fn score_f64(&self) -> Option<f64> {
        self.score.as_ref().and_then(serde_json::Number::as_f64)
    }
}

impl From<serde_json::Map<String, serde_json::Value>> for DocumentMeta {
    fn from(mut fields: serde_json::Map<String, serde_json::Value>) -> Self {
        let id = take_field(&mut fields, "id", serde_json::Value::as_u64);
        let title = take_field(&mut fields, "title", owned_str).unwrap_or_default();
        let author = take_field(&mut fields, "author", owned_str);
        let snippet = take_field(&mut fields, "snippet", owned_str);
        let score = take_field(&mut fields, "score", |v| match v {
            serde_json::Value::Number(n) => Some(n.clone()),
            _ => None,
        });
        Self {
            id,
            title,
            author,
            snippet,
            score,
            extra: fields,
        }
    }
}

/// Remove `key` from `fields` only if `convert` accepts its value.
fn take_field<T>(
    fields: &mut serde_json::Map<String, serde_json::Value>,
    key: &str,
    convert: impl Fn(&serde_json::Value) -> Option<T>,
) -> Option<T> {
    let value = convert(fields.get(key)?)?;
    fields.remove(key);
    Some(value)
}

fn owned_str(value: &serde_json::Value) -> Option<String> {
    value.as_str().map(str::to_owned)
}

/// How the backend should match the query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchMode {
    /// Literal/term-based matching.
    #[default]
    Keyword,
    /// Regular-expression matching.
    Pattern,
}

impl SearchMode {
    /// Parse the mode string used at the UI boundary.
    ///
    /// Only the literal `"regex"` selects [`SearchMode::Pattern`]; every other
    /// value, including unknown ones, falls back to [`SearchMode::Keyword`].
    pub fn from_mode_str(mode: &str) -> Self {
        if mode == "regex" {
            Self::Pattern
        } else {
            Self::Keyword
        }
    }

    /// The discriminator the unified `/search` endpoint expects in `type`.
    pub fn wire_type(&self) -> &'static str {
        match self {
            Self::Keyword => "basic",
            Self::Pattern => "regex",
        }
    }

    /// Human-readable name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Keyword => "keyword",
            Self::Pattern => "pattern",
        }
    }
}

impl fmt::Display for SearchMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A single search call, built fresh per invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    /// Query text, forwarded as-is (the backend validates it).
    pub query: String,
    /// Matching mode.
    pub mode: SearchMode,
    /// Ranking strategy identifier, opaque to this crate.
    pub ranking: String,
}

impl SearchRequest {
    /// Build a request from the raw boundary strings.
    pub fn new(query: impl Into<String>, mode: &str, ranking: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            mode: SearchMode::from_mode_str(mode),
            ranking: ranking.into(),
        }
    }
}

/// Canonical search result shape consumed by UI state.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NormalizedResult {
    /// Matching documents in backend order.
    pub results: Vec<DocumentMeta>,
    /// Related documents suggested by the backend; empty when none were sent.
    pub recommendations: Vec<DocumentMeta>,
}

impl NormalizedResult {
    /// True when neither list has entries.
    pub fn is_empty(&self) -> bool {
        self.results.is_empty() && self.recommendations.is_empty()
    }
}

/// Full document body returned by the document text endpoint.
///
/// The shape is backend-defined and kept exactly as received.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DocumentText(pub serde_json::Value);

impl DocumentText {
    /// Borrow the raw body.
    pub fn as_value(&self) -> &serde_json::Value {
        &self.0
    }

    /// Consume into the raw body.
    pub fn into_value(self) -> serde_json::Value {
        self.0
    }

    /// The `text` field, when the backend sends one as a string.
    pub fn text(&self) -> Option<&str> {
        self.0.get("text").and_then(serde_json::Value::as_str)
    }
}
