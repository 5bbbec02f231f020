//! Response normalizer: reshape any backend search payload into a
//! [`NormalizedResult`].
//!
//! The backend has answered searches in two shapes over its revisions:
//!
//! - a bare list of hits (legacy), and
//! - an object with `results` plus `recommendations` (or the older `recs`).
//!
//! [`SearchPayload::from_value`] inspects the shape once, at the boundary,
//! and [`normalize`] turns the decoded variant into the canonical shape.
//! Hits are never reordered, deduplicated, or rewritten here.

use serde_json::Value;

use crate::error::{ClientError, Result};
use crate::types::{DocumentMeta, NormalizedResult};

/// Decoded backend search payload.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchPayload {
    /// A bare ordered list of hits.
    Sequence(Vec<DocumentMeta>),
    /// An object with optional named lists.
    Structured {
        results: Option<Vec<DocumentMeta>>,
        recommendations: Option<Vec<DocumentMeta>>,
        recs: Option<Vec<DocumentMeta>>,
    },
    /// `null`, a scalar, or an object without any recognized field.
    Empty,
}

impl SearchPayload {
    /// Classify a parsed JSON body.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::MalformedResponse`] when a list entry is not a
    /// JSON object.
    pub fn from_value(value: Value) -> Result<Self> {
        match value {
            Value::Array(items) => Ok(Self::Sequence(decode_hits(items, "payload")?)),
            Value::Object(mut obj) => {
                let results = take_list(&mut obj, "results")?;
                let recommendations = take_list(&mut obj, "recommendations")?;
                let recs = take_list(&mut obj, "recs")?;
                if results.is_none() && recommendations.is_none() && recs.is_none() {
                    tracing::debug!("search payload object has no recognized fields");
                    return Ok(Self::Empty);
                }
                Ok(Self::Structured {
                    results,
                    recommendations,
                    recs,
                })
            }
            Value::Null => Ok(Self::Empty),
            other => {
                tracing::debug!(kind = json_kind(&other), "scalar search payload");
                Ok(Self::Empty)
            }
        }
    }
}

/// Reshape a decoded payload into the canonical result.
///
/// `recommendations` takes priority over the legacy `recs` field.
pub fn normalize(payload: SearchPayload) -> NormalizedResult {
    match payload {
        SearchPayload::Sequence(results) => NormalizedResult {
            results,
            recommendations: Vec::new(),
        },
        SearchPayload::Structured {
            results,
            recommendations,
            recs,
        } => NormalizedResult {
            results: results.unwrap_or_default(),
            recommendations: recommendations.or(recs).unwrap_or_default(),
        },
        SearchPayload::Empty => NormalizedResult::default(),
    }
}

/// Parse a raw response body and normalize it.
///
/// An empty body is treated like `null`.
///
/// # Errors
///
/// Returns [`ClientError::MalformedResponse`] if the body is not JSON or
/// carries list entries that are not documents.
pub fn decode_payload(body: &[u8]) -> Result<NormalizedResult> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(NormalizedResult::default());
    }
    let value: Value = serde_json::from_slice(body)
        .map_err(|e| ClientError::MalformedResponse(format!("search body is not JSON: {e}")))?;
    Ok(normalize(SearchPayload::from_value(value)?))
}

/// Remove `key` from the object and decode it as a hit list.
///
/// A missing key, `null`, or a non-list value counts as absent.
fn take_list(
    obj: &mut serde_json::Map<String, Value>,
    key: &str,
) -> Result<Option<Vec<DocumentMeta>>> {
    match obj.remove(key) {
        Some(Value::Array(items)) => decode_hits(items, key).map(Some),
        Some(Value::Null) | None => Ok(None),
        Some(other) => {
            tracing::debug!(field = key, kind = json_kind(&other), "ignoring non-list field");
            Ok(None)
        }
    }
}

/// Entries must be JSON objects; field types inside them are not enforced.
fn decode_hits(items: Vec<Value>, field: &str) -> Result<Vec<DocumentMeta>> {
    items
        .into_iter()
        .enumerate()
        .map(|(idx, item)| match item {
            Value::Object(fields) => Ok(DocumentMeta::from(fields)),
            other => Err(ClientError::MalformedResponse(format!(
                "{field}[{idx}] is not a document: found {}",
                json_kind(&other)
            ))),
        })
        .collect()
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn hits(titles: &[&str]) -> Vec<DocumentMeta> {
        titles.iter().map(|t| DocumentMeta::titled(*t)).collect()
    }

    fn run(value: Value) -> NormalizedResult {
        normalize(SearchPayload::from_value(value).expect("decodes"))
    }

    #[test]
    fn bare_sequence_becomes_results() {
        let out = run(json!([{"title": "a"}, {"title": "b"}]));
        assert_eq!(out.results, hits(&["a", "b"]));
        assert!(out.recommendations.is_empty());
    }

    #[test]
    fn empty_sequence() {
        assert_eq!(run(json!([])), NormalizedResult::default());
    }

    #[test]
    fn results_and_recommendations() {
        let out = run(json!({
            "results": [{"title": "r1"}],
            "recommendations": [{"title": "c1"}, {"title": "c2"}]
        }));
        assert_eq!(out.results, hits(&["r1"]));
        assert_eq!(out.recommendations, hits(&["c1", "c2"]));
    }

    #[test]
    fn legacy_recs_field() {
        let out = run(json!({"results": [{"title": "r1"}], "recs": [{"title": "old"}]}));
        assert_eq!(out.results, hits(&["r1"]));
        assert_eq!(out.recommendations, hits(&["old"]));
    }

    #[test]
    fn recommendations_beat_recs() {
        let out = run(json!({
            "results": [],
            "recommendations": [{"title": "new"}],
            "recs": [{"title": "old"}]
        }));
        assert_eq!(out.recommendations, hits(&["new"]));
    }

    #[test]
    fn empty_recommendations_still_beat_recs() {
        let out = run(json!({"recommendations": [], "recs": [{"title": "old"}]}));
        assert!(out.recommendations.is_empty());
    }

    #[test]
    fn null_recommendations_fall_back_to_recs() {
        let out = run(json!({"recommendations": null, "recs": [{"title": "old"}]}));
        assert_eq!(out.recommendations, hits(&["old"]));
    }

    #[test]
    fn recommendations_without_results() {
        let out = run(json!({"recs": [{"title": "only"}]}));
        assert!(out.results.is_empty());
        assert_eq!(out.recommendations, hits(&["only"]));
    }

    #[test]
    fn null_and_empty_object_normalize_to_empty() {
        assert_eq!(run(Value::Null), NormalizedResult::default());
        assert_eq!(run(json!({})), NormalizedResult::default());
        assert_eq!(SearchPayload::from_value(json!({})).ok(), Some(SearchPayload::Empty));
    }

    #[test]
    fn unrecognized_shapes_normalize_to_empty() {
        assert_eq!(run(json!({"hits": [{"title": "x"}]})), NormalizedResult::default());
        assert_eq!(run(json!("nope")), NormalizedResult::default());
        assert_eq!(run(json!(17)), NormalizedResult::default());
        assert_eq!(run(json!({"results": "not a list"})), NormalizedResult::default());
    }

    #[test]
    fn order_and_duplicates_are_preserved() {
        let out = run(json!([
            {"title": "z", "score": 0.1},
            {"title": "a", "score": 0.9},
            {"title": "z", "score": 0.1}
        ]));
        let titles: Vec<&str> = out.results.iter().map(|d| d.title.as_str()).collect();
        assert_eq!(titles, ["z", "a", "z"]);
    }

    #[test]
    fn non_object_entry_is_malformed() {
        let err = SearchPayload::from_value(json!([{"title": "ok"}, 5])).unwrap_err();
        assert_eq!(err.code(), "MALFORMED_RESPONSE");
        assert!(err.to_string().contains("payload[1]"));

        let err = SearchPayload::from_value(json!({"recs": ["loose string"]})).unwrap_err();
        assert!(err.to_string().contains("recs[0]"));
    }

    #[test]
    fn mistyped_hit_fields_keep_every_hit() {
        let out = decode_payload(
            br#"{"results":[{"title":"ok"},{"id":"doc-7","title":"x"},{"title":"y","score":"high"}]}"#,
        )
        .expect("decodes");
        let titles: Vec<&str> = out.results.iter().map(|d| d.title.as_str()).collect();
        assert_eq!(titles, ["ok", "x", "y"]);
        assert_eq!(out.results[1].id, None);
        assert_eq!(out.results[1].extra.get("id"), Some(&json!("doc-7")));
        assert_eq!(out.results[2].score, None);
        assert_eq!(out.results[2].extra.get("score"), Some(&json!("high")));
    }

    #[test]
    fn hit_without_title_is_kept() {
        let out = run(json!({"recs": [{"id": 3}]}));
        assert_eq!(out.recommendations.len(), 1);
        assert_eq!(out.recommendations[0].id, Some(3));
        assert!(out.recommendations[0].title.is_empty());
    }

    #[test]
    fn decode_payload_parses_bytes() {
        let out = decode_payload(br#"[{"title":"Invoice #1"}]"#).expect("decodes");
        assert_eq!(out.results, hits(&["Invoice #1"]));
        assert!(out.recommendations.is_empty());
    }

    #[test]
    fn decode_payload_blank_body_is_empty() {
        assert_eq!(decode_payload(b"").expect("ok"), NormalizedResult::default());
        assert_eq!(decode_payload(b"  \n").expect("ok"), NormalizedResult::default());
        assert_eq!(decode_payload(b"null").expect("ok"), NormalizedResult::default());
    }

    #[test]
    fn decode_payload_rejects_non_json() {
        let err = decode_payload(b"<html>502 Bad Gateway</html>").unwrap_err();
        assert!(matches!(err, ClientError::MalformedResponse(_)));
    }
}
