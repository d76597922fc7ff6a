//! Per-hit summarization: one raw hit into a `{title, description}` pair.

use chrono::{DateTime, Utc};
use es_client::query::RESULT_DESCRIPTION_LENGTH;
use es_client::response::{FieldValues, RawHit, Source};
use serde::Serialize;
use serde_json::{Map, Value};
use tracing::trace;

use crate::escape::{html_escape, truncate_chars};
use crate::highlight::HighlightSource;

/// Browser-ready projection of one hit.
#[derive(Debug, Serialize)]
pub struct Summary {
    pub hash: String,
    /// Never empty: falls back to the (escaped) identifier.
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub doc_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<u64>,
    #[serde(rename = "first-seen", skip_serializing_if = "Option::is_none")]
    pub first_seen: Option<DateTime<Utc>>,
    #[serde(rename = "last-seen", skip_serializing_if = "Option::is_none")]
    pub last_seen: Option<DateTime<Utc>>,
}

/// Normalizes one raw hit into a [`Summary`].
pub fn summarize(hit: &RawHit) -> Summary {
    trace!(hash = %hit.id, "summarize");
    Summary {
        hash: hit.id.clone(),
        title: title(hit),
        description: description(hit),
        doc_type: hit.doc_type.clone(),
        size: hit.source.size,
        first_seen: hit.source.first_seen,
        last_seen: hit.source.last_seen,
    }
}

/// Highlights take preference: they prove query relevance and arrive
/// pre-escaped by the engine. Static candidates are escaped here.
fn title(hit: &RawHit) -> String {
    match HighlightSource::for_title(&hit.highlight) {
        HighlightSource::Title(fragment) | HighlightSource::ReferenceName(fragment) => {
            return fragment;
        }
        _ => {}
    }

    match longest_candidate(&hit.source) {
        Some(candidate) => html_escape(candidate),
        None => html_escape(&hit.id),
    }
}

fn description(hit: &RawHit) -> Option<String> {
    match HighlightSource::for_description(&hit.highlight) {
        HighlightSource::Content(fragment) => return Some(fragment),
        HighlightSource::ReferenceName(fragment) | HighlightSource::ReferenceHash(fragment) => {
            return Some(format!("Links to &ldquo;{fragment}&rdquo;"));
        }
        _ => {}
    }

    let metadata = hit.source.metadata.as_ref()?;
    let raw = first_metadata_value(metadata, "description")?;
    Some(html_escape(&truncate_chars(raw, RESULT_DESCRIPTION_LENGTH)))
}

/// Picks the longest static title candidate, measured in characters, not
/// bytes; exact-length ties keep the earliest candidate in collection
/// order.
fn longest_candidate(source: &Source) -> Option<&str> {
    let mut best: Option<(&str, usize)> = None;
    for candidate in title_candidates(source) {
        let length = candidate.chars().count();
        match best {
            Some((_, best_length)) if length <= best_length => {}
            _ => best = Some((candidate, length)),
        }
    }
    best.map(|(candidate, _)| candidate)
}

/// Collection order fixes tie-breaking: `metadata.title`, then
/// `metadata.name`, then each reference name.
fn title_candidates(source: &Source) -> Vec<&str> {
    let mut candidates = Vec::new();
    if let Some(metadata) = &source.metadata {
        for key in ["title", "name"] {
            if let Some(value) = first_metadata_value(metadata, key) {
                candidates.push(value);
            }
        }
    }
    for reference in &source.references {
        if let Some(name) = reference.name.as_ref().and_then(FieldValues::first) {
            if !name.is_empty() {
                candidates.push(name);
            }
        }
    }
    candidates
}

/// Extractor metadata indexes values as strings or arrays of strings;
/// empty strings count as absent.
fn first_metadata_value<'a>(metadata: &'a Map<String, Value>, key: &str) -> Option<&'a str> {
    let value = match metadata.get(key)? {
        Value::String(s) => Some(s.as_str()),
        Value::Array(values) => values.first().and_then(Value::as_str),
        _ => None,
    };
    value.filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn hit(value: Value) -> RawHit {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn highlighted_title_is_used_verbatim() {
        let hit = hit(json!({
            "_id": "QmYwAPJzv5CZsnA625s3Xf2nemtYgPpHdWEz79ojWnPbdG",
            "_source": {"metadata": {"title": ["Static & Unescaped"]}},
            "highlight": {"metadata.title": ["The <em>Moon</em> &amp; Back"]}
        }));
        // No re-escaping of the pre-escaped fragment.
        assert_eq!(summarize(&hit).title, "The <em>Moon</em> &amp; Back");
    }

    #[test]
    fn highlighted_reference_name_beats_static_candidates() {
        let hit = hit(json!({
            "_id": "Qmfoo",
            "_source": {"metadata": {"title": ["A very long static title"]}},
            "highlight": {"references.name": ["<em>apollo</em>.txt"]}
        }));
        assert_eq!(summarize(&hit).title, "<em>apollo</em>.txt");
    }

    #[test]
    fn longest_static_candidate_wins() {
        let hit = hit(json!({
            "_id": "Qmfoo",
            "_source": {
                "metadata": {"title": ["short"], "name": ["a much longer name"]},
                "references": [{"name": ["mid-length"]}]
            }
        }));
        assert_eq!(summarize(&hit).title, "a much longer name");
    }

    #[test]
    fn longest_counts_characters_not_bytes() {
        // Five accented characters are ten bytes; six ASCII characters
        // still make the longer title.
        let hit = hit(json!({
            "_id": "Qmfoo",
            "_source": {"metadata": {"title": ["ééééé"], "name": ["abcdef"]}}
        }));
        assert_eq!(summarize(&hit).title, "abcdef");
    }

    #[test]
    fn equal_length_tie_keeps_priority_order() {
        let hit = hit(json!({
            "_id": "Qmfoo",
            "_source": {
                "metadata": {"title": ["aaaaa"], "name": ["bbbbb"]},
                "references": [{"name": ["ccccc"]}]
            }
        }));
        assert_eq!(summarize(&hit).title, "aaaaa");
    }

    #[test]
    fn static_candidates_are_escaped() {
        let hit = hit(json!({
            "_id": "Qmfoo",
            "_source": {"metadata": {"title": ["Fish & Chips"]}}
        }));
        assert_eq!(summarize(&hit).title, "Fish &amp; Chips");
    }

    #[test]
    fn title_falls_back_to_escaped_identifier() {
        let hit = hit(json!({
            "_id": "Qm<odd>",
            "_source": {}
        }));
        assert_eq!(summarize(&hit).title, "Qm&lt;odd&gt;");
    }

    #[test]
    fn reference_names_without_metadata_still_title() {
        let hit = hit(json!({
            "_id": "Qmfoo",
            "_source": {"references": [{"name": "only-name.pdf"}, {"hash": "Qmbar"}]}
        }));
        assert_eq!(summarize(&hit).title, "only-name.pdf");
    }

    #[test]
    fn content_highlight_becomes_the_description() {
        let hit = hit(json!({
            "_id": "Qmfoo",
            "_source": {"metadata": {"description": ["static description"]}},
            "highlight": {"content": ["matched <em>context</em>"]}
        }));
        assert_eq!(
            summarize(&hit).description.as_deref(),
            Some("matched <em>context</em>")
        );
    }

    #[test]
    fn link_name_highlight_renders_as_links_to() {
        let hit = hit(json!({
            "_id": "Qmfoo",
            "_source": {},
            "highlight": {"links.Name": ["<em>whitepaper</em>.pdf"]}
        }));
        assert_eq!(
            summarize(&hit).description.as_deref(),
            Some("Links to &ldquo;<em>whitepaper</em>.pdf&rdquo;")
        );
    }

    #[test]
    fn link_hash_highlight_renders_the_same_way() {
        let hit = hit(json!({
            "_id": "Qmfoo",
            "_source": {},
            "highlight": {"links.Hash": ["<em>QmTarget</em>"]}
        }));
        assert_eq!(
            summarize(&hit).description.as_deref(),
            Some("Links to &ldquo;<em>QmTarget</em>&rdquo;")
        );
    }

    #[test]
    fn long_description_is_truncated_at_the_budget() {
        let long = "x".repeat(300);
        let hit = hit(json!({
            "_id": "Qmfoo",
            "_source": {"metadata": {"description": [long]}}
        }));
        let description = summarize(&hit).description.unwrap();
        assert_eq!(description, format!("{}...", "x".repeat(250)));
    }

    #[test]
    fn short_description_is_kept_and_escaped() {
        let hit = hit(json!({
            "_id": "Qmfoo",
            "_source": {"metadata": {"description": ["Tom & Jerry"]}}
        }));
        assert_eq!(
            summarize(&hit).description.as_deref(),
            Some("Tom &amp; Jerry")
        );
    }

    #[test]
    fn empty_or_non_string_description_stays_absent() {
        let empty = hit(json!({
            "_id": "Qmfoo",
            "_source": {"metadata": {"description": [""]}}
        }));
        assert!(summarize(&empty).description.is_none());

        let numeric = hit(json!({
            "_id": "Qmfoo",
            "_source": {"metadata": {"description": 42}}
        }));
        assert!(summarize(&numeric).description.is_none());
    }

    #[test]
    fn no_candidates_means_no_description() {
        let hit = hit(json!({"_id": "Qmfoo", "_source": {}}));
        let summary = summarize(&hit);
        assert!(summary.description.is_none());
        // And the serialized form omits the field rather than writing null.
        let serialized = serde_json::to_value(&summary).unwrap();
        assert!(serialized.get("description").is_none());
    }

    #[test]
    fn passthrough_fields_survive() {
        let hit = hit(json!({
            "_id": "Qmfoo",
            "_type": "file",
            "_source": {
                "size": 1234,
                "first-seen": "2017-07-02T21:30:00Z",
                "last-seen": "2018-01-01T00:00:00Z"
            }
        }));
        let summary = summarize(&hit);
        assert_eq!(summary.doc_type.as_deref(), Some("file"));
        assert_eq!(summary.size, Some(1234));
        assert!(summary.first_seen.is_some());
        assert!(summary.last_seen.is_some());
    }
}
