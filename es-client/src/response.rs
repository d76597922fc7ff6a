//! Wire types for engine responses.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde_json::{Map, Value};

/// Highlight map: field path to ordered, pre-escaped fragments.
pub type HighlightMap = HashMap<String, Vec<String>>;

/// Top-level search response body.
#[derive(Debug, Deserialize)]
pub struct SearchBody {
    pub hits: HitsEnvelope,
}

/// The `hits` envelope around a page of raw hits.
#[derive(Debug, Deserialize)]
pub struct HitsEnvelope {
    pub total: TotalHits,
    #[serde(default)]
    pub hits: Vec<RawHit>,
}

/// Total hit count: a bare number up to ES 6, a `{value, relation}`
/// object from ES 7 on.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum TotalHits {
    Legacy(u64),
    Tracked { value: u64 },
}

impl TotalHits {
    pub fn value(&self) -> u64 {
        match self {
            TotalHits::Legacy(value) | TotalHits::Tracked { value } => *value,
        }
    }
}

/// One raw hit as returned by the engine.
#[derive(Debug, Deserialize)]
pub struct RawHit {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "_type", default)]
    pub doc_type: Option<String>,
    #[serde(rename = "_source", default)]
    pub source: Source,
    /// Absent entirely when nothing matched inside indexed text.
    #[serde(default)]
    pub highlight: HighlightMap,
}

/// The projected `_source` subset requested by the query compiler.
///
/// `metadata` is kept as a raw map: it is extractor output with an open
/// schema, and summarization only ever reads a few well-known keys.
#[derive(Debug, Default, Deserialize)]
pub struct Source {
    #[serde(default)]
    pub metadata: Option<Map<String, Value>>,
    /// Documents without inbound links simply have no references.
    #[serde(default)]
    pub references: Vec<Reference>,
    #[serde(default)]
    pub size: Option<u64>,
    #[serde(rename = "first-seen", default)]
    pub first_seen: Option<DateTime<Utc>>,
    #[serde(rename = "last-seen", default)]
    pub last_seen: Option<DateTime<Utc>>,
}

/// A link from a referring document to this one.
#[derive(Debug, Deserialize)]
pub struct Reference {
    #[serde(default)]
    pub name: Option<FieldValues>,
}

/// A field indexed as either a single string or an array of strings.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum FieldValues {
    One(String),
    Many(Vec<String>),
}

impl FieldValues {
    /// First value, if any.
    pub fn first(&self) -> Option<&str> {
        match self {
            FieldValues::One(value) => Some(value.as_str()),
            FieldValues::Many(values) => values.first().map(String::as_str),
        }
    }
}

/// A single document fetched by identifier.
#[derive(Debug, Deserialize)]
pub struct GetResponse {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "_version", default)]
    pub version: u64,
    #[serde(rename = "_type", default)]
    pub doc_type: Option<String>,
    #[serde(rename = "_source", default)]
    pub source: Map<String, Value>,
}
