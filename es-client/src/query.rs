//! Query compilation: free text plus pagination into an engine request.

use serde_json::{Value, json};

use crate::errors::QueryError;

/// Character budget shared by highlight fragments and description
/// truncation in list views.
pub const RESULT_DESCRIPTION_LENGTH: usize = 250;

/// Source fields needed by downstream summarization. The full document is
/// never transferred.
const SOURCE_FIELDS: [&str; 7] = [
    "metadata.title",
    "metadata.name",
    "metadata.description",
    "references",
    "size",
    "last-seen",
    "first-seen",
];

/// A compiled search request: query body plus pagination window.
#[derive(Debug, Clone)]
pub struct QueryRequest {
    /// Engine query body (query, highlight and source projection).
    pub body: Value,
    /// Offset of the first hit, `page * page_size`.
    pub from: u64,
    /// Number of hits requested.
    pub size: u64,
}

/// Compiles a free-text query with pagination into a [`QueryRequest`].
///
/// Terms combine conjunctively: every supplied term must match for a
/// document to be a candidate. Highlighting is requested for every field,
/// one HTML-escaped fragment each, capped at
/// [`RESULT_DESCRIPTION_LENGTH`] characters.
///
/// # Errors
/// Returns [`QueryError::PageBeyondLimit`] when `page` exceeds
/// `max_page`; the guard runs before anything reaches the engine.
pub fn compile(
    text: &str,
    page: u32,
    page_size: u32,
    max_page: u32,
) -> Result<QueryRequest, QueryError> {
    if page > max_page {
        return Err(QueryError::PageBeyondLimit {
            page,
            max: max_page,
        });
    }

    let body = json!({
        "query": {
            "query_string": {
                "query": text,
                "default_operator": "AND"
            }
        },
        "highlight": {
            "order": "score",
            "require_field_match": false,
            "encoder": "html",
            "fields": {
                "*": {
                    "number_of_fragments": 1,
                    "fragment_size": RESULT_DESCRIPTION_LENGTH
                }
            }
        },
        "_source": SOURCE_FIELDS
    });

    Ok(QueryRequest {
        body,
        from: u64::from(page) * u64::from(page_size),
        size: u64::from(page_size),
    })
}
