use serde::Deserialize;

/// Query-string parameters for `GET /search`.
#[derive(Debug, Deserialize)]
pub struct SearchParams {
    /// Free-text query; required.
    pub q: Option<String>,
    /// Zero-indexed page, defaults to the first.
    pub page: Option<u32>,
}
