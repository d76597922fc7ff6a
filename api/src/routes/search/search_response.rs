use search_core::Summary;
use serde::Serialize;

/// Response body for `GET /search`.
#[derive(Debug, Serialize)]
pub struct SearchResponse {
    pub hits: Vec<Summary>,
    pub total: u64,
    pub page: u32,
    pub page_size: u32,
    pub page_count: u64,
}
