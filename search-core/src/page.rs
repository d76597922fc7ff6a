//! Pagination arithmetic for result batches.

use serde::Serialize;

/// Page metadata attached once per batch of results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PageInfo {
    pub page_size: u32,
    pub page_count: u64,
}

/// Computes page metadata from a total hit count.
///
/// `page_count` depends only on the total, never on how many summaries
/// the current page actually holds.
pub fn annotate(total: u64, page_size: u32) -> PageInfo {
    let page_count = if page_size == 0 {
        0
    } else {
        total.div_ceil(u64::from(page_size))
    };
    PageInfo {
        page_size,
        page_count,
    }
}
