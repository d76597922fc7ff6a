//! Unified error types for the crate.

use thiserror::Error;

/// Top-level error for engine operations.
#[derive(Debug, Error)]
pub enum EsError {
    /// Transport-level failures (connect, TLS, body read).
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// Malformed JSON in an engine response.
    #[error("parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// Invalid or unsupported configuration.
    #[error("config error: {0}")]
    Config(String),

    /// The engine has no document under the requested identifier.
    #[error("document not found: {id}")]
    NotFound { id: String },

    /// Non-success status from the engine; preserved so the HTTP layer
    /// can pass it through.
    #[error("engine returned {status}: {reason}")]
    Upstream { status: u16, reason: String },
}

/// Rejections raised while compiling a query, before anything is
/// dispatched to the engine.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum QueryError {
    /// Deep paging is refused to bound engine load.
    #[error("paging not allowed beyond page {max}")]
    PageBeyondLimit { page: u32, max: u32 },
}
