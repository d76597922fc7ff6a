//! Result normalization for the search API.
//!
//! Everything in this crate is pure: raw engine hits in, browser-ready
//! summaries out. No I/O, no shared state; all values are request-scoped
//! and discarded after serialization.

pub mod cid;
pub mod escape;
pub mod highlight;
pub mod metadata;
pub mod page;
pub mod summarize;

pub use metadata::{MetadataRecord, project};
pub use page::{PageInfo, annotate};
pub use summarize::{Summary, summarize};
