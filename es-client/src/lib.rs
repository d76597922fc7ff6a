//! Elasticsearch collaborator: query compilation, transport and wire types.
//!
//! The rest of the workspace treats this crate as an opaque, read-only
//! query executor. It never issues writes, carries no retry policy and
//! imposes no deadline beyond the transport's own timeout behavior.

pub mod client;
pub mod config;
pub mod errors;
pub mod query;
pub mod response;

pub use client::EsClient;
pub use config::EsConfig;
pub use errors::{EsError, QueryError};
pub use query::{QueryRequest, compile};
pub use response::{GetResponse, HighlightMap, RawHit, SearchBody};
