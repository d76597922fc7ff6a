pub mod metadata;
pub mod search;
