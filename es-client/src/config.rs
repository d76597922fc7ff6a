//! Engine connection configuration.

use std::env;

use crate::errors::EsError;

/// Connection settings for the Elasticsearch backend.
#[derive(Clone, Debug)]
pub struct EsConfig {
    /// HTTP endpoint, e.g. `http://localhost:9200`.
    pub url: String,
    /// Index holding the crawled documents.
    pub index: String,
}

impl EsConfig {
    /// Creates a config for a given endpoint and index name.
    pub fn new(url: impl Into<String>, index: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            index: index.into(),
        }
    }

    /// Loads the config from `ES_URL` / `ES_INDEX`, with local defaults.
    pub fn from_env() -> Self {
        Self {
            url: env::var("ES_URL").unwrap_or_else(|_| "http://localhost:9200".into()),
            index: env::var("ES_INDEX").unwrap_or_else(|_| "ipfs".into()),
        }
    }

    /// Validates config values.
    pub fn validate(&self) -> Result<(), EsError> {
        if self.url.trim().is_empty() {
            return Err(EsError::Config("url is empty".into()));
        }
        if self.index.trim().is_empty() {
            return Err(EsError::Config("index is empty".into()));
        }
        Ok(())
    }
}
