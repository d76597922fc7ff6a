//! Engine transport: one reused HTTP client, search and get-by-id.

use reqwest::StatusCode;
use tracing::{debug, trace};

use crate::config::EsConfig;
use crate::errors::EsError;
use crate::query::QueryRequest;
use crate::response::{GetResponse, SearchBody};

/// Read-only client for the document index.
///
/// Constructed once at startup and shared across requests; the inner
/// `reqwest::Client` pools connections and is safe to share. Queries run
/// to completion or failure, there is no client-side abort.
#[derive(Clone, Debug)]
pub struct EsClient {
    http: reqwest::Client,
    config: EsConfig,
}

impl EsClient {
    /// Builds a client for the configured endpoint and index.
    ///
    /// # Errors
    /// `EsError::Config` on invalid settings, `EsError::Http` when the
    /// transport cannot be constructed.
    pub fn new(config: EsConfig) -> Result<Self, EsError> {
        config.validate()?;
        let http = reqwest::Client::builder().build()?;
        Ok(Self { http, config })
    }

    fn index_url(&self, suffix: &str) -> String {
        format!(
            "{}/{}/{}",
            self.config.url.trim_end_matches('/'),
            self.config.index,
            suffix
        )
    }

    /// Executes a compiled search request and parses the hit envelope.
    ///
    /// # Errors
    /// `EsError::Upstream` for non-success engine statuses (status code
    /// preserved), `EsError::Http` / `EsError::Parse` for transport and
    /// body failures.
    pub async fn search(&self, request: &QueryRequest) -> Result<SearchBody, EsError> {
        let url = self.index_url("_search");
        trace!(
            target: "es_client",
            from = request.from,
            size = request.size,
            "search: dispatch"
        );

        let response = self
            .http
            .post(&url)
            .query(&[("from", request.from), ("size", request.size)])
            .json(&request.body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let reason = response.text().await.unwrap_or_default();
            return Err(EsError::Upstream {
                status: status.as_u16(),
                reason,
            });
        }

        let text = response.text().await?;
        let body: SearchBody = serde_json::from_str(&text)?;

        debug!(
            target: "es_client",
            total = body.hits.total.value(),
            returned = body.hits.hits.len(),
            "search: ok"
        );
        Ok(body)
    }

    /// Fetches one document's stored metadata by identifier.
    ///
    /// Only the `metadata` sub-structure is transferred; the engine still
    /// reports its assigned version and type alongside.
    ///
    /// # Errors
    /// `EsError::NotFound` when the index has no such document, otherwise
    /// as for [`EsClient::search`].
    pub async fn get_metadata(&self, id: &str) -> Result<GetResponse, EsError> {
        let url = self.index_url(&format!("_doc/{id}"));
        trace!(target: "es_client", %id, "get_metadata: dispatch");

        let response = self
            .http
            .get(&url)
            .query(&[("realtime", "false"), ("_source", "metadata")])
            .send()
            .await?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(EsError::NotFound { id: id.to_owned() });
        }
        if !status.is_success() {
            let reason = response.text().await.unwrap_or_default();
            return Err(EsError::Upstream {
                status: status.as_u16(),
                reason,
            });
        }

        let text = response.text().await?;
        let document: GetResponse = serde_json::from_str(&text)?;
        Ok(document)
    }
}
