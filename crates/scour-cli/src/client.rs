//! REST search-execution client.

use serde::Deserialize;
use tracing::debug;

use scour_query::SearchRequest;

use crate::error::{CliError, Result};

/// Client that posts compiled search requests to a REST search engine.
#[derive(Debug, Clone)]
pub struct SearchClient {
    http: reqwest::Client,
    base_url: String,
}

impl SearchClient {
    /// Creates a client for the given engine base URL.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            http: reqwest::Client::new(),
            base_url,
        }
    }

    /// The engine base URL this client talks to.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// The `_search` endpoint for a request's target collections.
    #[must_use]
    pub fn search_url(&self, request: &SearchRequest) -> String {
        format!("{}/{}/_search", self.base_url, request.collections.join(","))
    }

    /// Executes the request and parses the hit envelope.
    ///
    /// # Errors
    ///
    /// Returns an error if the request cannot be sent, the engine answers
    /// with a non-success status, or the response body cannot be parsed.
    pub async fn search(&self, request: &SearchRequest) -> Result<SearchResponse> {
        let url = self.search_url(request);
        debug!(%url, size = request.result_limit, "executing search");

        let response = self.http.post(&url).json(&request.body()).send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(CliError::Engine {
                status: status.as_u16(),
                body,
            });
        }
        Ok(response.json().await?)
    }
}

/// The portions of the engine's search response that scour reads.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchResponse {
    /// Hit envelope.
    #[serde(default)]
    pub hits: HitsEnvelope,
}

/// Envelope wrapping the ranked hit list.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct HitsEnvelope {
    /// Ranked hits, best first.
    #[serde(default)]
    pub hits: Vec<Hit>,
}

/// One search hit: its source collection and original document fields.
#[derive(Debug, Clone, Deserialize)]
pub struct Hit {
    /// Collection the hit came from.
    #[serde(rename = "_index", default)]
    pub index: String,
    /// The original document.
    #[serde(rename = "_source", default)]
    pub source: serde_json::Value,
}
