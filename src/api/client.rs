//! HTTP client for the Hacker News search endpoint.

use thiserror::Error;

use super::types::SearchPage;

/// Algolia-backed search API used when the config does not override it.
pub const DEFAULT_ENDPOINT: &str = "https://hn.algolia.com/api/v1";

/// Fixed page size sent with every request.
pub const HITS_PER_PAGE: u32 = 10;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),

    #[error("search endpoint returned HTTP {0}")]
    Status(u16),

    #[error("malformed response: {0}")]
    Decode(String),
}

/// Thin wrapper around a reqwest client bound to one endpoint.
#[derive(Debug, Clone)]
pub struct SearchClient {
    http: reqwest::Client,
    endpoint: String,
}

impl SearchClient {
    pub fn new(endpoint: String) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoint: endpoint.trim_end_matches('/').to_string(),
        }
    }

    /// Fetch one page of stories matching `query`.
    pub async fn search(&self, query: &str, page: u32) -> Result<SearchPage, ApiError> {
        let page_param = page.to_string();
        let hits_param = HITS_PER_PAGE.to_string();

        let response = self
            .http
            .get(self.search_url())
            .query(&[
                ("query", query),
                ("page", page_param.as_str()),
                ("hitsPerPage", hits_param.as_str()),
            ])
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status(status.as_u16()));
        }

        response
            .json::<SearchPage>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }

    fn search_url(&self) -> String {
        format!("{}/search", self.endpoint)
    }
}

#[cfg(test)]
#[path = "client_tests.rs"]
mod client_tests;
