//! HTTP Fetcher
//!
//! The network side of the resource loaders: a narrow JSON-fetch trait and
//! its reqwest implementation against the portfolio backend.

use std::future::Future;

use reqwest::header::ACCEPT;
use serde_json::Value;
use tracing::error;

use crate::error::FetchError;

/// API version prefix every backend route lives under.
const API_BASE_PATH: &str = "/api/v1";

// == Api Fetcher Trait ==
/// Fetches one JSON document from the backend.
///
/// Kept as a trait so loaders can be driven by a scripted fetcher in tests
/// without a running backend.
pub trait ApiFetcher: Send + Sync {
    /// Fetches the JSON body served at `path` (e.g. `/projects`).
    fn fetch_json(&self, path: &str) -> impl Future<Output = Result<Value, FetchError>> + Send;
}

// == Http Fetcher ==
/// reqwest-backed fetcher for the portfolio backend.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: reqwest::Client,
    base_url: String,
}

impl HttpFetcher {
    /// Creates a fetcher against `base_url` (scheme + host, no trailing path).
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Builds the full request URL for a resource path.
    fn endpoint_url(&self, path: &str) -> String {
        let base = self.base_url.trim_end_matches('/');
        if path.starts_with('/') {
            format!("{base}{API_BASE_PATH}{path}")
        } else {
            format!("{base}{API_BASE_PATH}/{path}")
        }
    }
}

impl ApiFetcher for HttpFetcher {
    fn fetch_json(&self, path: &str) -> impl Future<Output = Result<Value, FetchError>> + Send {
        let url = self.endpoint_url(path);
        let client = self.client.clone();

        async move {
            let response = client
                .get(&url)
                .header(ACCEPT, "application/json")
                .send()
                .await?;

            let status = response.status();
            if !status.is_success() {
                let body = response.text().await.unwrap_or_default();
                error!(%url, status = status.as_u16(), %body, "backend request failed");
                return Err(FetchError::Http {
                    status: status.as_u16(),
                });
            }

            response
                .json::<Value>()
                .await
                .map_err(|err| FetchError::InvalidResponse(err.to_string()))
        }
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_url_building() {
        let fetcher = HttpFetcher::new("http://localhost:8000");
        assert_eq!(
            fetcher.endpoint_url("/projects"),
            "http://localhost:8000/api/v1/projects"
        );
        // Missing leading slash is tolerated
        assert_eq!(
            fetcher.endpoint_url("projects"),
            "http://localhost:8000/api/v1/projects"
        );
    }

    #[test]
    fn test_endpoint_url_trims_trailing_slash() {
        let fetcher = HttpFetcher::new("http://localhost:8000/");
        assert_eq!(
            fetcher.endpoint_url("/education"),
            "http://localhost:8000/api/v1/education"
        );
    }
}
