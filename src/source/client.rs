//! HTTP manifest fetcher
//!
//! A single GET per manifest with:
//! - Configurable timeout and User-Agent
//! - 404 mapped to NotFound, every other failure to Io
//!
//! There is no retry: the first failure ends the run.

use crate::error::SourceError;
use crate::source::ManifestFetcher;
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use std::time::Duration;

/// Default timeout for HTTP requests (30 seconds)
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Default User-Agent header
const DEFAULT_USER_AGENT: &str = concat!("depview/", env!("CARGO_PKG_VERSION"));

/// reqwest-backed manifest fetcher
#[derive(Clone)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    /// Create a new fetcher with default settings
    pub fn new() -> Result<Self, SourceError> {
        Self::with_config(DEFAULT_TIMEOUT, DEFAULT_USER_AGENT)
    }

    /// Create a new fetcher with custom configuration
    pub fn with_config(timeout: Duration, user_agent: &str) -> Result<Self, SourceError> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .build()
            .map_err(|e| {
                SourceError::io("HTTP client", format!("failed to create HTTP client: {}", e))
            })?;

        Ok(Self { client })
    }
}

/// Maps a response status to the error the resolver reports
fn status_error(url: &str, status: StatusCode) -> Option<SourceError> {
    if status == StatusCode::NOT_FOUND {
        Some(SourceError::not_found(url))
    } else if !status.is_success() {
        Some(SourceError::io(url, format!("HTTP {}", status)))
    } else {
        None
    }
}

#[async_trait]
impl ManifestFetcher for HttpFetcher {
    async fn fetch_text(&self, url: &str) -> Result<String, SourceError> {
        let response = self.client.get(url).send().await.map_err(|e| {
            if e.is_timeout() {
                SourceError::io(url, "request timed out")
            } else {
                SourceError::io(url, e.to_string())
            }
        })?;

        if let Some(err) = status_error(url, response.status()) {
            return Err(err);
        }

        response
            .text()
            .await
            .map_err(|e| SourceError::io(url, format!("failed to read response body: {}", e)))
    }
}
