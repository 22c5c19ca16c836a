//! HTTP client for catalogue page fetching.

use crate::config::Config;
use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, info};

const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
                          (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

/// Errors surfaced by the page fetcher.
///
/// The pagination driver treats every variant as "no more data"; callers
/// that need to distinguish can match on the variant.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Transport-level failure (DNS, connect, timeout, body read).
    #[error("request for {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    /// The server answered with a non-2xx status.
    #[error("{url} returned status {status}")]
    Status { url: String, status: StatusCode },
}

/// Trait for catalogue page fetching - enables mocking for tests.
#[async_trait]
pub trait CatalogFetch: Send + Sync {
    /// Fetches one listing page and returns the HTML response.
    async fn fetch_page(&self, page: u32) -> Result<String, FetchError>;
}

/// Catalogue HTTP client over a plain GET transport.
pub struct CatalogClient {
    client: Client,
    base_url: String,
}

impl CatalogClient {
    /// Creates a new client from the configuration.
    pub fn new(config: &Config) -> Result<Self> {
        Self::with_base_url(config, None)
    }

    /// Creates a new client with an optional custom base URL (for testing).
    pub fn with_base_url(config: &Config, base_url: Option<String>) -> Result<Self> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(config.timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self { client, base_url: base_url.unwrap_or_else(|| config.base_url.clone()) })
    }

    /// Builds the URL of a numbered listing page.
    fn page_url(&self, page: u32) -> String {
        format!("{}/catalogue/page-{}.html", self.base_url.trim_end_matches('/'), page)
    }

    /// Performs a GET request and returns the body on a 2xx response.
    async fn get(&self, url: &str) -> Result<String, FetchError> {
        debug!("GET {}", url);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|source| FetchError::Transport { url: url.to_string(), source })?;

        let status = response.status();
        debug!("Response status: {}", status);

        if !status.is_success() {
            return Err(FetchError::Status { url: url.to_string(), status });
        }

        response
            .text()
            .await
            .map_err(|source| FetchError::Transport { url: url.to_string(), source })
    }
}

#[async_trait]
impl CatalogFetch for CatalogClient {
    async fn fetch_page(&self, page: u32) -> Result<String, FetchError> {
        let url = self.page_url(page);

        info!("Fetching catalogue page {}", page);
        self.get(&url).await
    }
}
