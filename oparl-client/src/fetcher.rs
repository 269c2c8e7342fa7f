//! Retrieval of JSON documents by URL.
//!
//! The engine only depends on the [`Fetcher`] trait. [`HttpFetcher`] is the
//! blocking HTTP implementation used by default; tests substitute fixture
//! fetchers.

use reqwest::blocking::Client;
use reqwest::header::ACCEPT;
use serde::{Deserialize, Serialize};
use std::rc::Rc;
use std::time::Duration;
use tracing::debug;

use crate::error::{FetchError, FetchResult};

/// Returns the parsed JSON document found at a URL.
///
/// Implementations own retry and timeout policy; the engine never retries.
pub trait Fetcher {
    fn fetch(&self, url: &str) -> FetchResult<serde_json::Value>;
}

impl<F: Fetcher + ?Sized> Fetcher for &F {
    fn fetch(&self, url: &str) -> FetchResult<serde_json::Value> {
        (**self).fetch(url)
    }
}

impl<F: Fetcher + ?Sized> Fetcher for Box<F> {
    fn fetch(&self, url: &str) -> FetchResult<serde_json::Value> {
        (**self).fetch(url)
    }
}

impl<F: Fetcher + ?Sized> Fetcher for Rc<F> {
    fn fetch(&self, url: &str) -> FetchResult<serde_json::Value> {
        (**self).fetch(url)
    }
}

/// Configuration for [`HttpFetcher`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FetcherConfig {
    /// Per-request timeout (in seconds).
    pub timeout_secs: u64,
    /// Value of the `User-Agent` header.
    pub user_agent: String,
    /// Whether HTTPS certificates are verified.
    pub verify_https: bool,
}

impl Default for FetcherConfig {
    fn default() -> Self {
        Self {
            timeout_secs: 30,
            user_agent: concat!("oparl-client/", env!("CARGO_PKG_VERSION")).to_string(),
            verify_https: true,
        }
    }
}

/// Blocking HTTP fetcher.
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new(config: &FetcherConfig) -> FetchResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(config.user_agent.as_str())
            .danger_accept_invalid_certs(!config.verify_https)
            .build()
            .map_err(|e| FetchError::Setup(e.to_string()))?;
        Ok(Self { client })
    }
}

impl Fetcher for HttpFetcher {
    fn fetch(&self, url: &str) -> FetchResult<serde_json::Value> {
        debug!(url, "Downloading");

        let transport = |reason: String| FetchError::Transport {
            url: url.to_string(),
            reason,
        };

        let resp = self
            .client
            .get(url)
            .header(ACCEPT, "application/json")
            .send()
            .map_err(|e| transport(format!("request failed: {e}")))?;

        if !resp.status().is_success() {
            return Err(transport(format!("HTTP {}", resp.status())));
        }

        let body = resp
            .text()
            .map_err(|e| transport(format!("read body: {e}")))?;

        serde_json::from_str(&body).map_err(|e| FetchError::Decode {
            url: url.to_string(),
            reason: e.to_string(),
        })
    }
}
