// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Fragment fetching
//!
//! The inliner consumes a content-fetch capability through the [`Fetcher`]
//! trait; the default [`DocumentFetcher`] serves `file:` locations from
//! the local filesystem and `http(s):` locations through reqwest. The
//! fetch boundary owns the timeout and the payload size cap, so a bad
//! include surfaces as an error substitution rather than a hang.

use std::time::Duration;

use async_trait::async_trait;
use url::Url;

use crate::error::{Error, Result};

/// Default user agent for remote include fetches
pub const DEFAULT_USER_AGENT: &str =
    concat!("fxpeek/", env!("CARGO_PKG_VERSION"), " (+https://bountyy.fi)");

/// Fetcher configuration
#[derive(Debug, Clone)]
pub struct FetchConfig {
    /// User agent string for HTTP fetches
    pub user_agent: String,
    /// Timeout per fetch
    pub timeout: Duration,
    /// Maximum accepted fragment size in bytes
    pub max_fragment_bytes: u64,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout: Duration::from_secs(10),
            max_fragment_bytes: 4 * 1024 * 1024,
        }
    }
}

impl FetchConfig {
    /// Create a new fetch config
    pub fn new() -> Self {
        Self::default()
    }

    /// Set user agent
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Set per-fetch timeout
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set fragment size cap
    pub fn max_fragment_bytes(mut self, max: u64) -> Self {
        self.max_fragment_bytes = max;
        self
    }
}

/// Content-fetch capability consumed by the inliner
#[async_trait]
pub trait Fetcher: Send + Sync {
    /// Fetch the text content at an absolute location.
    async fn fetch(&self, location: &Url) -> Result<String>;
}

/// Default fetcher for `file:` and `http(s):` locations
pub struct DocumentFetcher {
    client: reqwest::Client,
    config: FetchConfig,
}

impl DocumentFetcher {
    /// Create a fetcher with default configuration
    pub fn new() -> Result<Self> {
        Self::with_config(FetchConfig::default())
    }

    /// Create a fetcher with custom configuration
    pub fn with_config(config: FetchConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(&config.user_agent)
            .timeout(config.timeout)
            .build()?;

        Ok(Self { client, config })
    }

    async fn fetch_file(&self, location: &Url) -> Result<String> {
        let path = location
            .to_file_path()
            .map_err(|_| Error::fetch(location.as_str(), "not a local filesystem path"))?;

        let meta = tokio::fs::metadata(&path)
            .await
            .map_err(|e| Error::fetch(location.as_str(), e.to_string()))?;
        if meta.len() > self.config.max_fragment_bytes {
            return Err(Error::too_large(
                location.as_str(),
                meta.len(),
                self.config.max_fragment_bytes,
            ));
        }

        tokio::fs::read_to_string(&path)
            .await
            .map_err(|e| Error::fetch(location.as_str(), e.to_string()))
    }

    async fn fetch_http(&self, location: &Url) -> Result<String> {
        let response = self
            .client
            .get(location.as_str())
            .send()
            .await?
            .error_for_status()
            .map_err(|e| Error::fetch(location.as_str(), e.to_string()))?;

        let body = response.text().await?;
        if body.len() as u64 > self.config.max_fragment_bytes {
            return Err(Error::too_large(
                location.as_str(),
                body.len() as u64,
                self.config.max_fragment_bytes,
            ));
        }

        Ok(body)
    }
}

#[async_trait]
impl Fetcher for DocumentFetcher {
    async fn fetch(&self, location: &Url) -> Result<String> {
        match location.scheme() {
            "file" => self.fetch_file(location).await,
            "http" | "https" => self.fetch_http(location).await,
            scheme => Err(Error::unsupported_scheme(location.as_str(), scheme)),
        }
    }
}
