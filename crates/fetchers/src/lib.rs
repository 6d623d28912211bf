//! Fetcher abstractions for the search sources feeding the collector.

use serde::{Deserialize, Serialize};
use std::sync::Arc;
use thiserror::Error;

pub mod duckduckgo;
pub mod github;
pub mod noop;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    RequestFailed(String),
    #[error("provider returned status {0}")]
    BadStatus(u16),
}

/// One unprocessed search result. Text fields default to empty strings so
/// downstream code never has to special-case missing values; the optional
/// fields only carry data for metric-bearing sources (repository search).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawHit {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub source: String,
    #[serde(default)]
    pub stars: Option<u64>,
    #[serde(default)]
    pub language: Option<String>,
}

#[async_trait::async_trait]
pub trait SearchFetcher: Send + Sync {
    fn name(&self) -> &str;

    /// Returns up to `max_results` hits for `query`. Implementations map
    /// transport failures to `FetchError`; they never panic on malformed
    /// provider responses.
    async fn search(&self, query: &str, max_results: usize) -> Result<Vec<RawHit>, FetchError>;
}

/// Ordered set of fetchers for one collection run. Which sources are present
/// is decided here, at construction time, rather than by runtime fallbacks
/// inside the pipeline.
#[derive(Default, Clone)]
pub struct FetcherRegistry {
    fetchers: Vec<Arc<dyn SearchFetcher>>,
}

impl FetcherRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_fetcher(mut self, fetcher: Arc<dyn SearchFetcher>) -> Self {
        self.fetchers.push(fetcher);
        self
    }

    pub fn fetchers(&self) -> &[Arc<dyn SearchFetcher>] {
        &self.fetchers
    }

    pub fn is_empty(&self) -> bool {
        self.fetchers.is_empty()
    }
}
