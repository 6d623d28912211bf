use crate::catalog::Catalog;
use crate::config::AppConfig;
use crate::normalize::normalize;
use fetchers::duckduckgo::DuckDuckGoFetcher;
use fetchers::github::{GitHubConfig, GitHubFetcher};
use fetchers::{FetcherRegistry, SearchFetcher};
use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::{sleep, timeout};
use tracing::{debug, info, warn};

/// One fetcher paired with the queries it will run, in order.
pub struct QueryBatch {
    pub fetcher: Arc<dyn SearchFetcher>,
    pub queries: Vec<String>,
}

#[derive(Debug, Default, Serialize)]
pub struct RunSummary {
    pub queries_run: usize,
    pub hits_seen: usize,
    pub fetch_failures: usize,
    pub kept_resources: usize,
}

pub struct CollectionRun {
    pub catalog: Catalog,
    pub summary: RunSummary,
}

/// Builds the fetcher set for a run from the configured source switches.
/// Disabled sources are simply not registered; the pipeline never probes
/// for capabilities at fetch time.
pub fn build_registry(config: &AppConfig) -> FetcherRegistry {
    let mut registry = FetcherRegistry::new();
    if config.search.web_enabled {
        registry = registry.with_fetcher(Arc::new(DuckDuckGoFetcher::new()));
    }
    if config.search.github_enabled {
        let token = config
            .search
            .github_token
            .clone()
            .or_else(|| std::env::var("GITHUB_TOKEN").ok());
        registry = registry.with_fetcher(Arc::new(GitHubFetcher::new(GitHubConfig {
            token,
            base_url: None,
        })));
    }
    registry
}

/// Pairs each registered fetcher with the query list configured for it:
/// repository sources get the repo queries, everything else the web queries.
pub fn plan(config: &AppConfig, registry: &FetcherRegistry) -> Vec<QueryBatch> {
    registry
        .fetchers()
        .iter()
        .map(|fetcher| {
            let queries = if fetcher.name() == "GitHub" {
                config.search.repo_queries.clone()
            } else {
                config.search.web_queries.clone()
            };
            QueryBatch {
                fetcher: fetcher.clone(),
                queries,
            }
        })
        .collect()
}

/// Runs the collection pass: every batch sequentially, every query fetched,
/// normalized, and appended before the next begins, with the configured
/// pacing delay between queries to the same provider. Ends with a
/// deduplication pass. Fetch failures and timeouts downgrade to zero results
/// for that query; nothing upstream ever aborts the run.
pub async fn run(config: &AppConfig, batches: &[QueryBatch]) -> anyhow::Result<CollectionRun> {
    let mut catalog = Catalog::new();
    let mut summary = RunSummary::default();
    let pacing = Duration::from_millis(config.search.pacing_ms);
    let fetch_timeout = Duration::from_secs(config.search.fetch_timeout_secs);

    for batch in batches {
        let name = batch.fetcher.name();
        info!(fetcher = name, queries = batch.queries.len(), "starting batch");

        for (i, query) in batch.queries.iter().enumerate() {
            if i > 0 && !pacing.is_zero() {
                sleep(pacing).await;
            }
            summary.queries_run += 1;
            debug!(fetcher = name, query = %query, "searching");

            let hits = match timeout(
                fetch_timeout,
                batch.fetcher.search(query, config.search.max_results),
            )
            .await
            {
                Ok(Ok(hits)) => hits,
                Ok(Err(e)) => {
                    warn!(fetcher = name, query = %query, error = %e, "fetch failed, skipping query");
                    summary.fetch_failures += 1;
                    continue;
                }
                Err(_) => {
                    warn!(fetcher = name, query = %query, "fetch timed out, skipping query");
                    summary.fetch_failures += 1;
                    continue;
                }
            };

            summary.hits_seen += hits.len();
            for hit in &hits {
                catalog.push(normalize(hit, name));
            }
        }
    }

    let before = catalog.len();
    catalog.deduplicate();
    summary.kept_resources = catalog.len();
    info!(
        collected = before,
        kept = summary.kept_resources,
        "deduplication complete"
    );

    Ok(CollectionRun { catalog, summary })
}
