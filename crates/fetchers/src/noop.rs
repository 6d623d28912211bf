use crate::{FetchError, RawHit, SearchFetcher};

/// Inert fetcher: always zero results. Stands in for a source that has been
/// switched off without changing the pipeline's shape.
#[derive(Debug, Default)]
pub struct NoopFetcher;

#[async_trait::async_trait]
impl SearchFetcher for NoopFetcher {
    fn name(&self) -> &str {
        "noop"
    }

    async fn search(&self, _query: &str, _max_results: usize) -> Result<Vec<RawHit>, FetchError> {
        Ok(Vec::new())
    }
}
