use crate::models::{Resource, Statistics};
use std::collections::HashSet;
use tracing::debug;

/// Insertion-ordered collection of resources for one collection run.
/// Constructed fresh per run and handed explicitly through the pipeline;
/// there is no process-wide accumulator.
#[derive(Debug, Default)]
pub struct Catalog {
    resources: Vec<Resource>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a resource. A resource without a URL has no dedup identity
    /// and would silently merge with every other such resource, so it is
    /// dropped here instead.
    pub fn push(&mut self, resource: Resource) {
        if resource.url.is_empty() {
            debug!(title = %resource.title, "skipping resource without url");
            return;
        }
        self.resources.push(resource);
    }

    /// Removes exact-URL duplicates in a single in-order pass; the first
    /// occurrence of a URL wins. Idempotent.
    pub fn deduplicate(&mut self) {
        let mut seen = HashSet::new();
        self.resources.retain(|r| seen.insert(r.url.clone()));
    }

    /// Counts resources by type, source, and language, plus a frequency
    /// table of all tags. Each grouping sums to `total_resources`.
    pub fn statistics(&self) -> Statistics {
        let mut stats = Statistics {
            total_resources: self.resources.len(),
            ..Statistics::default()
        };
        for r in &self.resources {
            *stats.by_type.entry(r.kind.to_string()).or_insert(0) += 1;
            *stats.by_source.entry(r.source.clone()).or_insert(0) += 1;
            *stats.by_language.entry(r.language.clone()).or_insert(0) += 1;
            for tag in &r.tags {
                *stats.top_tags.entry(tag.clone()).or_insert(0) += 1;
            }
        }
        stats
    }

    pub fn resources(&self) -> &[Resource] {
        &self.resources
    }

    pub fn len(&self) -> usize {
        self.resources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.resources.is_empty()
    }
}

impl From<Vec<Resource>> for Catalog {
    fn from(resources: Vec<Resource>) -> Self {
        let mut catalog = Catalog::new();
        for r in resources {
            catalog.push(r);
        }
        catalog
    }
}

impl IntoIterator for Catalog {
    type Item = Resource;
    type IntoIter = std::vec::IntoIter<Resource>;

    fn into_iter(self) -> Self::IntoIter {
        self.resources.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ResourceType;
    use chrono::Utc;
    use std::collections::BTreeSet;

    fn resource(url: &str, kind: ResourceType, source: &str, tags: &[&str]) -> Resource {
        Resource {
            title: url.to_string(),
            url: url.to_string(),
            kind,
            description: String::new(),
            date_found: Utc::now(),
            source: source.to_string(),
            tags: tags.iter().map(|t| t.to_string()).collect::<BTreeSet<_>>(),
            language: "en".to_string(),
            rating: 0,
        }
    }

    #[test]
    fn dedup_keeps_first_occurrence_in_order() {
        let mut catalog = Catalog::new();
        for url in ["A", "B", "A", "C"] {
            catalog.push(resource(url, ResourceType::Other, "web", &[]));
        }
        catalog.deduplicate();
        let urls: Vec<_> = catalog.resources().iter().map(|r| r.url.as_str()).collect();
        assert_eq!(urls, ["A", "B", "C"]);
    }

    #[test]
    fn dedup_is_idempotent() {
        let mut catalog = Catalog::new();
        for url in ["A", "A", "B"] {
            catalog.push(resource(url, ResourceType::Other, "web", &[]));
        }
        catalog.deduplicate();
        let after_first: Vec<_> = catalog.resources().iter().map(|r| r.url.clone()).collect();
        catalog.deduplicate();
        let after_second: Vec<_> = catalog.resources().iter().map(|r| r.url.clone()).collect();
        assert_eq!(after_first, after_second);
    }

    #[test]
    fn empty_url_resources_are_dropped() {
        let mut catalog = Catalog::new();
        catalog.push(resource("", ResourceType::Other, "web", &[]));
        assert!(catalog.is_empty());
    }

    #[test]
    fn statistics_groupings_sum_to_total() {
        let mut catalog = Catalog::new();
        catalog.push(resource("a", ResourceType::Tutorial, "DuckDuckGo", &["python"]));
        catalog.push(resource("b", ResourceType::Tool, "GitHub", &["python", "mcp-server"]));
        catalog.push(resource("c", ResourceType::Tutorial, "GitHub", &[]));
        let stats = catalog.statistics();

        assert_eq!(stats.total_resources, 3);
        assert_eq!(stats.by_type.values().sum::<usize>(), 3);
        assert_eq!(stats.by_source.values().sum::<usize>(), 3);
        assert_eq!(stats.by_language.values().sum::<usize>(), 3);
        assert_eq!(stats.by_type["tutorial"], 2);
        assert_eq!(stats.top_tags["python"], 2);
        assert_eq!(stats.top_tags["mcp-server"], 1);
    }
}
