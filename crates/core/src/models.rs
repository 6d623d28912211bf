use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceType {
    Tutorial,
    Documentation,
    Service,
    Example,
    Tool,
    News,
    Article,
    Video,
    Other,
}

impl ResourceType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ResourceType::Tutorial => "tutorial",
            ResourceType::Documentation => "documentation",
            ResourceType::Service => "service",
            ResourceType::Example => "example",
            ResourceType::Tool => "tool",
            ResourceType::News => "news",
            ResourceType::Article => "article",
            ResourceType::Video => "video",
            ResourceType::Other => "other",
        }
    }
}

impl fmt::Display for ResourceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One normalized, catalogued reference to a piece of MCP content. Built
/// once by the normalizer and never mutated afterwards; `url` is the dedup
/// identity and is deliberately not validated as a well-formed URI.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Resource {
    pub title: String,
    pub url: String,
    #[serde(rename = "type")]
    pub kind: ResourceType,
    pub description: String,
    pub date_found: DateTime<Utc>,
    pub source: String,
    pub tags: BTreeSet<String>,
    pub language: String,
    pub rating: u8,
}

/// Grouped counts over a deduplicated catalog. BTreeMaps keep every table in
/// a stable order so reports are reproducible.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Statistics {
    pub total_resources: usize,
    pub by_type: BTreeMap<String, usize>,
    pub by_source: BTreeMap<String, usize>,
    pub by_language: BTreeMap<String, usize>,
    pub top_tags: BTreeMap<String, usize>,
}
