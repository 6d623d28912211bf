use crate::{FetchError, RawHit, SearchFetcher};
use reqwest::Client;
use serde::Deserialize;

const SOURCE_NAME: &str = "DuckDuckGo";

/// Web search via the DuckDuckGo Instant Answer API. No key required; the
/// API returns related topics rather than a full result page, which is
/// enough for resource discovery.
pub struct DuckDuckGoFetcher {
    client: Client,
    base_url: String,
}

impl DuckDuckGoFetcher {
    pub fn new() -> Self {
        Self::with_base_url("https://api.duckduckgo.com".to_string())
    }

    pub fn with_base_url(base_url: String) -> Self {
        Self {
            client: Client::new(),
            base_url,
        }
    }
}

impl Default for DuckDuckGoFetcher {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Deserialize)]
struct InstantAnswer {
    #[serde(default, rename = "RelatedTopics")]
    related_topics: Vec<RelatedTopic>,
}

// Topics come either flat or grouped under a category name. The mandatory
// "Topics" key is what distinguishes a group, so it must not be defaulted
// and the group variant must be tried first.
#[derive(Deserialize)]
#[serde(untagged)]
enum RelatedTopic {
    Group {
        #[serde(rename = "Topics")]
        topics: Vec<Topic>,
    },
    Topic(Topic),
}

#[derive(Deserialize)]
struct Topic {
    #[serde(default, rename = "Text")]
    text: String,
    #[serde(default, rename = "FirstURL")]
    first_url: String,
}

fn hit_from_topic(topic: Topic) -> RawHit {
    // The topic text is "Title - description"; keep the leading segment as
    // the title and the remainder as the description.
    let (title, description) = match topic.text.split_once(" - ") {
        Some((t, d)) => (t.to_string(), d.to_string()),
        None => (topic.text, String::new()),
    };
    RawHit {
        title,
        url: topic.first_url,
        description,
        source: SOURCE_NAME.to_string(),
        ..RawHit::default()
    }
}

#[async_trait::async_trait]
impl SearchFetcher for DuckDuckGoFetcher {
    fn name(&self) -> &str {
        SOURCE_NAME
    }

    async fn search(&self, query: &str, max_results: usize) -> Result<Vec<RawHit>, FetchError> {
        let resp = self
            .client
            .get(format!("{}/", self.base_url))
            .query(&[("q", query), ("format", "json"), ("no_html", "1")])
            .send()
            .await
            .map_err(|e| FetchError::RequestFailed(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(FetchError::BadStatus(status.as_u16()));
        }

        let parsed: InstantAnswer = resp
            .json()
            .await
            .map_err(|e| FetchError::RequestFailed(e.to_string()))?;

        let mut hits = Vec::new();
        for related in parsed.related_topics {
            match related {
                RelatedTopic::Topic(topic) => hits.push(hit_from_topic(topic)),
                RelatedTopic::Group { topics } => {
                    hits.extend(topics.into_iter().map(hit_from_topic))
                }
            }
            if hits.len() >= max_results {
                break;
            }
        }
        hits.truncate(max_results);
        Ok(hits)
    }
}
