use crate::{FetchError, RawHit, SearchFetcher};
use reqwest::Client;
use serde::Deserialize;

const SOURCE_NAME: &str = "GitHub";

// GitHub caps search pages at 100 items.
const PER_PAGE_CAP: usize = 100;

#[derive(Clone, Default)]
pub struct GitHubConfig {
    pub token: Option<String>,
    pub base_url: Option<String>,
}

/// Repository search through the GitHub REST API, star-sorted so the most
/// established projects surface first.
pub struct GitHubFetcher {
    client: Client,
    cfg: GitHubConfig,
}

impl GitHubFetcher {
    pub fn new(cfg: GitHubConfig) -> Self {
        Self {
            client: Client::new(),
            cfg,
        }
    }

    fn base_url(&self) -> &str {
        self.cfg
            .base_url
            .as_deref()
            .unwrap_or("https://api.github.com")
    }
}

#[derive(Deserialize)]
struct SearchResponse {
    #[serde(default)]
    items: Vec<Repo>,
}

#[derive(Deserialize)]
struct Repo {
    #[serde(default)]
    name: String,
    #[serde(default)]
    html_url: String,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    stargazers_count: u64,
    #[serde(default)]
    language: Option<String>,
}

#[async_trait::async_trait]
impl SearchFetcher for GitHubFetcher {
    fn name(&self) -> &str {
        SOURCE_NAME
    }

    async fn search(&self, query: &str, max_results: usize) -> Result<Vec<RawHit>, FetchError> {
        let per_page = max_results.clamp(1, PER_PAGE_CAP).to_string();
        let q = format!("{query} language:python OR language:typescript");
        let mut req = self
            .client
            .get(format!("{}/search/repositories", self.base_url()))
            .query(&[
                ("q", q.as_str()),
                ("sort", "stars"),
                ("order", "desc"),
                ("per_page", per_page.as_str()),
            ])
            .header("User-Agent", "mcp-collector")
            .header("Accept", "application/vnd.github+json");
        if let Some(token) = &self.cfg.token {
            req = req.bearer_auth(token);
        }

        let resp = req
            .send()
            .await
            .map_err(|e| FetchError::RequestFailed(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(FetchError::BadStatus(status.as_u16()));
        }

        let parsed: SearchResponse = resp
            .json()
            .await
            .map_err(|e| FetchError::RequestFailed(e.to_string()))?;

        Ok(parsed
            .items
            .into_iter()
            .take(max_results)
            .map(|repo| RawHit {
                title: repo.name,
                url: repo.html_url,
                description: repo.description.unwrap_or_default(),
                source: SOURCE_NAME.to_string(),
                stars: Some(repo.stargazers_count),
                language: repo.language,
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_repo_fields_with_defaults() {
        let body = r#"{
            "total_count": 1,
            "items": [
                {"name": "mcp-server", "html_url": "https://github.com/x/mcp-server",
                 "stargazers_count": 42, "language": "Python"},
                {"name": "bare", "html_url": "https://github.com/x/bare"}
            ]
        }"#;
        let parsed: SearchResponse = serde_json::from_str(body).unwrap();
        assert_eq!(parsed.items.len(), 2);
        assert_eq!(parsed.items[0].stargazers_count, 42);
        assert_eq!(parsed.items[0].language.as_deref(), Some("Python"));
        assert!(parsed.items[1].description.is_none());
        assert_eq!(parsed.items[1].stargazers_count, 0);
    }
}
