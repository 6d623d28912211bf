use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub search: SearchConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchConfig {
    #[serde(default = "default_web_queries")]
    pub web_queries: Vec<String>,
    #[serde(default = "default_repo_queries")]
    pub repo_queries: Vec<String>,
    #[serde(default = "default_max_results")]
    pub max_results: usize,
    /// Courtesy delay between consecutive queries to the same provider.
    #[serde(default = "default_pacing_ms")]
    pub pacing_ms: u64,
    #[serde(default = "default_fetch_timeout_secs")]
    pub fetch_timeout_secs: u64,
    #[serde(default = "default_true")]
    pub web_enabled: bool,
    #[serde(default = "default_true")]
    pub github_enabled: bool,
    #[serde(default)]
    pub github_token: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default = "default_output_dir")]
    pub dir: String,
}

fn default_web_queries() -> Vec<String> {
    [
        "Model Context Protocol MCP",
        "MCP tutorial",
        "MCP server implementation",
        "MCP client examples",
        "Anthropic MCP",
        "MCP SDK Python TypeScript",
        "MCP integration examples",
        "MCP开发教程",
        "模型上下文协议",
        "MCP最佳实践",
        "MCP工具集成",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

fn default_repo_queries() -> Vec<String> {
    [
        "MCP",
        "model-context-protocol",
        "anthropic mcp",
        "mcp server",
        "mcp client",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

fn default_max_results() -> usize {
    20
}

fn default_pacing_ms() -> u64 {
    1000
}

fn default_fetch_timeout_secs() -> u64 {
    30
}

fn default_true() -> bool {
    true
}

fn default_output_dir() -> String {
    "mcp_data".to_string()
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            web_queries: default_web_queries(),
            repo_queries: default_repo_queries(),
            max_results: default_max_results(),
            pacing_ms: default_pacing_ms(),
            fetch_timeout_secs: default_fetch_timeout_secs(),
            web_enabled: true,
            github_enabled: true,
            github_token: None,
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir: default_output_dir(),
        }
    }
}

pub fn load(path: Option<&str>) -> anyhow::Result<AppConfig> {
    let mut settings = config::Config::builder();
    if let Some(p) = path {
        settings = settings.add_source(config::File::with_name(p));
    } else {
        settings = settings.add_source(config::File::with_name("config/default").required(false));
    }
    let cfg = settings.build()?;
    Ok(cfg.try_deserialize()?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_cover_a_missing_file() {
        let cfg: AppConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(cfg.search.web_queries.len(), 11);
        assert_eq!(cfg.search.repo_queries.len(), 5);
        assert_eq!(cfg.search.max_results, 20);
        assert_eq!(cfg.search.pacing_ms, 1000);
        assert!(cfg.search.web_enabled);
        assert_eq!(cfg.output.dir, "mcp_data");
    }

    #[test]
    fn partial_overrides_keep_remaining_defaults() {
        let cfg: AppConfig =
            serde_json::from_str(r#"{"search": {"max_results": 5, "github_enabled": false}}"#)
                .unwrap();
        assert_eq!(cfg.search.max_results, 5);
        assert!(!cfg.search.github_enabled);
        assert_eq!(cfg.search.web_queries.len(), 11);
    }
}
