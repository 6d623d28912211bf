use std::collections::BTreeSet;

/// Technology terms tagged verbatim when present.
const TECH_TAGS: &[&str] = &[
    "python",
    "typescript",
    "javascript",
    "nodejs",
    "claude",
    "anthropic",
    "openai",
    "chatgpt",
    "llm",
    "ai",
    "sdk",
    "api",
    "rest",
    "websocket",
];

/// Protocol concept terms, namespaced with an `mcp-` prefix so they stay
/// distinguishable from the technology tags.
const MCP_TAGS: &[&str] = &[
    "server",
    "client",
    "protocol",
    "integration",
    "tool",
    "resource",
    "prompt",
];

const MCP_PREFIX: &str = "mcp-";

/// Extracts topical tags from a hit's text via substring membership in two
/// closed vocabularies. Set semantics: no duplicates, order irrelevant.
pub fn extract_tags(title: &str, description: &str) -> BTreeSet<String> {
    let content = format!("{title} {description}").to_lowercase();
    let mut tags = BTreeSet::new();

    for tag in TECH_TAGS {
        if content.contains(tag) {
            tags.insert((*tag).to_string());
        }
    }
    for tag in MCP_TAGS {
        if content.contains(tag) {
            tags.insert(format!("{MCP_PREFIX}{tag}"));
        }
    }
    tags
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tags_both_vocabularies() {
        let tags = extract_tags("Python MCP server", "an SDK for the protocol");
        assert!(tags.contains("python"));
        assert!(tags.contains("sdk"));
        assert!(tags.contains("mcp-server"));
        assert!(tags.contains("mcp-protocol"));
    }

    #[test]
    fn idempotent_and_order_independent() {
        let a = extract_tags("claude server", "client tool");
        let b = extract_tags("claude server", "client tool");
        assert_eq!(a, b);
        assert!(a.len() <= TECH_TAGS.len() + MCP_TAGS.len());
    }

    #[test]
    fn repeated_keywords_collapse() {
        let tags = extract_tags("server server server", "server");
        assert_eq!(tags.len(), 1);
        assert!(tags.contains("mcp-server"));
    }

    #[test]
    fn empty_text_yields_no_tags() {
        assert!(extract_tags("", "").is_empty());
    }

    #[test]
    fn matching_is_case_insensitive() {
        let tags = extract_tags("TypeScript CLIENT", "");
        assert!(tags.contains("typescript"));
        assert!(tags.contains("mcp-client"));
    }
}
