use crate::models::ResourceType;

const TUTORIAL_WORDS: &[&str] = &["tutorial", "教程", "guide", "指南", "how to"];
const DOCUMENTATION_WORDS: &[&str] = &["documentation", "文档", "docs", "api"];
const SERVICE_WORDS: &[&str] = &["server", "service", "服务", "integration"];
const EXAMPLE_WORDS: &[&str] = &["example", "demo", "sample"];
const NEWS_WORDS: &[&str] = &["news", "新闻", "announcement", "发布"];
const ARTICLE_WORDS: &[&str] = &["blog", "博客", "article", "文章"];

const CODE_HOST: &str = "github.com";
const VIDEO_HOST: &str = "youtube.com";

fn contains_any(content: &str, words: &[&str]) -> bool {
    words.iter().any(|w| content.contains(w))
}

/// Maps a hit's text fields to exactly one resource type. The rules overlap,
/// so order matters: the first matching rule decides and the rest are never
/// evaluated. Matching is plain substring containment, not word-boundary
/// matching ("apical" matches "api").
pub fn classify(title: &str, description: &str, url: &str) -> ResourceType {
    let content = format!("{title} {description}").to_lowercase();

    if contains_any(&content, TUTORIAL_WORDS) {
        ResourceType::Tutorial
    } else if contains_any(&content, DOCUMENTATION_WORDS) {
        ResourceType::Documentation
    } else if contains_any(&content, SERVICE_WORDS) {
        ResourceType::Service
    } else if url.contains(CODE_HOST) && contains_any(&content, EXAMPLE_WORDS) {
        ResourceType::Example
    } else if url.contains(CODE_HOST) {
        ResourceType::Tool
    } else if contains_any(&content, NEWS_WORDS) {
        ResourceType::News
    } else if contains_any(&content, ARTICLE_WORDS) {
        ResourceType::Article
    } else if url.contains(VIDEO_HOST) || content.contains("video") {
        ResourceType::Video
    } else {
        ResourceType::Other
    }
}
