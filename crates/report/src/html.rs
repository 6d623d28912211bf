use chrono::Utc;
use collector_core::catalog::Catalog;
use collector_core::models::Resource;

const STYLE: &str = r#"
        body { font-family: Arial, sans-serif; margin: 20px; background-color: #f5f5f5; }
        .container { max-width: 1200px; margin: 0 auto; }
        .header { background: linear-gradient(135deg, #667eea 0%, #764ba2 100%); color: white; padding: 20px; border-radius: 10px; margin-bottom: 20px; }
        .resource-card { background: white; border-radius: 8px; padding: 15px; margin-bottom: 15px; box-shadow: 0 2px 4px rgba(0,0,0,0.1); }
        .resource-type { padding: 4px 8px; border-radius: 4px; color: white; font-size: 12px; display: inline-block; margin-right: 10px; }
        .tutorial { background-color: #4CAF50; }
        .documentation { background-color: #2196F3; }
        .service { background-color: #FF9800; }
        .tool { background-color: #9C27B0; }
        .article { background-color: #607D8B; }
        .example { background-color: #795548; }
        .video { background-color: #F44336; }
        .news { background-color: #3F51B5; }
        .other { background-color: #9E9E9E; }
        .tags { margin-top: 10px; }
        .tag { background-color: #e0e0e0; padding: 2px 6px; border-radius: 3px; font-size: 11px; margin-right: 5px; }
        .stats { display: grid; grid-template-columns: repeat(auto-fit, minmax(200px, 1fr)); gap: 15px; margin-bottom: 20px; }
        .stat-card { background: white; padding: 15px; border-radius: 8px; text-align: center; box-shadow: 0 2px 4px rgba(0,0,0,0.1); }
        .filter-buttons { margin-bottom: 20px; }
        .filter-btn { padding: 8px 16px; margin-right: 10px; border: none; border-radius: 4px; background-color: #ddd; cursor: pointer; }
        .filter-btn.active { background-color: #667eea; color: white; }
"#;

const SCRIPT: &str = r#"
        function filterResources(type) {
            const cards = document.querySelectorAll('.resource-card');
            const buttons = document.querySelectorAll('.filter-btn');

            buttons.forEach(btn => btn.classList.remove('active'));
            event.target.classList.add('active');

            cards.forEach(card => {
                if (type === 'all' || card.dataset.type === type) {
                    card.style.display = 'block';
                } else {
                    card.style.display = 'none';
                }
            });
        }
"#;

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

fn push_resource_card(out: &mut String, resource: &Resource) {
    let kind = resource.kind.as_str();
    out.push_str(&format!(
        r#"            <div class="resource-card" data-type="{kind}">
                <div>
                    <span class="resource-type {kind}">{}</span>
                    <strong><a href="{}" target="_blank" rel="noopener">{}</a></strong>
                </div>
                <p>{}</p>
                <div class="tags">
                    Source: <span class="tag">{}</span>
                    Language: <span class="tag">{}</span>
"#,
        kind.to_uppercase(),
        escape(&resource.url),
        escape(&resource.title),
        escape(&resource.description),
        escape(&resource.source),
        escape(&resource.language),
    ));
    for tag in &resource.tags {
        out.push_str(&format!(r#"                    <span class="tag">{}</span>"#, escape(tag)));
        out.push('\n');
    }
    out.push_str("                </div>\n            </div>\n");
}

/// Renders the catalog as a single self-contained page: summary header,
/// per-type stat cards, filter buttons, and one card per resource.
pub fn render_html(catalog: &Catalog) -> String {
    let stats = catalog.statistics();
    let mut out = String::new();

    out.push_str(&format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>MCP Resource Collection Report</title>
    <style>{STYLE}    </style>
</head>
<body>
    <div class="container">
        <div class="header">
            <h1>MCP (Model Context Protocol) Resource Report</h1>
            <p>Collected: {}</p>
            <p>Total resources: {}</p>
        </div>

        <div class="stats">
"#,
        Utc::now().format("%Y-%m-%d %H:%M:%S"),
        stats.total_resources,
    ));

    for (kind, count) in &stats.by_type {
        out.push_str(&format!(
            r#"            <div class="stat-card">
                <h3>{}</h3>
                <div style="font-size: 24px; font-weight: bold; color: #667eea;">{count}</div>
            </div>
"#,
            escape(kind),
        ));
    }

    out.push_str(
        r#"        </div>

        <div class="filter-buttons">
            <button class="filter-btn active" onclick="filterResources('all')">All</button>
"#,
    );
    for kind in stats.by_type.keys() {
        out.push_str(&format!(
            r#"            <button class="filter-btn" onclick="filterResources('{0}')">{0}</button>"#,
            escape(kind),
        ));
        out.push('\n');
    }

    out.push_str("        </div>\n\n        <div id=\"resources\">\n");
    for resource in catalog.resources() {
        push_resource_card(&mut out, resource);
    }
    out.push_str(&format!(
        r#"        </div>
    </div>

    <script>{SCRIPT}    </script>
</body>
</html>
"#,
    ));

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use collector_core::models::{Resource, ResourceType};
    use std::collections::BTreeSet;

    fn resource(title: &str, url: &str, kind: ResourceType) -> Resource {
        Resource {
            title: title.to_string(),
            url: url.to_string(),
            kind,
            description: "desc".to_string(),
            date_found: Utc::now(),
            source: "web".to_string(),
            tags: BTreeSet::new(),
            language: "en".to_string(),
            rating: 0,
        }
    }

    #[test]
    fn page_lists_every_resource_with_its_type() {
        let catalog = Catalog::from(vec![
            resource("Guide", "http://a.com", ResourceType::Tutorial),
            resource("Repo", "https://github.com/x", ResourceType::Tool),
        ]);
        let page = render_html(&catalog);

        assert!(page.contains("Total resources: 2"));
        assert!(page.contains(r#"data-type="tutorial""#));
        assert!(page.contains(r#"data-type="tool""#));
        assert!(page.contains(r#"href="http://a.com""#));
        assert!(page.contains("filterResources('tutorial')"));
    }

    #[test]
    fn every_resource_type_has_a_badge_style() {
        let page = render_html(&Catalog::from(vec![resource(
            "t",
            "http://a.com",
            ResourceType::Other,
        )]));
        for kind in [
            "tutorial",
            "documentation",
            "service",
            "tool",
            "article",
            "example",
            "video",
            "news",
            "other",
        ] {
            assert!(page.contains(&format!(".{kind} {{")), "missing style for {kind}");
        }
    }

    #[test]
    fn text_fields_are_escaped() {
        let catalog = Catalog::from(vec![resource(
            "<script>alert(1)</script>",
            "http://a.com",
            ResourceType::Other,
        )]);
        let page = render_html(&catalog);
        assert!(!page.contains("<script>alert(1)</script>"));
        assert!(page.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
    }
}
