//! Report writers: full JSON dump, browsable HTML page, statistics summary.
//!
//! Everything lands as timestamped flat files in the output directory, which
//! is created on demand. Writer failures are the one fatal error class in
//! this system and propagate to the caller.

use anyhow::Context;
use chrono::Utc;
use collector_core::catalog::Catalog;
use collector_core::models::Resource;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

mod html;

pub use html::render_html;

fn timestamp() -> String {
    Utc::now().format("%Y%m%d_%H%M%S").to_string()
}

fn prepare_dir(dir: &Path) -> anyhow::Result<()> {
    fs::create_dir_all(dir).with_context(|| format!("creating output dir {}", dir.display()))
}

/// Writes every resource, all fields preserved, as pretty-printed JSON.
/// Returns the path of the written file.
pub fn write_json(catalog: &Catalog, dir: &Path) -> anyhow::Result<PathBuf> {
    prepare_dir(dir)?;
    let path = dir.join(format!("mcp_resources_{}.json", timestamp()));
    let body = serde_json::to_string_pretty(catalog.resources())?;
    fs::write(&path, body).with_context(|| format!("writing {}", path.display()))?;
    info!(path = %path.display(), resources = catalog.len(), "wrote resource dump");
    Ok(path)
}

/// Writes the self-contained HTML report.
pub fn write_html(catalog: &Catalog, dir: &Path) -> anyhow::Result<PathBuf> {
    prepare_dir(dir)?;
    let path = dir.join(format!("mcp_report_{}.html", timestamp()));
    fs::write(&path, render_html(catalog)).with_context(|| format!("writing {}", path.display()))?;
    info!(path = %path.display(), "wrote html report");
    Ok(path)
}

/// Writes the grouped statistics summary as JSON.
pub fn write_stats(catalog: &Catalog, dir: &Path) -> anyhow::Result<PathBuf> {
    prepare_dir(dir)?;
    let path = dir.join(format!("mcp_statistics_{}.json", timestamp()));
    let body = serde_json::to_string_pretty(&catalog.statistics())?;
    fs::write(&path, body).with_context(|| format!("writing {}", path.display()))?;
    info!(path = %path.display(), "wrote statistics");
    Ok(path)
}

/// Reads a previously written resource dump back into a catalog, for
/// re-rendering reports without touching the network.
pub fn load_resources(path: &Path) -> anyhow::Result<Catalog> {
    let body =
        fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    let resources: Vec<Resource> =
        serde_json::from_str(&body).with_context(|| format!("parsing {}", path.display()))?;
    Ok(Catalog::from(resources))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use collector_core::models::ResourceType;
    use std::collections::BTreeSet;

    fn sample_catalog() -> Catalog {
        let mut tags = BTreeSet::new();
        tags.insert("python".to_string());
        tags.insert("mcp-server".to_string());
        Catalog::from(vec![Resource {
            title: "MCP Tutorial".to_string(),
            url: "http://a.com".to_string(),
            kind: ResourceType::Tutorial,
            description: "A guide".to_string(),
            date_found: Utc::now(),
            source: "DuckDuckGo".to_string(),
            tags,
            language: "en".to_string(),
            rating: 3,
        }])
    }

    #[test]
    fn json_dump_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let catalog = sample_catalog();
        let path = write_json(&catalog, dir.path()).unwrap();

        let loaded = load_resources(&path).unwrap();
        assert_eq!(loaded.len(), 1);
        let res = &loaded.resources()[0];
        assert_eq!(res.url, "http://a.com");
        assert_eq!(res.kind, ResourceType::Tutorial);
        assert_eq!(res.rating, 3);
        assert!(res.tags.contains("mcp-server"));
    }

    #[test]
    fn stats_file_contains_grouped_counts() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_stats(&sample_catalog(), dir.path()).unwrap();

        let body = std::fs::read_to_string(path).unwrap();
        let value: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(value["total_resources"], 1);
        assert_eq!(value["by_type"]["tutorial"], 1);
        assert_eq!(value["by_source"]["DuckDuckGo"], 1);
        assert_eq!(value["top_tags"]["python"], 1);
    }

    #[test]
    fn output_dir_is_created_on_demand() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("out").join("reports");
        let path = write_html(&sample_catalog(), &nested).unwrap();
        assert!(path.exists());
    }
}
