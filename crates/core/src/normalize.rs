use crate::classify::classify;
use crate::models::Resource;
use crate::tags::extract_tags;
use chrono::Utc;
use fetchers::RawHit;

/// Titles containing any CJK ideograph (U+4E00..=U+9FFF) are treated as
/// Chinese; everything else defaults to English.
pub fn detect_language(title: &str) -> &'static str {
    if title.chars().any(|c| ('\u{4e00}'..='\u{9fff}').contains(&c)) {
        "zh"
    } else {
        "en"
    }
}

/// Star counts map to a 0..=5 rating, one point per ten stars.
pub fn star_rating(stars: u64) -> u8 {
    (stars / 10).min(5) as u8
}

/// Assembles a raw hit into a canonical `Resource`: classification, tag
/// extraction, language detection, and the metric-derived extras for
/// repository hits (lower-cased implementation language as a tag, star
/// rating). `fetcher_name` fills in `source` when the hit carries none.
pub fn normalize(hit: &RawHit, fetcher_name: &str) -> Resource {
    let mut tags = extract_tags(&hit.title, &hit.description);
    if let Some(lang) = &hit.language {
        if !lang.is_empty() {
            tags.insert(lang.to_lowercase());
        }
    }

    let source = if hit.source.is_empty() {
        fetcher_name.to_string()
    } else {
        hit.source.clone()
    };

    Resource {
        title: hit.title.clone(),
        url: hit.url.clone(),
        kind: classify(&hit.title, &hit.description, &hit.url),
        description: hit.description.clone(),
        date_found: Utc::now(),
        source,
        tags,
        language: detect_language(&hit.title).to_string(),
        rating: hit.stars.map(star_rating).unwrap_or(0),
    }
}
