//! Report assembly
//!
//! Runs the seven check modules over an immutable page snapshot, scores the
//! outcome and stamps the result. Deterministic for a given (url, markup,
//! headers) snapshot — only the timestamp differs between runs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::checks::{
    check_ai_integration, check_favicon, check_metadata, check_performance, check_security,
    check_seo_files, check_social_media, CheckItem,
};
use crate::document::PageDocument;
use crate::headers::HeaderDict;
use crate::score;

/// A named group of related checks with its own aggregate score.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// One of the seven fixed category names
    pub name: String,
    /// Weighted 0-100 score over this category's items
    pub score: u32,
    /// Check results in registration order
    pub items: Vec<CheckItem>,
}

/// The complete analysis report for one page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    /// The original input URL, not normalized
    pub url: String,
    /// Weighted 0-100 score over the flattened items of all categories
    pub overall_score: u32,
    /// Exactly seven categories in fixed order
    pub categories: Vec<Category>,
    /// Completion time of the analysis
    pub timestamp: DateTime<Utc>,
}

/// Analyze a fetched page snapshot.
///
/// The seven categories are always present and always in the same order:
/// Metadata, Favicon, Social Media, SEO Files, Performance, AI Integration,
/// Security.
pub fn analyze_snapshot(url: &str, html: &str, headers: &HeaderDict) -> AnalysisResult {
    let doc = PageDocument::parse(html);

    let categories: Vec<Category> = [
        ("Metadata", check_metadata(&doc, url)),
        ("Favicon", check_favicon(&doc, url)),
        ("Social Media", check_social_media(&doc, url)),
        ("SEO Files", check_seo_files()),
        ("Performance", check_performance(html, headers)),
        ("AI Integration", check_ai_integration(&doc)),
        ("Security", check_security(headers)),
    ]
    .into_iter()
    .map(|(name, items)| Category {
        name: name.to_string(),
        score: score::category_score(&items),
        items,
    })
    .collect();

    let overall_score = score::overall_score(&categories);
    debug!(url, overall_score, "analysis assembled");

    AnalysisResult {
        url: url.to_string(),
        overall_score,
        categories,
        timestamp: Utc::now(),
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &str = "https://example.com/";

    fn sample_html() -> String {
        concat!(
            r#"<html lang="en"><head>"#,
            r#"<meta charset="UTF-8">"#,
            r#"<title>A page title of sensible length</title>"#,
            r#"<meta name="description" content="A meta description long enough to sit inside the recommended band for search snippets.">"#,
            r#"<link rel="icon" href="/favicon.ico">"#,
            r#"<meta property="og:title" content="A page">"#,
            r#"</head><body><p>hello</p></body></html>"#,
        )
        .to_string()
    }

    fn sample_headers() -> HeaderDict {
        [
            ("cache-control", "max-age=3600"),
            ("x-forwarded-proto", "https"),
            ("x-content-type-options", "nosniff"),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn test_seven_categories_in_fixed_order() {
        let result = analyze_snapshot(PAGE, &sample_html(), &sample_headers());
        let names: Vec<_> = result.categories.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "Metadata",
                "Favicon",
                "Social Media",
                "SEO Files",
                "Performance",
                "AI Integration",
                "Security"
            ]
        );
    }

    #[test]
    fn test_url_is_echoed_unnormalized() {
        let result = analyze_snapshot("HTTPS://Example.com/Path/", "<html></html>", &HeaderDict::new());
        assert_eq!(result.url, "HTTPS://Example.com/Path/");
    }

    #[test]
    fn test_identical_snapshots_are_idempotent() {
        let html = sample_html();
        let headers = sample_headers();

        let first = analyze_snapshot(PAGE, &html, &headers);
        let second = analyze_snapshot(PAGE, &html, &headers);

        assert_eq!(first.categories, second.categories);
        assert_eq!(first.overall_score, second.overall_score);
    }

    #[test]
    fn test_overall_score_matches_flattened_items() {
        let result = analyze_snapshot(PAGE, &sample_html(), &sample_headers());
        assert_eq!(result.overall_score, score::overall_score(&result.categories));
    }

    #[test]
    fn test_empty_markup_still_yields_full_report() {
        let result = analyze_snapshot(PAGE, "", &HeaderDict::new());
        assert_eq!(result.categories.len(), 7);
        let total_items: usize = result.categories.iter().map(|c| c.items.len()).sum();
        // 7 metadata + 3 favicon + 6 social + 4 seo files + 5 performance
        // + 3 ai + 5 security
        assert_eq!(total_items, 33);
    }

    #[test]
    fn test_json_shape_uses_camel_case() {
        let result = analyze_snapshot(PAGE, &sample_html(), &sample_headers());
        let json = serde_json::to_value(&result).unwrap();

        assert!(json.get("overallScore").is_some());
        assert!(json.get("overall_score").is_none());
        assert!(json.get("timestamp").is_some());
        let category = &json["categories"][0];
        assert!(category.get("name").is_some());
        assert!(category.get("score").is_some());
        assert!(category["items"][0].get("status").is_some());
    }
}
