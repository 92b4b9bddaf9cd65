//! Integration tests for the analysis engine
//!
//! Exercises the full snapshot pipeline (parse → check → score → assemble)
//! against realistic markup and header sets, plus the documented boundary
//! behavior of the individual checks.

use sitelens::checks::CheckStatus;
use sitelens::headers::HeaderDict;
use sitelens::report::{analyze_snapshot, AnalysisResult};
use sitelens::resolver::resolve;

// ============================================================================
// Test Utilities
// ============================================================================

const PAGE_URL: &str = "https://example.com/products/widget";

/// A page that satisfies most checks
fn well_formed_page() -> String {
    concat!(
        r#"<!DOCTYPE html><html lang="en"><head>"#,
        r#"<meta charset="UTF-8">"#,
        r#"<meta name="viewport" content="width=device-width, initial-scale=1.0">"#,
        r#"<title>Widget, the finest example product</title>"#,
        r#"<meta name="description" content="The widget product page, with enough descriptive text to satisfy the recommended length band for snippets.">"#,
        r#"<meta name="keywords" content="widget,example,product">"#,
        r#"<link rel="canonical" href="/products/widget">"#,
        r#"<link rel="icon" href="/favicon.ico">"#,
        r#"<link rel="apple-touch-icon" href="/touch.png">"#,
        r#"<link rel="manifest" href="/site.webmanifest">"#,
        r#"<meta property="og:title" content="Widget">"#,
        r#"<meta property="og:description" content="The finest example product">"#,
        r#"<meta property="og:image" content="/img/widget.png">"#,
        r#"<meta property="og:url" content="https://example.com/products/widget">"#,
        r#"<meta name="twitter:card" content="summary">"#,
        r#"<meta name="twitter:image" content="/img/widget.png">"#,
        r#"<script type="application/ld+json">{"@type":"Product"}</script>"#,
        r#"</head><body><h1>Widget</h1></body></html>"#,
    )
    .to_string()
}

fn secure_headers() -> HeaderDict {
    [
        ("cache-control", "max-age=3600, public"),
        ("content-encoding", "gzip"),
        ("x-forwarded-proto", "https"),
        ("content-security-policy", "default-src 'self'"),
        ("x-content-type-options", "nosniff"),
        ("x-xss-protection", "1; mode=block"),
        ("strict-transport-security", "max-age=63072000"),
    ]
    .into_iter()
    .collect()
}

fn category<'a>(result: &'a AnalysisResult, name: &str) -> &'a sitelens::report::Category {
    result
        .categories
        .iter()
        .find(|c| c.name == name)
        .unwrap_or_else(|| panic!("missing category {}", name))
}

// ============================================================================
// Full Pipeline
// ============================================================================

#[test]
fn test_well_formed_page_scores_high() {
    let result = analyze_snapshot(PAGE_URL, &well_formed_page(), &secure_headers());

    assert_eq!(result.categories.len(), 7);
    assert_eq!(category(&result, "Metadata").score, 100);
    assert_eq!(category(&result, "Favicon").score, 100);
    assert_eq!(category(&result, "Social Media").score, 100);
    assert_eq!(category(&result, "Performance").score, 100);
    assert_eq!(category(&result, "Security").score, 100);

    // the four simulated file probes stay warnings
    assert_eq!(category(&result, "SEO Files").score, 50);
    assert!(category(&result, "SEO Files")
        .items
        .iter()
        .all(|i| i.status == CheckStatus::Warning));

    // AI Integration: llm.txt warning, no ai meta tags, structured data found
    let ai = category(&result, "AI Integration");
    assert_eq!(ai.items[0].status, CheckStatus::Warning);
    assert_eq!(ai.items[2].status, CheckStatus::Success);
}

#[test]
fn test_bare_page_over_plain_http_scores_low() {
    let result = analyze_snapshot("http://example.com", "<html></html>", &HeaderDict::new());

    let security = category(&result, "Security");
    assert_eq!(security.items[0].status, CheckStatus::Error);

    let metadata = category(&result, "Metadata");
    assert!(metadata
        .items
        .iter()
        .all(|i| i.status != CheckStatus::Success));

    assert!(result.overall_score < 50);
}

#[test]
fn test_overall_score_is_flattened_not_averaged() {
    let result = analyze_snapshot(PAGE_URL, &well_formed_page(), &secure_headers());

    let success: usize = result
        .categories
        .iter()
        .flat_map(|c| &c.items)
        .filter(|i| i.status == CheckStatus::Success)
        .count();
    let warning: usize = result
        .categories
        .iter()
        .flat_map(|c| &c.items)
        .filter(|i| i.status == CheckStatus::Warning)
        .count();
    let total: usize = result.categories.iter().map(|c| c.items.len()).sum();

    let expected = ((success as f64 + warning as f64 * 0.5) / total as f64 * 100.0).round() as u32;
    assert_eq!(result.overall_score, expected);

    let mean_of_scores =
        result.categories.iter().map(|c| c.score).sum::<u32>() / result.categories.len() as u32;
    assert_ne!(result.overall_score, mean_of_scores);
}

#[test]
fn test_idempotence_modulo_timestamp() {
    let html = well_formed_page();
    let headers = secure_headers();

    let first = analyze_snapshot(PAGE_URL, &html, &headers);
    let second = analyze_snapshot(PAGE_URL, &html, &headers);

    assert_eq!(first.categories, second.categories);
    assert_eq!(first.overall_score, second.overall_score);
    assert_eq!(first.url, second.url);
}

#[test]
fn test_link_values_are_resolved_to_absolute_urls() {
    let result = analyze_snapshot(PAGE_URL, &well_formed_page(), &secure_headers());

    let canonical = category(&result, "Metadata")
        .items
        .iter()
        .find(|i| i.name == "Canonical URL")
        .unwrap();
    assert_eq!(
        canonical.preview.as_deref(),
        Some("https://example.com/products/widget")
    );

    let favicon = &category(&result, "Favicon").items[0];
    assert_eq!(
        favicon.preview.as_deref(),
        Some("https://example.com/favicon.ico")
    );

    let og_image = category(&result, "Social Media")
        .items
        .iter()
        .find(|i| i.name == "OG Image")
        .unwrap();
    assert_eq!(
        og_image.preview.as_deref(),
        Some("https://example.com/img/widget.png")
    );
}

#[test]
fn test_wire_format_field_names() {
    let result = analyze_snapshot(PAGE_URL, &well_formed_page(), &secure_headers());
    let json = serde_json::to_value(&result).unwrap();

    assert!(json["url"].is_string());
    assert!(json["overallScore"].is_u64());
    assert!(json["timestamp"].is_string());

    let item = &json["categories"][0]["items"][0];
    assert!(item["name"].is_string());
    assert!(item["status"].is_string());
    assert!(item["message"].is_string());

    // items without an extracted value must omit the preview field entirely
    let seo_item = &json["categories"][3]["items"][0];
    assert!(seo_item.get("preview").is_none());
}

// ============================================================================
// Resolver Properties
// ============================================================================

#[test]
fn test_resolver_documented_properties() {
    assert_eq!(
        resolve("https://example.com/a/b", "/c.png"),
        "https://example.com/c.png"
    );
    assert_eq!(
        resolve("https://example.com", "//cdn.com/x.png"),
        "https://cdn.com/x.png"
    );
    assert_eq!(
        resolve("https://example.com/a/", "../y.png"),
        "https://example.com/y.png"
    );
}
