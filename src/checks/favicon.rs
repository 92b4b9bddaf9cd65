//! Favicon checks: standard icon, Apple touch icon, web app manifest

use super::{CheckItem, CheckStatus};
use crate::document::PageDocument;
use crate::resolver;

/// Run the favicon checks. Icon references are resolved to absolute URLs
/// against `page_url` so consumers can fetch them directly.
pub fn check_favicon(doc: &PageDocument, page_url: &str) -> Vec<CheckItem> {
    let mut items = Vec::new();

    let favicon = doc
        .attribute(r#"link[rel="icon"], link[rel="shortcut icon"]"#, "href")
        .map(|href| resolver::resolve(page_url, &href));
    items.push(match &favicon {
        Some(href) => CheckItem::new(
            "Standard Favicon",
            CheckStatus::Success,
            format!("Standard favicon present: {}", href),
        )
        .with_preview(href.clone()),
        None => CheckItem::new(
            "Standard Favicon",
            CheckStatus::Error,
            "Standard favicon is missing",
        ),
    });

    let apple_touch_icon = doc
        .attribute(r#"link[rel="apple-touch-icon"]"#, "href")
        .map(|href| resolver::resolve(page_url, &href));
    items.push(match &apple_touch_icon {
        Some(href) => CheckItem::new(
            "Apple Touch Icon",
            CheckStatus::Success,
            format!("Apple Touch Icon present: {}", href),
        )
        .with_preview(href.clone()),
        None => CheckItem::new(
            "Apple Touch Icon",
            CheckStatus::Warning,
            "Apple Touch Icon is missing (recommended for iOS devices)",
        ),
    });

    let manifest = doc
        .attribute(r#"link[rel="manifest"]"#, "href")
        .map(|href| resolver::resolve(page_url, &href));
    items.push(match &manifest {
        Some(href) => CheckItem::new(
            "Web App Manifest",
            CheckStatus::Success,
            format!("Web App Manifest present: {}", href),
        )
        .with_preview(href.clone()),
        None => CheckItem::new(
            "Web App Manifest",
            CheckStatus::Warning,
            "Web App Manifest is missing (recommended for PWA support)",
        ),
    });

    items
}

// ============================================================================
// Tests
// ============================================================================
