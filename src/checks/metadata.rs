//! Metadata checks: title, description, keywords, canonical, viewport,
//! charset and document language

use super::{CheckItem, CheckStatus};
use crate::document::PageDocument;
use crate::resolver;

/// Recommended title length bounds, exclusive
const TITLE_MIN: usize = 10;
const TITLE_MAX: usize = 70;

/// Recommended meta-description length bounds, exclusive
const DESCRIPTION_MIN: usize = 50;
const DESCRIPTION_MAX: usize = 160;

/// Run the metadata checks. `page_url` is the analyzed page's URL, used to
/// resolve the canonical reference to an absolute URL.
pub fn check_metadata(doc: &PageDocument, page_url: &str) -> Vec<CheckItem> {
    let mut items = Vec::new();

    let title = doc.element_text("title");
    items.push(match &title {
        Some(title) => {
            let len = title.chars().count();
            let item = if len > TITLE_MIN && len < TITLE_MAX {
                CheckItem::new(
                    "Title",
                    CheckStatus::Success,
                    format!("Title present with optimal length ({} characters)", len),
                )
            } else {
                CheckItem::new(
                    "Title",
                    CheckStatus::Warning,
                    format!(
                        "Title present but length ({} characters) is not optimal (recommended: 10-70 characters)",
                        len
                    ),
                )
            };
            item.with_preview(title.clone())
        }
        None => CheckItem::new("Title", CheckStatus::Error, "Title tag is missing"),
    });

    let description = doc.attribute(r#"meta[name="description"]"#, "content");
    items.push(match &description {
        Some(description) => {
            let len = description.chars().count();
            let item = if len > DESCRIPTION_MIN && len < DESCRIPTION_MAX {
                CheckItem::new(
                    "Meta Description",
                    CheckStatus::Success,
                    format!(
                        "Meta description present with optimal length ({} characters)",
                        len
                    ),
                )
            } else {
                CheckItem::new(
                    "Meta Description",
                    CheckStatus::Warning,
                    format!(
                        "Meta description present but length ({} characters) is not optimal (recommended: 50-160 characters)",
                        len
                    ),
                )
            };
            item.with_preview(description.clone())
        }
        None => CheckItem::new(
            "Meta Description",
            CheckStatus::Error,
            "Meta description is missing",
        ),
    });

    let keywords = doc.attribute(r#"meta[name="keywords"]"#, "content");
    items.push(match &keywords {
        Some(keywords) => CheckItem::new("Meta Keywords", CheckStatus::Success, "Meta keywords present")
            .with_preview(keywords.clone()),
        None => CheckItem::new(
            "Meta Keywords",
            CheckStatus::Warning,
            "Meta keywords not present (not critical for SEO but may help with some search engines)",
        ),
    });

    let canonical = doc
        .attribute(r#"link[rel="canonical"]"#, "href")
        .map(|href| resolver::resolve(page_url, &href));
    items.push(match &canonical {
        Some(canonical) => CheckItem::new(
            "Canonical URL",
            CheckStatus::Success,
            format!("Canonical URL present: {}", canonical),
        )
        .with_preview(canonical.clone()),
        None => CheckItem::new(
            "Canonical URL",
            CheckStatus::Warning,
            "Canonical URL not present (recommended to prevent duplicate content issues)",
        ),
    });

    let viewport = doc.attribute(r#"meta[name="viewport"]"#, "content");
    items.push(match &viewport {
        Some(viewport) => CheckItem::new(
            "Viewport",
            CheckStatus::Success,
            format!("Viewport tag present: {}", viewport),
        )
        .with_preview(viewport.clone()),
        None => CheckItem::new(
            "Viewport",
            CheckStatus::Error,
            "Viewport meta tag is missing (required for responsive design)",
        ),
    });

    let charset = doc.attribute("meta[charset]", "charset");
    items.push(match &charset {
        Some(charset) => CheckItem::new(
            "Character Set",
            CheckStatus::Success,
            format!("Character set specified: {}", charset),
        )
        .with_preview(charset.clone()),
        None => CheckItem::new(
            "Character Set",
            CheckStatus::Error,
            "Character set meta tag is missing",
        ),
    });

    let language = doc.attribute("html", "lang");
    items.push(match &language {
        Some(language) => CheckItem::new(
            "Language",
            CheckStatus::Success,
            format!("Language specified: {}", language),
        )
        .with_preview(language.clone()),
        None => CheckItem::new(
            "Language",
            CheckStatus::Warning,
            "HTML lang attribute is missing (recommended for accessibility and SEO)",
        ),
    });

    items
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &str = "https://example.com/page";

    fn item<'a>(items: &'a [CheckItem], name: &str) -> &'a CheckItem {
        items.iter().find(|i| i.name == name).unwrap()
    }

    fn title_status(len: usize) -> CheckStatus {
        let html = format!("<html><head><title>{}</title></head></html>", "x".repeat(len));
        let doc = PageDocument::parse(&html);
        item(&check_metadata(&doc, PAGE), "Title").status
    }

    fn description_status(len: usize) -> CheckStatus {
        let html = format!(
            r#"<head><meta name="description" content="{}"></head>"#,
            "d".repeat(len)
        );
        let doc = PageDocument::parse(&html);
        item(&check_metadata(&doc, PAGE), "Meta Description").status
    }

    #[test]
    fn test_title_length_boundaries() {
        assert_eq!(title_status(9), CheckStatus::Warning);
        assert_eq!(title_status(10), CheckStatus::Warning);
        assert_eq!(title_status(11), CheckStatus::Success);
        assert_eq!(title_status(69), CheckStatus::Success);
        assert_eq!(title_status(70), CheckStatus::Warning);
        assert_eq!(title_status(71), CheckStatus::Warning);
    }

    #[test]
    fn test_missing_title_is_error() {
        let doc = PageDocument::parse("<html><head></head></html>");
        let items = check_metadata(&doc, PAGE);
        let title = item(&items, "Title");
        assert_eq!(title.status, CheckStatus::Error);
        assert_eq!(title.message, "Title tag is missing");
        assert!(title.preview.is_none());
    }

    #[test]
    fn test_description_length_boundaries() {
        assert_eq!(description_status(50), CheckStatus::Warning);
        assert_eq!(description_status(51), CheckStatus::Success);
        assert_eq!(description_status(159), CheckStatus::Success);
        assert_eq!(description_status(160), CheckStatus::Warning);
        assert_eq!(description_status(161), CheckStatus::Warning);
    }

    #[test]
    fn test_title_preview_carries_text() {
        let doc = PageDocument::parse("<title>My Wonderful Website</title>");
        let items = check_metadata(&doc, PAGE);
        assert_eq!(
            item(&items, "Title").preview.as_deref(),
            Some("My Wonderful Website")
        );
    }

    #[test]
    fn test_canonical_is_resolved_against_page_url() {
        let doc = PageDocument::parse(r#"<link rel="canonical" href="/home">"#);
        let items = check_metadata(&doc, PAGE);
        let canonical = item(&items, "Canonical URL");
        assert_eq!(canonical.status, CheckStatus::Success);
        assert_eq!(canonical.preview.as_deref(), Some("https://example.com/home"));
        assert_eq!(
            canonical.message,
            "Canonical URL present: https://example.com/home"
        );
    }

    #[test]
    fn test_full_head_all_success() {
        let doc = PageDocument::parse(concat!(
            r#"<html lang="en"><head>"#,
            r#"<meta charset="UTF-8">"#,
            r#"<title>A perfectly sized page title</title>"#,
            r#"<meta name="description" content="A description that is comfortably inside the recommended length band for search result snippets.">"#,
            r#"<meta name="keywords" content="a,b,c">"#,
            r#"<link rel="canonical" href="https://example.com/page">"#,
            r#"<meta name="viewport" content="width=device-width, initial-scale=1.0">"#,
            r#"</head></html>"#,
        ));
        let items = check_metadata(&doc, PAGE);
        assert_eq!(items.len(), 7);
        assert!(items.iter().all(|i| i.status == CheckStatus::Success));
    }

    #[test]
    fn test_item_order_is_fixed() {
        let doc = PageDocument::parse("<html></html>");
        let names: Vec<_> = check_metadata(&doc, PAGE)
            .into_iter()
            .map(|i| i.name)
            .collect();
        assert_eq!(
            names,
            vec![
                "Title",
                "Meta Description",
                "Meta Keywords",
                "Canonical URL",
                "Viewport",
                "Character Set",
                "Language"
            ]
        );
    }
}
