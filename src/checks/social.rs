//! Social media checks: Open Graph and Twitter card tags

use super::{CheckItem, CheckStatus};
use crate::document::PageDocument;
use crate::resolver;

/// Run the social media checks. Image and URL values are resolved to
/// absolute URLs against `page_url`.
pub fn check_social_media(doc: &PageDocument, page_url: &str) -> Vec<CheckItem> {
    let mut items = Vec::new();

    let og_title = doc.attribute(r#"meta[property="og:title"]"#, "content");
    items.push(match &og_title {
        Some(title) => CheckItem::new(
            "OG Title",
            CheckStatus::Success,
            format!("Open Graph title present: {}", title),
        )
        .with_preview(title.clone()),
        None => CheckItem::new(
            "OG Title",
            CheckStatus::Warning,
            "Open Graph title is missing (recommended for social media sharing)",
        ),
    });

    let og_description = doc.attribute(r#"meta[property="og:description"]"#, "content");
    items.push(match &og_description {
        Some(description) => {
            CheckItem::new("OG Description", CheckStatus::Success, "Open Graph description present")
                .with_preview(description.clone())
        }
        None => CheckItem::new(
            "OG Description",
            CheckStatus::Warning,
            "Open Graph description is missing (recommended for social media sharing)",
        ),
    });

    let og_image = doc
        .attribute(r#"meta[property="og:image"]"#, "content")
        .map(|content| resolver::resolve(page_url, &content));
    items.push(match &og_image {
        Some(image) => CheckItem::new(
            "OG Image",
            CheckStatus::Success,
            format!("Open Graph image present: {}", image),
        )
        .with_preview(image.clone()),
        None => CheckItem::new(
            "OG Image",
            CheckStatus::Warning,
            "Open Graph image is missing (recommended for social media sharing)",
        ),
    });

    let og_url = doc
        .attribute(r#"meta[property="og:url"]"#, "content")
        .map(|content| resolver::resolve(page_url, &content));
    items.push(match &og_url {
        Some(url) => CheckItem::new(
            "OG URL",
            CheckStatus::Success,
            format!("Open Graph URL present: {}", url),
        )
        .with_preview(url.clone()),
        None => CheckItem::new(
            "OG URL",
            CheckStatus::Warning,
            "Open Graph URL is missing (recommended for social media sharing)",
        ),
    });

    let twitter_card = doc.attribute(r#"meta[name="twitter:card"]"#, "content");
    items.push(match &twitter_card {
        Some(card) => CheckItem::new(
            "Twitter Card",
            CheckStatus::Success,
            format!("Twitter Card present: {}", card),
        )
        .with_preview(card.clone()),
        None => CheckItem::new(
            "Twitter Card",
            CheckStatus::Warning,
            "Twitter Card is missing (recommended for Twitter sharing)",
        ),
    });

    let twitter_image = doc
        .attribute(r#"meta[name="twitter:image"]"#, "content")
        .map(|content| resolver::resolve(page_url, &content));
    items.push(match &twitter_image {
        Some(image) => CheckItem::new("Twitter Image", CheckStatus::Success, "Twitter Image present")
            .with_preview(image.clone()),
        None => CheckItem::new(
            "Twitter Image",
            CheckStatus::Warning,
            "Twitter Image is missing (recommended for Twitter sharing)",
        ),
    });

    items
}

// ============================================================================
// Tests
// ============================================================================
