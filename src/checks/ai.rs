//! AI integration checks: llm.txt, AI-related meta tags, structured data

use super::{CheckItem, CheckStatus};
use crate::document::PageDocument;

/// Substrings that mark a `<meta>` tag as AI-related when found in its
/// `name` or `property` attribute.
const AI_MARKERS: [&str; 3] = ["ai", "bot", "llm"];

/// Run the AI integration checks.
pub fn check_ai_integration(doc: &PageDocument) -> Vec<CheckItem> {
    let mut items = Vec::new();

    // Existence of llm.txt would need its own request; reported the same way
    // as the SEO files until an auxiliary probe exists.
    items.push(CheckItem::new(
        "LLM.txt",
        CheckStatus::Warning,
        "Could not verify llm.txt file (server-side check required)",
    ));

    let ai_meta_tags: Vec<String> = doc
        .meta_tags()
        .into_iter()
        .filter(|tag| {
            let marked = |attr: &Option<String>| {
                attr.as_deref()
                    .map(|value| AI_MARKERS.iter().any(|marker| value.contains(marker)))
                    .unwrap_or(false)
            };
            marked(&tag.name) || marked(&tag.property)
        })
        .map(|tag| {
            let label = tag.name.or(tag.property).unwrap_or_default();
            format!("{}: {}", label, tag.content.unwrap_or_default())
        })
        .collect();

    items.push(if ai_meta_tags.is_empty() {
        CheckItem::new(
            "AI Meta Tags",
            CheckStatus::Warning,
            "No AI-related meta tags found (optional but becoming more common)",
        )
    } else {
        CheckItem::new(
            "AI Meta Tags",
            CheckStatus::Success,
            format!("Found {} AI-related meta tags", ai_meta_tags.len()),
        )
        .with_preview(ai_meta_tags.join("\n"))
    });

    let structured_data = doc.all_inner_texts(r#"script[type="application/ld+json"]"#);
    items.push(if structured_data.is_empty() {
        CheckItem::new(
            "Structured Data",
            CheckStatus::Warning,
            "No structured data found (recommended for better SEO and AI understanding)",
        )
    } else {
        let first_block = structured_data[0].clone();
        CheckItem::new(
            "Structured Data",
            CheckStatus::Success,
            format!("Found {} structured data blocks", structured_data.len()),
        )
        .with_preview_opt((!first_block.is_empty()).then_some(first_block))
    });

    items
}

// ============================================================================
// Tests
// ============================================================================
