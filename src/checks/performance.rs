//! Performance checks: caching headers, markup size, minification
//! heuristics and transfer compression

use super::{CheckItem, CheckStatus};
use crate::headers::HeaderDict;
use regex::Regex;

/// Markup size boundaries in KB: below `SIZE_GOOD_KB` is fine, below
/// `SIZE_ACCEPTABLE_KB` is tolerable, anything above is flagged.
const SIZE_GOOD_KB: u64 = 100;
const SIZE_ACCEPTABLE_KB: u64 = 200;

/// Run the performance checks over the raw markup and response headers.
pub fn check_performance(html: &str, headers: &HeaderDict) -> Vec<CheckItem> {
    let mut items = Vec::new();

    let cache_control = headers.get("cache-control");
    items.push(match cache_control {
        Some(value) => CheckItem::new(
            "Cache Control",
            CheckStatus::Success,
            format!("Cache-Control header present: {}", value),
        )
        .with_preview(value),
        None => CheckItem::new(
            "Cache Control",
            CheckStatus::Warning,
            "Cache-Control header is missing (recommended for better performance)",
        ),
    });

    let html_size_kb = (html.len() as f64 / 1024.0).round() as u64;
    let (size_status, size_message) = if html_size_kb < SIZE_GOOD_KB {
        (
            CheckStatus::Success,
            format!("HTML size is good ({} KB)", html_size_kb),
        )
    } else if html_size_kb < SIZE_ACCEPTABLE_KB {
        (
            CheckStatus::Warning,
            format!("HTML size is acceptable ({} KB)", html_size_kb),
        )
    } else {
        (
            CheckStatus::Error,
            format!(
                "HTML size is too large ({} KB, recommended: < 100 KB)",
                html_size_kb
            ),
        )
    };
    items.push(
        CheckItem::new("HTML Size", size_status, size_message)
            .with_preview(format!("{} KB", html_size_kb)),
    );

    // Heuristic only: inline blocks carrying comments are a strong hint that
    // the page ships unminified assets.
    let block_comment = Regex::new(r"(?s)/\*.*?\*/").unwrap();
    let css_minified = !html.contains("</style>") || !block_comment.is_match(html);
    items.push(CheckItem::new(
        "CSS Minification",
        if css_minified {
            CheckStatus::Success
        } else {
            CheckStatus::Warning
        },
        if css_minified {
            "CSS appears to be minified or loaded externally"
        } else {
            "CSS might not be minified (detected comments or inline styles)"
        },
    ));

    let line_comment = Regex::new(r"(?s)//.*?\n").unwrap();
    let js_minified = !html.contains("</script>") || !line_comment.is_match(html);
    items.push(CheckItem::new(
        "JS Minification",
        if js_minified {
            CheckStatus::Success
        } else {
            CheckStatus::Warning
        },
        if js_minified {
            "JavaScript appears to be minified or loaded externally"
        } else {
            "JavaScript might not be minified (detected comments or inline scripts)"
        },
    ));

    let content_encoding = headers.get("content-encoding");
    let compressed = content_encoding
        .map(|value| value.contains("gzip") || value.contains("br"))
        .unwrap_or(false);
    items.push(match (compressed, content_encoding) {
        (true, Some(value)) => CheckItem::new(
            "Compression",
            CheckStatus::Success,
            format!("Content compression is enabled: {}", value),
        )
        .with_preview(value),
        (_, encoding) => CheckItem::new(
            "Compression",
            CheckStatus::Warning,
            "Content compression (gzip/brotli) may not be enabled",
        )
        .with_preview_opt(encoding.map(str::to_string)),
    });

    items
}

// ============================================================================
// Tests
// ============================================================================
