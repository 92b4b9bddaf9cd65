//! Security checks: HTTPS and protective response headers

use super::{CheckItem, CheckStatus};
use crate::headers::HeaderDict;

/// Run the security checks over the response headers.
///
/// HTTPS is inferred from the forwarded-protocol headers rather than the
/// request scheme: the analyzer may sit behind a proxy, and the headers
/// describe what the origin actually served.
pub fn check_security(headers: &HeaderDict) -> Vec<CheckItem> {
    let mut items = Vec::new();

    let is_https = headers.get("x-forwarded-proto") == Some("https")
        || headers.get("x-forwarded-protocol") == Some("https");
    items.push(if is_https {
        CheckItem::new("HTTPS", CheckStatus::Success, "Website is served over HTTPS")
    } else {
        CheckItem::new(
            "HTTPS",
            CheckStatus::Error,
            "Website is not served over HTTPS (strongly recommended for security)",
        )
    });

    let csp = headers.get("content-security-policy");
    items.push(match csp {
        Some(value) => CheckItem::new(
            "Content Security Policy",
            CheckStatus::Success,
            "Content Security Policy is implemented",
        )
        .with_preview(value),
        None => CheckItem::new(
            "Content Security Policy",
            CheckStatus::Warning,
            "Content Security Policy header is missing (recommended for better security)",
        ),
    });

    let content_type_options = headers.get("x-content-type-options");
    items.push(if content_type_options == Some("nosniff") {
        CheckItem::new(
            "X-Content-Type-Options",
            CheckStatus::Success,
            "X-Content-Type-Options header is properly set",
        )
        .with_preview("nosniff")
    } else {
        CheckItem::new(
            "X-Content-Type-Options",
            CheckStatus::Warning,
            "X-Content-Type-Options header is missing or not set to nosniff",
        )
        .with_preview_opt(content_type_options.map(str::to_string))
    });

    let xss_protection = headers.get("x-xss-protection");
    items.push(match xss_protection {
        Some(value) => CheckItem::new(
            "X-XSS-Protection",
            CheckStatus::Success,
            format!("X-XSS-Protection header is set: {}", value),
        )
        .with_preview(value),
        None => CheckItem::new(
            "X-XSS-Protection",
            CheckStatus::Warning,
            "X-XSS-Protection header is missing",
        ),
    });

    let hsts = headers.get("strict-transport-security");
    items.push(match hsts {
        Some(value) => CheckItem::new(
            "HTTP Strict Transport Security",
            CheckStatus::Success,
            "HSTS header is implemented",
        )
        .with_preview(value),
        None => CheckItem::new(
            "HTTP Strict Transport Security",
            CheckStatus::Warning,
            "HSTS header is missing (recommended for HTTPS security)",
        ),
    });

    items
}

// ============================================================================
// Tests
// ============================================================================
