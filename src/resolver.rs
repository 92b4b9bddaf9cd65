//! Relative-to-absolute URL resolution
//!
//! Pages reference icons, canonical URLs and social images with every flavor
//! of relative reference. Checks surface those values as absolute URLs so a
//! consumer can use them directly.

use url::Url;

/// Resolve a possibly-relative `reference` against the page's `base_url`.
///
/// - an empty reference resolves to an empty string
/// - an already-absolute `http(s)` reference is returned unchanged
/// - a protocol-relative reference (`//cdn.example/x.png`) is prefixed with
///   the scheme of the base URL
/// - anything else goes through standard RFC 3986 resolution against the base
///
/// When the base or the reference is malformed the function falls back to
/// naive concatenation (base without trailing slash, reference with exactly
/// one leading slash). It never fails.
pub fn resolve(base_url: &str, reference: &str) -> String {
    if reference.is_empty() {
        return String::new();
    }

    if reference.starts_with("http://") || reference.starts_with("https://") {
        return reference.to_string();
    }

    if let Some(rest) = reference.strip_prefix("//") {
        let scheme = if base_url.starts_with("http://") {
            "http"
        } else {
            "https"
        };
        return format!("{}://{}", scheme, rest);
    }

    match Url::parse(base_url).and_then(|base| base.join(reference)) {
        Ok(resolved) => resolved.to_string(),
        Err(_) => naive_join(base_url, reference),
    }
}

/// Concatenation fallback for malformed inputs: one slash between the parts,
/// no more, no fewer.
fn naive_join(base_url: &str, reference: &str) -> String {
    let base = base_url.strip_suffix('/').unwrap_or(base_url);
    let reference = reference.trim_start_matches('/');
    format!("{}/{}", base, reference)
}

// ============================================================================
// Tests
// ============================================================================
