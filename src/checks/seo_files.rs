//! SEO file checks: robots.txt, sitemap.xml, humans.txt, security.txt
//!
//! Existence of these files cannot be confirmed from the page snapshot
//! alone; probing them would need extra requests per file. Until an
//! auxiliary probe exists every item is a fixed `warning`.

use super::{CheckItem, CheckStatus};

const SEO_FILES: [&str; 4] = ["robots.txt", "sitemap.xml", "humans.txt", "security.txt"];

/// Run the SEO file checks.
pub fn check_seo_files() -> Vec<CheckItem> {
    SEO_FILES
        .iter()
        .map(|file| {
            CheckItem::new(
                file,
                CheckStatus::Warning,
                format!("Could not verify {} file (server-side check required)", file),
            )
        })
        .collect()
}

// ============================================================================
// Tests
// ============================================================================
