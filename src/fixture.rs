//! Fixture report for offline development
//!
//! A structurally complete, plausible-looking report used when the server
//! runs with fixture data enabled, so the rest of the stack can be exercised
//! without touching the network. Scores are fixed; only the URL and the
//! timestamp vary.

use chrono::Utc;

use crate::checks::{CheckItem, CheckStatus};
use crate::report::{AnalysisResult, Category};

use CheckStatus::{Error, Success, Warning};

/// Build a fixture report for `url`.
pub fn fixture_result(url: &str) -> AnalysisResult {
    let categories = vec![
        Category {
            name: "Metadata".to_string(),
            score: 85,
            items: vec![
                CheckItem::new(
                    "Title",
                    Success,
                    "Title present with optimal length (54 characters)",
                )
                .with_preview("Website Analyzer - Check your website for publishing requirements"),
                CheckItem::new(
                    "Meta Description",
                    Success,
                    "Meta description present with optimal length (142 characters)",
                )
                .with_preview(
                    "Our website analyzer checks for common oversights in website publishing, \
                     from SEO essentials to performance optimizations. Get a comprehensive \
                     report in seconds.",
                ),
                CheckItem::new(
                    "Meta Keywords",
                    Warning,
                    "Meta keywords not present (not critical for SEO but may help with some search engines)",
                ),
                CheckItem::new("Canonical URL", Success, format!("Canonical URL present: {}", url))
                    .with_preview(url),
                CheckItem::new(
                    "Viewport",
                    Success,
                    "Viewport tag present: width=device-width, initial-scale=1.0",
                )
                .with_preview("width=device-width, initial-scale=1.0"),
                CheckItem::new("Character Set", Success, "Character set specified: UTF-8")
                    .with_preview("UTF-8"),
                CheckItem::new("Language", Success, "Language specified: en").with_preview("en"),
            ],
        },
        Category {
            name: "Favicon".to_string(),
            score: 67,
            items: vec![
                CheckItem::new(
                    "Standard Favicon",
                    Success,
                    "Standard favicon present: /favicon.ico",
                )
                .with_preview("/favicon.ico"),
                CheckItem::new(
                    "Apple Touch Icon",
                    Warning,
                    "Apple Touch Icon is missing (recommended for iOS devices)",
                ),
                CheckItem::new(
                    "Web App Manifest",
                    Warning,
                    "Web App Manifest is missing (recommended for PWA support)",
                ),
            ],
        },
        Category {
            name: "Social Media".to_string(),
            score: 50,
            items: vec![
                CheckItem::new("OG Title", Success, "Open Graph title present: Example Website")
                    .with_preview("Example Website"),
                CheckItem::new("OG Description", Success, "Open Graph description present")
                    .with_preview("This is an example website description for social media sharing"),
                CheckItem::new(
                    "OG Image",
                    Warning,
                    "Open Graph image is missing (recommended for social media sharing)",
                ),
                CheckItem::new(
                    "OG URL",
                    Warning,
                    "Open Graph URL is missing (recommended for social media sharing)",
                ),
                CheckItem::new(
                    "Twitter Card",
                    Warning,
                    "Twitter Card is missing (recommended for Twitter sharing)",
                ),
                CheckItem::new(
                    "Twitter Image",
                    Warning,
                    "Twitter Image is missing (recommended for Twitter sharing)",
                ),
            ],
        },
        Category {
            name: "SEO Files".to_string(),
            score: 75,
            items: vec![
                CheckItem::new("robots.txt", Success, "robots.txt file found")
                    .with_preview("User-agent: *\nAllow: /\nDisallow: /admin/\nSitemap: /sitemap.xml"),
                CheckItem::new("sitemap.xml", Success, "sitemap.xml file found").with_preview(
                    "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">\n  <url>\n    <loc>https://example.com/</loc>\n  </url>\n</urlset>",
                ),
                CheckItem::new(
                    "humans.txt",
                    Warning,
                    "humans.txt file not found (optional but recommended)",
                ),
                CheckItem::new(
                    "security.txt",
                    Warning,
                    "security.txt file not found (optional but recommended for security contacts)",
                ),
            ],
        },
        Category {
            name: "Performance".to_string(),
            score: 90,
            items: vec![
                CheckItem::new(
                    "Cache Control",
                    Success,
                    "Cache-Control header present: max-age=3600, public",
                )
                .with_preview("max-age=3600, public"),
                CheckItem::new("HTML Size", Success, "HTML size is good (42 KB)"),
                CheckItem::new(
                    "CSS Minification",
                    Success,
                    "CSS appears to be minified or loaded externally",
                ),
                CheckItem::new(
                    "JS Minification",
                    Success,
                    "JavaScript appears to be minified or loaded externally",
                ),
                CheckItem::new(
                    "Compression",
                    Warning,
                    "Content compression (gzip/brotli) may not be enabled",
                ),
            ],
        },
        Category {
            name: "AI Integration".to_string(),
            score: 33,
            items: vec![
                CheckItem::new("LLM.txt", Error, "No llm.txt file found"),
                CheckItem::new(
                    "AI Meta Tags",
                    Warning,
                    "No AI-related meta tags found (optional but becoming more common)",
                ),
                CheckItem::new("Structured Data", Success, "Found 2 structured data blocks")
                    .with_preview(
                        "{\n  \"@context\": \"https://schema.org\",\n  \"@type\": \"WebSite\",\n  \"name\": \"Example Website\",\n  \"url\": \"https://example.com\"\n}",
                    ),
            ],
        },
        Category {
            name: "Security".to_string(),
            score: 80,
            items: vec![
                CheckItem::new("HTTPS", Success, "Website is served over HTTPS"),
                CheckItem::new(
                    "Content Security Policy",
                    Warning,
                    "Content Security Policy header is missing (recommended for better security)",
                ),
                CheckItem::new(
                    "X-Content-Type-Options",
                    Success,
                    "X-Content-Type-Options header is properly set",
                )
                .with_preview("nosniff"),
                CheckItem::new(
                    "X-XSS-Protection",
                    Success,
                    "X-XSS-Protection header is set: 1; mode=block",
                )
                .with_preview("1; mode=block"),
                CheckItem::new(
                    "HTTP Strict Transport Security",
                    Warning,
                    "HSTS header is missing (recommended for HTTPS security)",
                ),
            ],
        },
    ];

    AnalysisResult {
        url: url.to_string(),
        overall_score: 78,
        categories,
        timestamp: Utc::now(),
    }
}

// ============================================================================
// Tests
// ============================================================================
