//! Sitelens - Web Page Compliance Analyzer
//!
//! This crate fetches a single web page, inspects its markup and HTTP
//! response headers, and produces a structured compliance report: seven
//! categories of independent checks, each item carrying a status and a
//! human-readable message, rolled up into per-category and overall weighted
//! scores.
//!
//! # Features
//!
//! - **Fixed check catalog**: Metadata, Favicon, Social Media, SEO Files,
//!   Performance, AI Integration and Security categories
//! - **URL Resolution**: relative icon/canonical/social references are
//!   surfaced as absolute URLs
//! - **Weighted Scoring**: success counts full, warning half; the overall
//!   score is computed over the flattened item set
//! - **HTTP API**: `GET /api/analyze?url=...` returning the report as JSON
//! - **Fixture Mode**: a structurally complete offline report for
//!   development, selected by explicit configuration
//! - **Error Handling**: two terminal failures only (missing parameter,
//!   failed retrieval); every other absence degrades into a warning/error
//!   item inside a successful report
//!
//! # Architecture
//!
//! ```text
//! GET /api/analyze?url=…
//!         │
//!         ▼
//!   ┌──────────┐     ┌────────────────────┐
//!   │ Fetcher  │────▶│ Page snapshot      │
//!   │ (reqwest)│     │ (markup + headers) │
//!   └──────────┘     └─────────┬──────────┘
//!                              ▼
//!               ┌───────────────────────────┐
//!               │ 7 check modules           │
//!               │ (document/header access)  │
//!               └─────────────┬─────────────┘
//!                             ▼
//!                  ┌────────────────────┐
//!                  │ Scorer + Assembler │──▶ AnalysisResult JSON
//!                  └────────────────────┘
//! ```
//!
//! # Quick Start
//!
//! ```rust
//! use sitelens::headers::HeaderDict;
//! use sitelens::report::analyze_snapshot;
//!
//! let headers: HeaderDict = [("x-forwarded-proto", "https")].into_iter().collect();
//! let result = analyze_snapshot(
//!     "https://example.com",
//!     "<html><head><title>An example page title</title></head></html>",
//!     &headers,
//! );
//!
//! assert_eq!(result.categories.len(), 7);
//! assert!(result.overall_score <= 100);
//! ```

pub mod checks;
pub mod config;
pub mod document;
pub mod error;
pub mod fetcher;
pub mod fixture;
pub mod handlers;
pub mod headers;
pub mod report;
pub mod resolver;
pub mod score;

// Re-exports for convenience
pub use checks::{CheckItem, CheckStatus};
pub use config::AnalyzerConfig;
pub use document::PageDocument;
pub use error::ApiError;
pub use fetcher::{fetch_page, FetchedPage};
pub use handlers::{analyze_router, status_router, AppState};
pub use headers::HeaderDict;
pub use report::{analyze_snapshot, AnalysisResult, Category};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
