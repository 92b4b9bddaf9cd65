//! Compliance checks
//!
//! One module per category. Every check is a pure function over the parsed
//! document, the response headers and/or the raw markup; absence of a signal
//! is reported as a `warning` or `error` item, never as a failure. Item
//! order inside a category is registration order and is part of the wire
//! contract.

pub mod ai;
pub mod favicon;
pub mod metadata;
pub mod performance;
pub mod security;
pub mod seo_files;
pub mod social;

pub use ai::check_ai_integration;
pub use favicon::check_favicon;
pub use metadata::check_metadata;
pub use performance::check_performance;
pub use security::check_security;
pub use seo_files::check_seo_files;
pub use social::check_social_media;

use serde::{Deserialize, Serialize};

/// Outcome of a single check
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CheckStatus {
    /// Fully satisfied
    Success,
    /// Present but suboptimal, or absent but non-critical
    Warning,
    /// Absent and required
    Error,
}

/// A single check result
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckItem {
    /// Stable check identifier (e.g. "Title")
    pub name: String,
    /// Outcome
    pub status: CheckStatus,
    /// Human-readable explanation of the finding
    pub message: String,
    /// Literal extracted value, when one exists. Populated at
    /// check-authoring time so no consumer has to re-parse `message`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preview: Option<String>,
}

impl CheckItem {
    /// Create a check item without a preview
    pub fn new(name: &str, status: CheckStatus, message: impl Into<String>) -> Self {
        Self {
            name: name.to_string(),
            status,
            message: message.into(),
            preview: None,
        }
    }

    /// Attach the literal extracted value
    pub fn with_preview(mut self, preview: impl Into<String>) -> Self {
        self.preview = Some(preview.into());
        self
    }

    /// Attach the literal extracted value when one exists
    pub fn with_preview_opt(mut self, preview: Option<String>) -> Self {
        self.preview = preview;
        self
    }
}

// ============================================================================
// Tests
// ============================================================================
