//! API error types with HTTP status mapping
//!
//! The endpoint has exactly two user-visible failure modes: a missing `url`
//! parameter and a failed page retrieval. Everything else degrades into
//! `warning`/`error` items inside an otherwise-successful report.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use metrics::counter;
use thiserror::Error;
use tracing::warn;

/// Errors surfaced by the analyze endpoint
#[derive(Debug, Error)]
pub enum ApiError {
    /// Caller omitted the `url` query parameter
    #[error("URL parameter is required")]
    MissingUrl,

    /// Network failure or timeout while retrieving the page
    #[error("Failed to fetch {url}: {source}")]
    Fetch {
        /// The URL that was being retrieved
        url: String,
        /// The underlying transport error
        #[source]
        source: reqwest::Error,
    },
}

impl ApiError {
    /// HTTP status this error maps to
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::MissingUrl => StatusCode::BAD_REQUEST,
            ApiError::Fetch { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_type(&self) -> &'static str {
        match self {
            ApiError::MissingUrl => "missing_url",
            ApiError::Fetch { .. } => "fetch_failed",
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let message = self.to_string();

        counter!("analyze_errors_total", "type" => self.error_type()).increment(1);
        warn!(%status, error = %message, "request failed");

        let body = serde_json::json!({ "error": message });
        (status, Json(body)).into_response()
    }
}

// ============================================================================
// Tests
// ============================================================================
