//! Analyze endpoint handler
//!
//! `GET /api/analyze?url=<absolute-url>` fetches the page, runs the seven
//! check categories over the snapshot and returns the scored report.
//!
//! # Error Handling
//!
//! - `400 Bad Request` - missing `url` query parameter
//! - `500 Internal Server Error` - page retrieval failed or timed out

use std::sync::Arc;
use std::time::Instant;

use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};
use metrics::{counter, histogram};
use serde::Deserialize;
use tracing::{info, instrument};

use crate::config::AnalyzerConfig;
use crate::error::ApiError;
use crate::fetcher;
use crate::fixture;
use crate::report::{self, AnalysisResult};

/// Shared state for the analyze handler
#[derive(Clone)]
pub struct AppState {
    /// Connection-pooling HTTP client reused across requests
    pub client: reqwest::Client,
    /// Pipeline configuration
    pub config: AnalyzerConfig,
}

impl AppState {
    /// Create state with the given configuration
    pub fn new(config: AnalyzerConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(AnalyzerConfig::default())
    }
}

/// Query parameters of the analyze endpoint
#[derive(Debug, Deserialize)]
pub struct AnalyzeQuery {
    /// The page to analyze; absence is a 400
    #[serde(default)]
    url: Option<String>,
}

/// Handle `GET /api/analyze`
#[instrument(skip(state, query))]
pub async fn analyze_handler(
    State(state): State<Arc<AppState>>,
    Query(query): Query<AnalyzeQuery>,
) -> Result<Json<AnalysisResult>, ApiError> {
    let url = query.url.ok_or(ApiError::MissingUrl)?;
    let start = Instant::now();
    info!(%url, "analyzing page");

    if state.config.use_fixture_data {
        return Ok(Json(fixture::fixture_result(&url)));
    }

    let page = fetcher::fetch_page(&state.client, &url, state.config.fetch_timeout).await?;
    let result = report::analyze_snapshot(&url, &page.body, &page.headers);

    counter!("analyses_total").increment(1);
    histogram!("analyze_duration_seconds").record(start.elapsed().as_secs_f64());
    info!(
        %url,
        status = page.status,
        overall_score = result.overall_score,
        elapsed_ms = start.elapsed().as_millis() as u64,
        "analysis complete"
    );

    Ok(Json(result))
}

/// Create the analyze router
pub fn analyze_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/analyze", get(analyze_handler))
        .with_state(state)
}

// ============================================================================
// Tests
// ============================================================================
