//! Liveness endpoint

use axum::{response::IntoResponse, routing::get, Json, Router};
use chrono::Utc;

/// Handle `GET /health`
pub async fn health_handler() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "service": "sitelens",
        "timestamp": Utc::now().to_rfc3339(),
    }))
}

/// Create the status router
pub fn status_router() -> Router {
    Router::new().route("/health", get(health_handler))
}
