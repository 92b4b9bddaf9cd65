//! HTTP handlers for the sitelens server
//!
//! - [`analyze`] - the `GET /api/analyze` endpoint running the full pipeline
//! - [`status`] - liveness endpoint

pub mod analyze;
pub mod status;

pub use analyze::{analyze_handler, analyze_router, AppState};
pub use status::{health_handler, status_router};
