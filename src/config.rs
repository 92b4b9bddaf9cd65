//! Analyzer configuration

use std::time::Duration;

/// Default bound on a single page retrieval
pub const DEFAULT_FETCH_TIMEOUT_SECS: u64 = 10;

/// Configuration for the analysis pipeline
#[derive(Debug, Clone)]
pub struct AnalyzerConfig {
    /// How long a page retrieval may take before the request is aborted
    pub fetch_timeout: Duration,
    /// Serve fixture results instead of fetching — explicit configuration,
    /// never ambient process state
    pub use_fixture_data: bool,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            fetch_timeout: Duration::from_secs(DEFAULT_FETCH_TIMEOUT_SECS),
            use_fixture_data: false,
        }
    }
}
