//! Page retrieval
//!
//! One bounded GET per analysis. On timeout or transport failure the whole
//! request fails with a single terminal error — no retry, no backoff, no
//! partial result.

use std::time::Duration;

use reqwest::Client;
use tracing::{debug, instrument};

use crate::error::ApiError;
use crate::headers::HeaderDict;

/// An immutable snapshot of a fetched page: everything the check modules
/// are allowed to see.
#[derive(Debug, Clone)]
pub struct FetchedPage {
    /// Raw markup text of the response body
    pub body: String,
    /// Final HTTP status after redirects
    pub status: u16,
    /// Response headers, case-insensitive
    pub headers: HeaderDict,
}

/// Retrieve `url` with the given per-request timeout.
#[instrument(skip(client), fields(url = %url))]
pub async fn fetch_page(
    client: &Client,
    url: &str,
    timeout: Duration,
) -> Result<FetchedPage, ApiError> {
    let response = client
        .get(url)
        .timeout(timeout)
        .send()
        .await
        .map_err(|source| ApiError::Fetch {
            url: url.to_string(),
            source,
        })?;

    let status = response.status().as_u16();
    let headers: HeaderDict = response
        .headers()
        .iter()
        .map(|(name, value)| (name.as_str(), value.to_str().unwrap_or_default()))
        .collect();

    let body = response.text().await.map_err(|source| ApiError::Fetch {
        url: url.to_string(),
        source,
    })?;

    debug!(status, bytes = body.len(), "page fetched");

    Ok(FetchedPage {
        body,
        status,
        headers,
    })
}

// ============================================================================
// Tests
// ============================================================================
