//! HTTP transport helpers for joke requests.

use crate::error::ApiError;
use crate::joke::Category;
use std::time::Duration;

/// Query flag asking the service to filter unsafe content.
const SAFE_MODE_QUERY: &str = "safe-mode";

/// Build an HTTP client with timeout applied.
pub(super) fn build_http_client(timeout: Duration) -> reqwest::Client {
    // Fall back to reqwest defaults if builder creation fails for any reason.
    reqwest::Client::builder()
        .timeout(timeout)
        .build()
        .unwrap_or_else(|_| reqwest::Client::new())
}

/// Request URL for one category: `{base}/{Category}` plus the safe-mode flag.
pub fn joke_url(base_url: &str, category: Category, safe_mode: bool) -> String {
    let base = base_url.trim_end_matches('/');
    if safe_mode {
        format!("{base}/{category}?{SAFE_MODE_QUERY}")
    } else {
        format!("{base}/{category}")
    }
}

/// Status and body of one response, whatever the status.
#[derive(Debug)]
pub(super) struct RawResponse {
    pub status: reqwest::StatusCode,
    pub body: String,
}

/// Issue one GET and read the body. Only network failures are errors here;
/// the service puts its own error payloads on 4xx responses.
pub(super) async fn get_body(http: &reqwest::Client, url: &str) -> Result<RawResponse, ApiError> {
    let response = http.get(url).send().await?;
    let status = response.status();
    let body = response.text().await?;
    Ok(RawResponse { status, body })
}
