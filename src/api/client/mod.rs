//! `reqwest`-backed joke service client.

mod transport;

pub use transport::joke_url;

use super::{JokeResponse, JokeService};
use crate::config::ServiceConfig;
use crate::error::ApiError;
use crate::joke::Category;
use async_trait::async_trait;
use std::time::Duration;
use tracing::debug;

/// Client for the public joke API.
pub struct JokeApiClient {
    http: reqwest::Client,
    base_url: String,
    safe_mode: bool,
}

impl JokeApiClient {
    /// Build a client from resolved service configuration.
    pub fn new(config: &ServiceConfig) -> Self {
        let timeout = Duration::from_secs(config.timeout_secs.max(1));
        Self::with_timeout(config, timeout)
    }

    fn with_timeout(config: &ServiceConfig, timeout: Duration) -> Self {
        Self {
            http: transport::build_http_client(timeout),
            base_url: config.base_url.trim_end_matches('/').to_string(),
            safe_mode: config.safe_mode,
        }
    }

    /// Fetch one joke for `category`.
    ///
    /// The body is decoded whatever the status, so a service error payload
    /// on a 4xx reaches the caller as `error: true`. A body that does not
    /// decode is `Status` on a non-2xx response and `Decode` otherwise.
    pub async fn fetch(&self, category: Category) -> Result<JokeResponse, ApiError> {
        let url = joke_url(&self.base_url, category, self.safe_mode);
        debug!(%url, "requesting joke");
        let raw = transport::get_body(&self.http, &url).await?;
        let response: JokeResponse = match serde_json::from_str(&raw.body) {
            Ok(response) => response,
            Err(_) if !raw.status.is_success() => {
                return Err(ApiError::Status(raw.status.as_u16(), raw.body));
            }
            Err(err) => return Err(err.into()),
        };
        debug!(
            status = raw.status.as_u16(),
            id = ?response.id,
            error = response.error,
            "joke received"
        );
        Ok(response)
    }
}

#[async_trait]
impl JokeService for JokeApiClient {
    async fn fetch(&self, category: Category) -> Result<JokeResponse, ApiError> {
        JokeApiClient::fetch(self, category).await
    }
}
