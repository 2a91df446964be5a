//! HTTP client for the joke service.
//!
//! - `client`: the `reqwest`-backed [`JokeApiClient`]
//! - response shape and its mapping to a displayable [`Joke`] live here

use crate::error::ApiError;
use crate::joke::{Category, Joke};
use async_trait::async_trait;
use serde::Deserialize;

mod client;

pub use client::{joke_url, JokeApiClient};

/// Joke source used by the widget.
///
/// This trait lets tests provide deterministic responses without network
/// calls while the production path uses [`JokeApiClient`].
#[async_trait]
pub trait JokeService: Send + Sync {
    async fn fetch(&self, category: Category) -> Result<JokeResponse, ApiError>;
}

/// Joke kind reported by the service.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JokeKind {
    Single,
    #[default]
    #[serde(other)]
    Twopart,
}

/// Response body returned by the joke service.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct JokeResponse {
    pub error: bool,
    #[serde(rename = "type")]
    pub kind: JokeKind,
    pub id: Option<u64>,
    pub joke: Option<String>,
    pub setup: Option<String>,
    pub delivery: Option<String>,
}

impl JokeResponse {
    /// Map the response to display text.
    ///
    /// An error flag wins over every other field. Anything that is not a
    /// single-part joke is rendered as setup and delivery separated by a
    /// blank line.
    pub fn into_joke(self) -> Joke {
        if self.error {
            return Joke::service_error();
        }
        match self.kind {
            JokeKind::Single => Joke::new(self.joke.unwrap_or_default(), self.id),
            JokeKind::Twopart => Joke::new(
                format!(
                    "{}\n\n{}",
                    self.setup.unwrap_or_default(),
                    self.delivery.unwrap_or_default()
                ),
                self.id,
            ),
        }
    }
}
