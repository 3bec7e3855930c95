//! HTTP client for the remote recipe API.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{StatusCode, header::AUTHORIZATION};
use tracing::debug;

use super::model::RecipeDto;
use super::source::{RecipeSource, SourceError, SourceResult};

/// Fetches recipes from `{base_url}/recipe/get/?id={id}`.
///
/// The credential is sent unchanged as the `Authorization` header, so callers
/// pass the full scheme (e.g. `Token abc123`).
#[derive(Clone)]
pub struct HttpRecipeSource {
    client: reqwest::Client,
    base_url: String,
}

impl HttpRecipeSource {
    /// Builds a client with the given request timeout.
    ///
    /// # Errors
    ///
    /// Returns [`SourceError::Transport`] if the TLS backend cannot be initialized.
    pub fn new(base_url: &str, timeout: Duration) -> SourceResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| SourceError::Transport(e.to_string()))?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    fn recipe_url(&self) -> String {
        format!("{}/recipe/get/", self.base_url)
    }
}

fn map_reqwest_error(e: reqwest::Error) -> SourceError {
    if e.is_decode() {
        SourceError::Decode(e.to_string())
    } else {
        SourceError::Transport(e.to_string())
    }
}

#[async_trait]
impl RecipeSource for HttpRecipeSource {
    async fn get(&self, token: &str, id: i32) -> SourceResult<RecipeDto> {
        debug!(recipe_id = id, "Fetching recipe from remote source");

        let response = self
            .client
            .get(self.recipe_url())
            .query(&[("id", id)])
            .header(AUTHORIZATION, token)
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status();
        match status {
            s if s.is_success() => response.json::<RecipeDto>().await.map_err(map_reqwest_error),
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                let body = response.text().await.unwrap_or_default();
                Err(SourceError::Unauthorized(if body.is_empty() {
                    status.to_string()
                } else {
                    body
                }))
            }
            StatusCode::NOT_FOUND => Err(SourceError::NotFound { id }),
            _ => {
                let message = response.text().await.unwrap_or_default();
                Err(SourceError::Status {
                    status: status.as_u16(),
                    message,
                })
            }
        }
    }
}
