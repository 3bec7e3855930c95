//! Remote source trait and error types.

use async_trait::async_trait;

use super::model::RecipeDto;

/// Errors raised while fetching a recipe from the remote API.
///
/// Messages are surfaced to callers verbatim.
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("Not authorized to fetch recipe: {0}")]
    Unauthorized(String),
    #[error("Recipe {id} not found on remote source")]
    NotFound { id: i32 },
    #[error("Remote source returned {status}: {message}")]
    Status { status: u16, message: String },
    #[error("{0}")]
    Transport(String),
    #[error("Failed to decode recipe payload: {0}")]
    Decode(String),
}

/// Result type for remote source operations.
pub type SourceResult<T> = Result<T, SourceError>;

/// Authenticated fetch of a single recipe by id.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RecipeSource: Send + Sync {
    /// Fetches the wire representation of recipe `id` using `token` as credential.
    ///
    /// # Errors
    ///
    /// Any transport, authorization, or not-found failure is a [`SourceError`].
    async fn get(&self, token: &str, id: i32) -> SourceResult<RecipeDto>;
}
