//! Cache store trait and error types.

use async_trait::async_trait;

use super::model::RecipeRecord;

/// Errors that can occur during cache operations.
#[derive(Debug, thiserror::Error)]
pub enum CacheError {
    #[error("Cache connection error: {0}")]
    Connection(String),
    #[error("Cache operation error: {0}")]
    Operation(String),
    #[error("Cache serialization error: {0}")]
    Serialization(String),
}

/// Result type for cache operations.
pub type CacheResult<T> = Result<T, CacheError>;

/// Local store of recipes keyed by id.
///
/// Implementations must be safe for concurrent use; the retrieval pipeline
/// performs no locking of its own. Errors are returned to the caller rather
/// than swallowed, since a failed read or write ends the retrieval.
///
/// # Implementations
///
/// - [`crate::infrastructure::cache::PgRecipeCache`] - PostgreSQL table
/// - [`crate::infrastructure::cache::RedisRecipeCache`] - Redis JSON values
/// - [`crate::infrastructure::cache::InMemoryRecipeCache`] - process-local map
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RecipeCache: Send + Sync {
    /// Looks up a recipe record by id.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(record))` if cached
    /// - `Ok(None)` if not cached
    ///
    /// # Errors
    ///
    /// Returns [`CacheError`] when the backing store cannot be read.
    async fn get_recipe_by_id(&self, id: i32) -> CacheResult<Option<RecipeRecord>>;

    /// Stores a record, replacing any existing record with the same id.
    ///
    /// # Errors
    ///
    /// Returns [`CacheError`] when the backing store cannot be written.
    async fn insert_recipe(&self, record: RecipeRecord) -> CacheResult<()>;

    /// Checks if the cache backend is reachable.
    async fn health_check(&self) -> bool;
}
