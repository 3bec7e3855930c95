//! Local recipe store consulted before the remote source.
//!
//! Provides a [`RecipeCache`] trait with three implementations:
//! - [`PgRecipeCache`] - PostgreSQL table, the default backend
//! - [`RedisRecipeCache`] - Redis JSON values
//! - [`InMemoryRecipeCache`] - process-local map for development and tests

mod memory_recipe_cache;
mod model;
mod pg_recipe_cache;
mod redis_recipe_cache;
mod store;

pub use memory_recipe_cache::InMemoryRecipeCache;
pub use model::{RecipeRecord, RecipeRecordMapper};
pub use pg_recipe_cache::PgRecipeCache;
pub use redis_recipe_cache::RedisRecipeCache;
pub use store::{CacheError, CacheResult, RecipeCache};

#[cfg(test)]
pub use store::MockRecipeCache;
