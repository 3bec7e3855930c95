//! Process-local cache implementation.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::debug;

use super::model::RecipeRecord;
use super::store::{CacheResult, RecipeCache};

/// A cache that keeps records in a map for the lifetime of the process.
///
/// # Use Cases
///
/// - Development without Postgres or Redis (`CACHE_BACKEND=memory`)
/// - Integration tests of the retrieval pipeline
#[derive(Default)]
pub struct InMemoryRecipeCache {
    records: RwLock<HashMap<i32, RecipeRecord>>,
}

impl InMemoryRecipeCache {
    pub fn new() -> Self {
        debug!("Using in-memory recipe cache");
        Self::default()
    }

    /// Creates a cache pre-populated with `records`.
    pub fn with_records(records: impl IntoIterator<Item = RecipeRecord>) -> Self {
        let records = records.into_iter().map(|r| (r.id, r)).collect();
        Self {
            records: RwLock::new(records),
        }
    }

    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }
}

#[async_trait]
impl RecipeCache for InMemoryRecipeCache {
    async fn get_recipe_by_id(&self, id: i32) -> CacheResult<Option<RecipeRecord>> {
        Ok(self.records.read().await.get(&id).cloned())
    }

    async fn insert_recipe(&self, record: RecipeRecord) -> CacheResult<()> {
        self.records.write().await.insert(record.id, record);
        Ok(())
    }

    async fn health_check(&self) -> bool {
        true
    }
}
