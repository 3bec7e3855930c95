//! Redis-backed recipe cache.

use async_trait::async_trait;
use redis::{AsyncCommands, Client, aio::ConnectionManager};
use tracing::{debug, info};

use super::model::RecipeRecord;
use super::store::{CacheError, CacheResult, RecipeCache};

/// Redis cache storing each recipe as a JSON value under `recipe:{id}`.
///
/// Keys carry no TTL. Errors are propagated, unlike a fail-open lookup cache,
/// because this store is the source of truth for what callers receive.
pub struct RedisRecipeCache {
    client: ConnectionManager,
    key_prefix: String,
}

impl RedisRecipeCache {
    /// Connects to Redis and validates the connection with a PING.
    ///
    /// # Errors
    ///
    /// Returns [`CacheError::Connection`] if the URL is invalid, the connection cannot
    /// be established, or the PING fails.
    pub async fn connect(redis_url: &str) -> CacheResult<Self> {
        info!("Connecting to Redis");

        let client = Client::open(redis_url)
            .map_err(|e| CacheError::Connection(format!("Failed to create Redis client: {}", e)))?;

        let manager = ConnectionManager::new(client)
            .await
            .map_err(|e| CacheError::Connection(format!("Failed to connect to Redis: {}", e)))?;

        let mut test_conn = manager.clone();
        test_conn
            .ping::<()>()
            .await
            .map_err(|e| CacheError::Connection(format!("Redis PING failed: {}", e)))?;

        info!("✓ Connected to Redis");

        Ok(Self {
            client: manager,
            key_prefix: "recipe:".to_string(),
        })
    }

    fn build_key(&self, id: i32) -> String {
        format!("{}{}", self.key_prefix, id)
    }
}

#[async_trait]
impl RecipeCache for RedisRecipeCache {
    async fn get_recipe_by_id(&self, id: i32) -> CacheResult<Option<RecipeRecord>> {
        let key = self.build_key(id);
        let mut conn = self.client.clone();

        let raw = conn
            .get::<_, Option<String>>(&key)
            .await
            .map_err(|e| CacheError::Operation(format!("Redis GET {} failed: {}", key, e)))?;

        match raw {
            Some(json) => {
                debug!("Cache HIT: {}", key);
                serde_json::from_str(&json)
                    .map(Some)
                    .map_err(|e| CacheError::Serialization(e.to_string()))
            }
            None => {
                debug!("Cache MISS: {}", key);
                Ok(None)
            }
        }
    }

    async fn insert_recipe(&self, record: RecipeRecord) -> CacheResult<()> {
        let key = self.build_key(record.id);
        let json =
            serde_json::to_string(&record).map_err(|e| CacheError::Serialization(e.to_string()))?;
        let mut conn = self.client.clone();

        conn.set::<_, _, ()>(&key, json)
            .await
            .map_err(|e| CacheError::Operation(format!("Redis SET {} failed: {}", key, e)))?;

        debug!("Cache SET: {}", key);
        Ok(())
    }

    async fn health_check(&self) -> bool {
        let mut conn = self.client.clone();
        conn.ping::<()>().await.is_ok()
    }
}
