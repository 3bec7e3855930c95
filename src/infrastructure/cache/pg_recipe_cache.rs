//! PostgreSQL implementation of the recipe cache.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;
use tracing::debug;

use super::model::RecipeRecord;
use super::store::{CacheError, CacheResult, RecipeCache};

/// Recipe cache backed by the `recipes` table.
///
/// Inserts are upserts keyed by id, so concurrent writers for the same recipe
/// resolve to the last write.
pub struct PgRecipeCache {
    pool: Arc<PgPool>,
}

impl PgRecipeCache {
    /// Creates a new cache with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

fn map_sqlx_error(e: sqlx::Error) -> CacheError {
    match e {
        sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed | sqlx::Error::Io(_) => {
            CacheError::Connection(e.to_string())
        }
        sqlx::Error::ColumnDecode { .. } | sqlx::Error::Decode(_) => {
            CacheError::Serialization(e.to_string())
        }
        other => CacheError::Operation(other.to_string()),
    }
}

#[async_trait]
impl RecipeCache for PgRecipeCache {
    async fn get_recipe_by_id(&self, id: i32) -> CacheResult<Option<RecipeRecord>> {
        let record = sqlx::query_as::<_, RecipeRecord>(
            r#"
            SELECT id, title, publisher, featured_image, rating, source_url,
                   ingredients, date_added, date_updated
            FROM recipes
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await
        .map_err(map_sqlx_error)?;

        debug!(recipe_id = id, hit = record.is_some(), "Postgres cache lookup");
        Ok(record)
    }

    async fn insert_recipe(&self, record: RecipeRecord) -> CacheResult<()> {
        sqlx::query(
            r#"
            INSERT INTO recipes (id, title, publisher, featured_image, rating, source_url,
                                 ingredients, date_added, date_updated)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            ON CONFLICT (id) DO UPDATE SET
                title = EXCLUDED.title,
                publisher = EXCLUDED.publisher,
                featured_image = EXCLUDED.featured_image,
                rating = EXCLUDED.rating,
                source_url = EXCLUDED.source_url,
                ingredients = EXCLUDED.ingredients,
                date_added = EXCLUDED.date_added,
                date_updated = EXCLUDED.date_updated,
                cached_at = NOW()
            "#,
        )
        .bind(record.id)
        .bind(&record.title)
        .bind(&record.publisher)
        .bind(&record.featured_image)
        .bind(record.rating)
        .bind(&record.source_url)
        .bind(&record.ingredients)
        .bind(record.date_added)
        .bind(record.date_updated)
        .execute(self.pool.as_ref())
        .await
        .map_err(map_sqlx_error)?;

        debug!(recipe_id = record.id, "Postgres cache insert");
        Ok(())
    }

    async fn health_check(&self) -> bool {
        sqlx::query("SELECT 1")
            .execute(self.pool.as_ref())
            .await
            .is_ok()
    }
}
