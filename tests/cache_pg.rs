mod common;

use common::recipe_record;
use recipe_retrieval::infrastructure::cache::{PgRecipeCache, RecipeCache};
use sqlx::PgPool;
use std::sync::Arc;

#[sqlx::test]
async fn test_get_missing_recipe(pool: PgPool) {
    let cache = PgRecipeCache::new(Arc::new(pool));

    let result = cache.get_recipe_by_id(42).await.unwrap();

    assert!(result.is_none());
}

#[sqlx::test]
async fn test_insert_then_get(pool: PgPool) {
    let cache = PgRecipeCache::new(Arc::new(pool));
    let mut record = recipe_record(42, "Soup");
    record.ingredients = "water\nsalt".to_string();
    record.date_added = 1_606_348_709;

    cache.insert_recipe(record.clone()).await.unwrap();

    let found = cache.get_recipe_by_id(42).await.unwrap();
    assert_eq!(found, Some(record));
}

#[sqlx::test]
async fn test_insert_replaces_existing(pool: PgPool) {
    let cache = PgRecipeCache::new(Arc::new(pool.clone()));

    cache.insert_recipe(recipe_record(7, "Stew")).await.unwrap();
    cache
        .insert_recipe(recipe_record(7, "Beef Stew"))
        .await
        .unwrap();

    let found = cache.get_recipe_by_id(7).await.unwrap().unwrap();
    assert_eq!(found.title, "Beef Stew");

    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM recipes")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(count, 1);
}

#[sqlx::test]
async fn test_health_check(pool: PgPool) {
    let cache = PgRecipeCache::new(Arc::new(pool));

    assert!(cache.health_check().await);
}
