#![allow(dead_code)]

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use recipe_retrieval::domain::entities::Recipe;
use recipe_retrieval::domain::mapper::DomainMapper;
use recipe_retrieval::infrastructure::cache::{
    CacheResult, InMemoryRecipeCache, RecipeCache, RecipeRecord, RecipeRecordMapper,
};
use recipe_retrieval::infrastructure::network::{
    RecipeDto, RecipeDtoMapper, RecipeSource, SourceError, SourceResult,
};
use recipe_retrieval::state::AppState;

pub fn recipe_record(id: i32, title: &str) -> RecipeRecord {
    RecipeRecordMapper.map_from_domain(Recipe::new(id, title))
}

pub fn recipe_dto(id: i32, title: &str) -> RecipeDto {
    RecipeDtoMapper.map_from_domain(Recipe::new(id, title))
}

/// Remote source serving a fixed set of recipes and counting calls.
///
/// Yields once per call so concurrent retrievals interleave.
#[derive(Default)]
pub struct FakeRecipeSource {
    recipes: HashMap<i32, RecipeDto>,
    failure: Option<String>,
    calls: AtomicUsize,
    tokens: Mutex<Vec<String>>,
}

impl FakeRecipeSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_recipe(mut self, dto: RecipeDto) -> Self {
        self.recipes.insert(dto.pk, dto);
        self
    }

    /// Makes every call fail with a transport error carrying `message`.
    pub fn failing(message: &str) -> Self {
        Self {
            failure: Some(message.to_string()),
            ..Self::default()
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn tokens(&self) -> Vec<String> {
        self.tokens.lock().unwrap().clone()
    }
}

#[async_trait]
impl RecipeSource for FakeRecipeSource {
    async fn get(&self, token: &str, id: i32) -> SourceResult<RecipeDto> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.tokens.lock().unwrap().push(token.to_string());
        tokio::task::yield_now().await;

        if let Some(message) = &self.failure {
            return Err(SourceError::Transport(message.clone()));
        }

        self.recipes
            .get(&id)
            .cloned()
            .ok_or(SourceError::NotFound { id })
    }
}

/// In-memory cache that counts inserts.
#[derive(Default)]
pub struct CountingCache {
    inner: InMemoryRecipeCache,
    inserts: AtomicUsize,
}

impl CountingCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_records(records: impl IntoIterator<Item = RecipeRecord>) -> Self {
        Self {
            inner: InMemoryRecipeCache::with_records(records),
            inserts: AtomicUsize::new(0),
        }
    }

    pub fn inserts(&self) -> usize {
        self.inserts.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl RecipeCache for CountingCache {
    async fn get_recipe_by_id(&self, id: i32) -> CacheResult<Option<RecipeRecord>> {
        self.inner.get_recipe_by_id(id).await
    }

    async fn insert_recipe(&self, record: RecipeRecord) -> CacheResult<()> {
        self.inserts.fetch_add(1, Ordering::SeqCst);
        self.inner.insert_recipe(record).await
    }

    async fn health_check(&self) -> bool {
        true
    }
}

/// Cache that accepts writes but never returns anything.
pub struct ForgetfulCache;

#[async_trait]
impl RecipeCache for ForgetfulCache {
    async fn get_recipe_by_id(&self, _id: i32) -> CacheResult<Option<RecipeRecord>> {
        Ok(None)
    }

    async fn insert_recipe(&self, _record: RecipeRecord) -> CacheResult<()> {
        Ok(())
    }

    async fn health_check(&self) -> bool {
        false
    }
}

pub fn create_test_state(
    cache: Arc<dyn RecipeCache>,
    source: Arc<dyn RecipeSource>,
    default_token: Option<&str>,
) -> AppState {
    AppState::new(
        cache,
        source,
        Duration::ZERO,
        default_token.map(str::to_string),
    )
}
