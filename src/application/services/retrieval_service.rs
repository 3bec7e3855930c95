//! Cache-first recipe retrieval with remote fallback.

use std::sync::Arc;
use std::time::Duration;

use futures::stream::{self, Stream, StreamExt};
use tracing::{debug, warn};

use crate::domain::entities::Recipe;
use crate::domain::mapper::DomainMapper;
use crate::domain::retrieval_state::RetrievalState;
use crate::error::RetrievalError;
use crate::infrastructure::cache::{RecipeCache, RecipeRecord, RecipeRecordMapper};
use crate::infrastructure::network::{RecipeDto, RecipeDtoMapper, RecipeSource};

/// Stream item produced by [`RetrievalService::retrieve`].
pub type RecipeState = RetrievalState<Recipe>;

/// Retrieves a single recipe, preferring the cache over the remote source.
///
/// # Protocol
///
/// 1. Emit [`RetrievalState::Loading`]
/// 2. Wait for the configured startup delay (if any)
/// 3. Read the recipe from the cache; on a hit emit it and stop
/// 4. On a miss fetch it remotely, map it to a cache record and insert it
/// 5. Read it back from the cache and emit that copy
///
/// Any failure ends the stream with a single [`RetrievalState::Error`].
/// Nothing is retried, and concurrent calls for the same id are not
/// coalesced: both may fetch and write, and the last write wins.
pub struct RetrievalService<C, S, M = RecipeRecordMapper, W = RecipeDtoMapper>
where
    C: RecipeCache + ?Sized,
    S: RecipeSource + ?Sized,
{
    cache: Arc<C>,
    source: Arc<S>,
    record_mapper: M,
    dto_mapper: W,
    startup_delay: Duration,
}

impl<C, S> RetrievalService<C, S>
where
    C: RecipeCache + ?Sized + 'static,
    S: RecipeSource + ?Sized + 'static,
{
    /// Creates a service using the default record and wire mappers and no startup delay.
    pub fn new(cache: Arc<C>, source: Arc<S>) -> Self {
        Self::with_mappers(cache, source, RecipeRecordMapper, RecipeDtoMapper)
    }
}

impl<C, S, M, W> RetrievalService<C, S, M, W>
where
    C: RecipeCache + ?Sized + 'static,
    S: RecipeSource + ?Sized + 'static,
    M: DomainMapper<RecipeRecord, Recipe> + Clone + 'static,
    W: DomainMapper<RecipeDto, Recipe> + Clone + 'static,
{
    /// Creates a service with explicit mappers.
    pub fn with_mappers(cache: Arc<C>, source: Arc<S>, record_mapper: M, dto_mapper: W) -> Self {
        Self {
            cache,
            source,
            record_mapper,
            dto_mapper,
            startup_delay: Duration::ZERO,
        }
    }

    /// Sets the pause between emitting `Loading` and the first cache read.
    ///
    /// Only exists so that consumers can observe the loading state; zero disables it.
    pub fn with_startup_delay(mut self, delay: Duration) -> Self {
        self.startup_delay = delay;
        self
    }

    /// Returns a lazy stream of retrieval states for `recipe_id`.
    ///
    /// Nothing happens until the stream is polled. The stream yields exactly
    /// `Loading` then one terminal state, and is independent of any other call.
    /// Once ended it keeps returning `None`.
    /// Dropping it abandons whatever step is in progress; a cache write that
    /// already completed is not rolled back.
    pub fn retrieve<T: Into<String>>(
        &self,
        recipe_id: i32,
        token: T,
    ) -> impl Stream<Item = RecipeState> + Send + 'static + use<C, S, M, W, T> {
        let start = Step::Start {
            service: self.clone(),
            recipe_id,
            token: token.into(),
        };

        stream::unfold(start, |step| async move {
            match step {
                Step::Start {
                    service,
                    recipe_id,
                    token,
                } => Some((
                    RetrievalState::Loading,
                    Step::Resolve {
                        service,
                        recipe_id,
                        token,
                    },
                )),
                Step::Resolve {
                    service,
                    recipe_id,
                    token,
                } => {
                    let state = service.resolve(recipe_id, &token).await;
                    Some((state, Step::Done))
                }
                Step::Done => None,
            }
        })
        .fuse()
    }

    async fn resolve(&self, recipe_id: i32, token: &str) -> RecipeState {
        match self.execute(recipe_id, token).await {
            Ok(recipe) => RetrievalState::Success(recipe),
            Err(e) => {
                let kind = e.kind();
                warn!(recipe_id, kind = %kind, error = %e, "Recipe retrieval failed");
                metrics::counter!("recipe_retrieval_failures_total", "kind" => kind.as_str())
                    .increment(1);
                RetrievalState::error(kind, e.user_message())
            }
        }
    }

    async fn execute(&self, recipe_id: i32, token: &str) -> Result<Recipe, RetrievalError> {
        if !self.startup_delay.is_zero() {
            tokio::time::sleep(self.startup_delay).await;
        }

        if let Some(recipe) = self.recipe_from_cache(recipe_id).await? {
            debug!(recipe_id, "Recipe cache hit");
            metrics::counter!("recipe_cache_hits_total").increment(1);
            return Ok(recipe);
        }

        debug!(recipe_id, "Recipe cache miss, fetching from remote source");
        metrics::counter!("recipe_cache_misses_total").increment(1);

        let network_recipe = self.recipe_from_network(token, recipe_id).await?;

        self.cache
            .insert_recipe(self.record_mapper.map_from_domain(network_recipe))
            .await?;

        self.recipe_from_cache(recipe_id)
            .await?
            .ok_or(RetrievalError::Consistency { recipe_id })
    }

    async fn recipe_from_cache(&self, recipe_id: i32) -> Result<Option<Recipe>, RetrievalError> {
        let record = self.cache.get_recipe_by_id(recipe_id).await?;
        Ok(record.map(|r| self.record_mapper.map_to_domain(r)))
    }

    async fn recipe_from_network(&self, token: &str, recipe_id: i32) -> Result<Recipe, RetrievalError> {
        metrics::counter!("recipe_network_fetches_total").increment(1);
        let dto = self.source.get(token, recipe_id).await?;
        Ok(self.dto_mapper.map_to_domain(dto))
    }
}

impl<C, S, M, W> Clone for RetrievalService<C, S, M, W>
where
    C: RecipeCache + ?Sized,
    S: RecipeSource + ?Sized,
    M: Clone,
    W: Clone,
{
    fn clone(&self) -> Self {
        Self {
            cache: Arc::clone(&self.cache),
            source: Arc::clone(&self.source),
            record_mapper: self.record_mapper.clone(),
            dto_mapper: self.dto_mapper.clone(),
            startup_delay: self.startup_delay,
        }
    }
}

enum Step<T> {
    Start {
        service: T,
        recipe_id: i32,
        token: String,
    },
    Resolve {
        service: T,
        recipe_id: i32,
        token: String,
    },
    Done,
}
