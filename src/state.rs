//! Shared state injected into HTTP handlers.

use std::sync::Arc;

use crate::application::services::RetrievalService;
use crate::infrastructure::cache::RecipeCache;
use crate::infrastructure::network::RecipeSource;

/// Retrieval pipeline over type-erased collaborators, as wired by the server.
pub type RecipeRetrieval = RetrievalService<dyn RecipeCache, dyn RecipeSource>;

#[derive(Clone)]
pub struct AppState {
    pub retrieval: Arc<RecipeRetrieval>,
    pub cache: Arc<dyn RecipeCache>,
    /// Credential used when a request carries no `Authorization` header.
    pub default_token: Option<String>,
}

impl AppState {
    pub fn new(
        cache: Arc<dyn RecipeCache>,
        source: Arc<dyn RecipeSource>,
        startup_delay: std::time::Duration,
        default_token: Option<String>,
    ) -> Self {
        let retrieval =
            RetrievalService::new(Arc::clone(&cache), source).with_startup_delay(startup_delay);

        Self {
            retrieval: Arc::new(retrieval),
            cache,
            default_token,
        }
    }
}
