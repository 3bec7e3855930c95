//! HTTP server initialization and runtime setup.
//!
//! Handles cache backend connection, remote client setup, and the Axum server lifecycle.

use crate::config::{CacheBackend, Config};
use crate::infrastructure::cache::{
    InMemoryRecipeCache, PgRecipeCache, RecipeCache, RedisRecipeCache,
};
use crate::infrastructure::network::{HttpRecipeSource, RecipeSource};
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use sqlx::postgres::PgPoolOptions;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

/// Connects the configured cache backend.
///
/// For Postgres the pool is created and migrations are applied.
///
/// # Errors
///
/// Returns an error if the backend cannot be reached or migrations fail.
pub async fn connect_cache(config: &Config) -> Result<Arc<dyn RecipeCache>> {
    let cache: Arc<dyn RecipeCache> = match config.cache_backend {
        CacheBackend::Postgres => {
            let database_url = config
                .database_url
                .as_deref()
                .context("DATABASE_URL is required for the postgres cache")?;

            let pool = PgPoolOptions::new()
                .max_connections(config.db_max_connections)
                .acquire_timeout(Duration::from_secs(config.db_connect_timeout))
                .connect(database_url)
                .await
                .context("Failed to connect to database")?;
            tracing::info!("Connected to database");

            sqlx::migrate!("./migrations")
                .run(&pool)
                .await
                .context("Failed to apply migrations")?;

            Arc::new(PgRecipeCache::new(Arc::new(pool)))
        }
        CacheBackend::Redis => {
            let redis_url = config
                .redis_url
                .as_deref()
                .context("REDIS_URL is required for the redis cache")?;
            Arc::new(RedisRecipeCache::connect(redis_url).await?)
        }
        CacheBackend::Memory => {
            tracing::warn!("Using in-memory cache; recipes are lost on restart");
            Arc::new(InMemoryRecipeCache::new())
        }
    };

    tracing::info!("Cache enabled ({})", config.cache_backend);
    Ok(cache)
}

/// Builds handler state: cache, remote source and retrieval pipeline.
///
/// # Errors
///
/// Returns an error if the cache cannot be connected or the HTTP client cannot be built.
pub async fn build_state(config: &Config) -> Result<AppState> {
    let cache = connect_cache(config).await?;

    let source: Arc<dyn RecipeSource> = Arc::new(
        HttpRecipeSource::new(&config.recipe_api_url, config.http_timeout())
            .context("Failed to build recipe API client")?,
    );

    Ok(AppState::new(
        cache,
        source,
        config.startup_delay(),
        config.recipe_api_token.clone(),
    ))
}

/// Runs the HTTP server with the given configuration.
///
/// # Errors
///
/// Returns an error if:
/// - The cache backend cannot be reached
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let state = build_state(&config).await?;

    let app = app_router(state);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
