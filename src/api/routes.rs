//! API route configuration.

use crate::api::handlers::recipe_handler;
use crate::state::AppState;
use axum::{Router, routing::get};

/// Recipe API routes, nested under `/api`.
///
/// # Endpoints
///
/// - `GET /recipes/{id}` - Stream retrieval states for a recipe (SSE)
pub fn api_routes() -> Router<AppState> {
    Router::new().route("/recipes/{id}", get(recipe_handler))
}
