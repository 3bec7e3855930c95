//! DTOs for the recipe retrieval stream.

use axum::response::sse::Event;
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::application::services::RecipeState;
use crate::domain::entities::Recipe;
use crate::domain::retrieval_state::RetrievalState;

/// Recipe payload of a `success` event.
#[derive(Debug, Serialize)]
pub struct RecipeResponse {
    pub id: i32,
    pub title: String,
    pub publisher: String,
    pub featured_image: String,
    pub rating: i32,
    pub source_url: String,
    pub ingredients: Vec<String>,
    pub date_added: DateTime<Utc>,
    pub date_updated: DateTime<Utc>,
}

impl From<Recipe> for RecipeResponse {
    fn from(recipe: Recipe) -> Self {
        Self {
            id: recipe.id,
            title: recipe.title,
            publisher: recipe.publisher,
            featured_image: recipe.featured_image,
            rating: recipe.rating,
            source_url: recipe.source_url,
            ingredients: recipe.ingredients,
            date_added: recipe.date_added,
            date_updated: recipe.date_updated,
        }
    }
}

/// Payload of an `error` event.
#[derive(Debug, Serialize)]
pub struct RetrievalErrorResponse {
    pub kind: &'static str,
    pub message: String,
}

/// Converts a retrieval state into a Server-Sent Event.
///
/// # Event Format
///
/// ```text
/// event: loading
/// data: {}
///
/// event: success
/// data: {"id":42,"title":"Soup",...}
///
/// event: error
/// data: {"kind":"network","message":"Recipe 42 not found on remote source"}
/// ```
pub fn state_to_event(state: RecipeState) -> Result<Event, axum::Error> {
    match state {
        RetrievalState::Loading => Ok(Event::default().event("loading").data("{}")),
        RetrievalState::Success(recipe) => Event::default()
            .event("success")
            .json_data(RecipeResponse::from(recipe)),
        RetrievalState::Error { kind, message } => {
            Event::default()
                .event("error")
                .json_data(RetrievalErrorResponse {
                    kind: kind.as_str(),
                    message,
                })
        }
    }
}
