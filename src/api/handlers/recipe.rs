//! Handler streaming recipe retrieval states.

use axum::{
    extract::{Path, State, rejection::PathRejection},
    http::{HeaderMap, header::AUTHORIZATION},
    response::sse::{Event, KeepAlive, Sse},
};
use futures::{Stream, StreamExt};
use serde_json::json;

use crate::api::dto::recipe::state_to_event;
use crate::error::AppError;
use crate::state::AppState;

/// Streams the retrieval of one recipe as Server-Sent Events.
///
/// # Endpoint
///
/// `GET /api/recipes/{id}`
///
/// # Authentication
///
/// The `Authorization` header is forwarded to the remote recipe API as-is.
/// Without it the configured `RECIPE_API_TOKEN` is used.
///
/// # Response Codes
///
/// - **200 OK**: `text/event-stream` with a `loading` event followed by one
///   `success` or `error` event; the stream then closes
/// - **400 Bad Request**: Id is not an integer (`validation_error`)
/// - **401 Unauthorized**: No credential in the request or configuration
pub async fn recipe_handler(
    State(state): State<AppState>,
    id: Result<Path<i32>, PathRejection>,
    headers: HeaderMap,
) -> Result<Sse<impl Stream<Item = Result<Event, axum::Error>> + Send + 'static>, AppError> {
    let Path(id) = id.map_err(|rejection| {
        AppError::bad_request(
            "Invalid recipe id",
            json!({ "reason": rejection.body_text() }),
        )
    })?;
    let token = resolve_token(&headers, state.default_token.as_deref())?;

    let events = state.retrieval.retrieve(id, token).map(state_to_event);

    Ok(Sse::new(events).keep_alive(KeepAlive::default()))
}

/// Picks the request credential, falling back to the configured default.
fn resolve_token(headers: &HeaderMap, default_token: Option<&str>) -> Result<String, AppError> {
    let from_header = headers
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .map(str::trim)
        .filter(|v| !v.is_empty());

    from_header
        .or(default_token)
        .map(str::to_string)
        .ok_or_else(|| {
            AppError::unauthorized(
                "Missing Authorization header",
                json!({ "hint": "Pass the recipe API token in the Authorization header" }),
            )
        })
}
