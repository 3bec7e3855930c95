//! Error types shared across layers.
//!
//! - [`RetrievalError`] - anything that can end a retrieval with an error state
//! - [`AppError`] - HTTP-facing errors rendered as JSON

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::Value;

use crate::domain::retrieval_state::{DEFAULT_ERROR_MESSAGE, FailureKind};
use crate::infrastructure::cache::CacheError;
use crate::infrastructure::network::SourceError;

/// Failure raised anywhere in the retrieval protocol.
///
/// The pipeline never lets this escape; it is converted into a terminal
/// error state carrying [`RetrievalError::user_message`].
#[derive(Debug, thiserror::Error)]
pub enum RetrievalError {
    #[error(transparent)]
    Cache(#[from] CacheError),

    #[error(transparent)]
    Source(#[from] SourceError),

    #[error("Unable to get recipe from the cache.")]
    Consistency { recipe_id: i32 },
}

impl RetrievalError {
    pub fn kind(&self) -> FailureKind {
        match self {
            Self::Cache(_) => FailureKind::Cache,
            Self::Source(_) => FailureKind::Network,
            Self::Consistency { .. } => FailureKind::Consistency,
        }
    }

    /// Human-readable description, or [`DEFAULT_ERROR_MESSAGE`] when the
    /// underlying error has none.
    pub fn user_message(&self) -> String {
        let message = self.to_string();
        if message.trim().is_empty() {
            DEFAULT_ERROR_MESSAGE.to_string()
        } else {
            message
        }
    }
}

#[derive(Serialize)]
struct ErrorBody {
    error: ErrorInfo,
}

#[derive(Serialize)]
struct ErrorInfo {
    code: &'static str,
    message: String,
    details: Value,
}

#[derive(Debug)]
pub enum AppError {
    Validation { message: String, details: Value },
    Unauthorized { message: String, details: Value },
}

impl AppError {
    pub fn bad_request(message: impl Into<String>, details: Value) -> Self {
        Self::Validation {
            message: message.into(),
            details,
        }
    }

    pub fn unauthorized(message: impl Into<String>, details: Value) -> Self {
        Self::Unauthorized {
            message: message.into(),
            details,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message, details) = match self {
            AppError::Validation { message, details } => (
                StatusCode::BAD_REQUEST,
                "validation_error",
                message,
                details,
            ),
            AppError::Unauthorized { message, details } => {
                (StatusCode::UNAUTHORIZED, "unauthorized", message, details)
            }
        };

        let body = ErrorBody {
            error: ErrorInfo {
                code,
                message,
                details,
            },
        };

        (status, Json(body)).into_response()
    }
}
