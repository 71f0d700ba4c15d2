#![allow(dead_code)]

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::llm_client::GenError;
use crate::prompting::compose::ComposeError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
///
/// Composition and validation failures are the caller's to fix and map to
/// 4xx; model-generation failures are upstream trouble and map to 502, so
/// the two are always distinguishable at the boundary.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error(transparent)]
    Compose(#[from] ComposeError),

    #[error("Generation error: {0}")]
    Generation(#[from] GenError),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, "NOT_FOUND", msg.clone()),
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
            AppError::Compose(e @ ComposeError::UnknownTaskKind { .. }) => {
                (StatusCode::BAD_REQUEST, "UNKNOWN_TASK_KIND", e.to_string())
            }
            AppError::Compose(e @ ComposeError::MissingField { .. }) => {
                (StatusCode::BAD_REQUEST, "MISSING_FIELD", e.to_string())
            }
            AppError::Generation(e) => {
                tracing::error!("Generation error: {e}");
                (
                    StatusCode::BAD_GATEWAY,
                    "GENERATION_ERROR",
                    "Text generation failed".to_string(),
                )
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal server error occurred".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prompting::templates::TaskKind;

    #[test]
    fn test_compose_errors_map_to_bad_request() {
        let unknown = AppError::Compose(ComposeError::UnknownTaskKind {
            kind: "sonnet-battle".to_string(),
        });
        assert_eq!(unknown.into_response().status(), StatusCode::BAD_REQUEST);

        let missing = AppError::Compose(ComposeError::MissingField {
            kind: TaskKind::Poetry,
            field: "tone".to_string(),
        });
        assert_eq!(missing.into_response().status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_generation_errors_map_to_bad_gateway() {
        let err = AppError::Generation(GenError::EmptyContent);
        assert_eq!(err.into_response().status(), StatusCode::BAD_GATEWAY);
    }

    #[test]
    fn test_not_found_maps_to_404() {
        let err = AppError::NotFound("Session x not found".to_string());
        assert_eq!(err.into_response().status(), StatusCode::NOT_FOUND);
    }
}
