use axum::{
    extract::rejection::{JsonRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Failures raised by the resume projection before any output is produced.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProjectionError {
    #[error("Malformed resume record: {0}")]
    MalformedRecord(String),

    #[error("Invalid projection config: {0}")]
    InvalidConfig(String),
}

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error(transparent)]
    Projection(#[from] ProjectionError),
}

/// A request body that is not JSON cannot be a resume record.
impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::Projection(ProjectionError::MalformedRecord(rejection.body_text()))
    }
}

/// Query parameters only carry projection options.
impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        AppError::Projection(ProjectionError::InvalidConfig(rejection.body_text()))
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, "NOT_FOUND", msg.clone()),
            AppError::Projection(ProjectionError::MalformedRecord(msg)) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "MALFORMED_RECORD",
                msg.clone(),
            ),
            AppError::Projection(ProjectionError::InvalidConfig(msg)) => {
                (StatusCode::BAD_REQUEST, "INVALID_CONFIG", msg.clone())
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
