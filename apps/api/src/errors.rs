use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::hr::feedback::FeedbackError;
use crate::resources::ResourceError;
use crate::resume::ExtractError;
use crate::techprep::QuizError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Empty input: {0}")]
    EmptyInput(String),

    #[error("Payload too large: {0}")]
    PayloadTooLarge(String),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl From<ExtractError> for AppError {
    fn from(err: ExtractError) -> Self {
        match err {
            ExtractError::EmptyInput => AppError::EmptyInput(err.to_string()),
        }
    }
}

impl From<FeedbackError> for AppError {
    fn from(err: FeedbackError) -> Self {
        match err {
            FeedbackError::EmptyAnswer => AppError::EmptyInput(err.to_string()),
        }
    }
}

impl From<QuizError> for AppError {
    fn from(err: QuizError) -> Self {
        match err {
            QuizError::NoAnswers
            | QuizError::UnknownQuestion(_)
            | QuizError::DuplicateAnswer(_)
            | QuizError::TopicMismatch { .. } => AppError::Validation(err.to_string()),
            // Bad rows in the question bank are our fault, not the caller's.
            QuizError::InvalidDifficulty(_) | QuizError::InvalidAnswerKey(_) => {
                AppError::Internal(err.into())
            }
        }
    }
}

impl From<ResourceError> for AppError {
    fn from(err: ResourceError) -> Self {
        match err {
            ResourceError::InvalidCompany(_)
            | ResourceError::InvalidFileName(_)
            | ResourceError::NotPdf => AppError::Validation(err.to_string()),
            ResourceError::TooLarge { .. } => AppError::PayloadTooLarge(err.to_string()),
            ResourceError::NotFound(_) => AppError::NotFound(err.to_string()),
            ResourceError::Storage(msg) => AppError::Storage(msg),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, "NOT_FOUND", msg.clone()),
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
            AppError::EmptyInput(msg) => (StatusCode::BAD_REQUEST, "EMPTY_INPUT", msg.clone()),
            AppError::PayloadTooLarge(msg) => (
                StatusCode::PAYLOAD_TOO_LARGE,
                "PAYLOAD_TOO_LARGE",
                msg.clone(),
            ),
            AppError::Database(e) => {
                tracing::error!("Database error: {e}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "DATABASE_ERROR",
                    "A database error occurred".to_string(),
                )
            }
            AppError::Storage(msg) => {
                tracing::error!("Storage error: {msg}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "STORAGE_ERROR",
                    "A storage error occurred".to_string(),
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
