//! Application error type and its HTTP representation.
//!
//! Every failure is rendered as `{"error": "<message>"}`. Internal errors are
//! logged with full detail but reach the client only as a generic message.

use axum::{
    Json,
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use validator::ValidationErrors;

/// Message returned to clients for any internal failure.
const INTERNAL_MESSAGE: &str = "Internal server error";

#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Missing or malformed input (400).
    #[error("{0}")]
    Validation(String),

    /// Unknown link id or image filename (404).
    #[error("{0}")]
    NotFound(String),

    /// Backing store or filesystem failure (500).
    #[error("{0}")]
    Internal(String),
}

impl AppError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        let error = match self {
            AppError::Validation(message) | AppError::NotFound(message) => message,
            AppError::Internal(message) => {
                tracing::error!(%message, "Request failed with internal error");
                INTERNAL_MESSAGE.to_string()
            }
        };

        (status, Json(ErrorBody { error })).into_response()
    }
}

impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        AppError::internal(format!("Database error: {e}"))
    }
}

impl From<std::io::Error> for AppError {
    fn from(e: std::io::Error) -> Self {
        AppError::internal(format!("I/O error: {e}"))
    }
}

impl From<ValidationErrors> for AppError {
    fn from(errors: ValidationErrors) -> Self {
        let mut fields: Vec<String> = errors
            .field_errors()
            .into_iter()
            .map(|(field, errs)| match errs.first().and_then(|e| e.message.as_ref()) {
                Some(message) => message.to_string(),
                None => format!("{field} is invalid"),
            })
            .collect();
        fields.sort();

        AppError::bad_request(fields.join("; "))
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::bad_request(format!("Invalid JSON body: {}", rejection.body_text()))
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        AppError::bad_request(format!("Invalid path parameter: {}", rejection.body_text()))
    }
}
