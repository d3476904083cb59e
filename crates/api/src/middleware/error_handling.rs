//! # Error Handling Middleware
//!
//! Maps domain errors to HTTP status codes and JSON error responses, so
//! every endpoint fails the same way.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use tutorhub_core::errors::TutorError;

/// Application error wrapper that provides HTTP status code mapping.
///
/// `AppError` wraps domain-specific `TutorError` instances and implements
/// `IntoResponse` to convert them into HTTP responses with appropriate
/// status codes and JSON payloads.
#[derive(Debug)]
pub struct AppError(pub TutorError);

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Map error types to HTTP status codes
        let status = match &self.0 {
            TutorError::NotFound(_) => StatusCode::NOT_FOUND,
            TutorError::Validation(_) => StatusCode::BAD_REQUEST,
            TutorError::InvalidRange(_) => StatusCode::BAD_REQUEST,
            TutorError::Conflict(_) => StatusCode::CONFLICT,
            TutorError::DuplicateReservation(_) => StatusCode::CONFLICT,
            TutorError::SlotUnavailable(_) => StatusCode::CONFLICT,
            TutorError::InvalidState(_) => StatusCode::CONFLICT,
            TutorError::NotOwner(_) => StatusCode::FORBIDDEN,
            TutorError::Authentication(_) => StatusCode::UNAUTHORIZED,
            TutorError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
            TutorError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        // Get the error message and format as JSON
        let message = self.0.to_string();
        let body = Json(json!({ "error": message }));

        (status, body).into_response()
    }
}

/// Allows `?` on `TutorResult` values inside handlers.
impl From<TutorError> for AppError {
    fn from(err: TutorError) -> Self {
        AppError(err)
    }
}

/// Wraps storage-layer failures in the `Database` variant.
impl From<eyre::Report> for AppError {
    fn from(err: eyre::Report) -> Self {
        AppError(TutorError::Database(err))
    }
}

/// Maps a TutorError directly to an HTTP response.
pub fn map_error(err: TutorError) -> Response {
    AppError(err).into_response()
}
