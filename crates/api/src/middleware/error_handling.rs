//! # Error Handling Middleware
//!
//! Maps the engine's error taxonomy onto HTTP status codes and JSON error
//! bodies. Malformed input is a 400; a booking conflict is a 409 — a
//! business-rule outcome, not a system fault, and never masked as success.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use slotbook_core::errors::BookingError;

/// Application error wrapper that provides HTTP status code mapping.
///
/// `AppError` wraps `BookingError` and implements `IntoResponse`, so
/// handlers can return `Result<_, AppError>` and use `?` on engine calls.
#[derive(Debug)]
pub struct AppError(pub BookingError);

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Map error types to HTTP status codes
        let status = match &self.0 {
            BookingError::InvalidDate
            | BookingError::InvalidTime
            | BookingError::MissingTime
            | BookingError::OffGrid(_) => StatusCode::BAD_REQUEST,
            BookingError::AlreadyBooked(_) => StatusCode::CONFLICT,
        };

        let message = self.0.to_string();
        let body = Json(json!({ "error": message }));

        (status, body).into_response()
    }
}

impl From<BookingError> for AppError {
    fn from(err: BookingError) -> Self {
        AppError(err)
    }
}
