// src/error.rs

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::{DateTime, Utc};
use serde_json::json;
use std::fmt;
use thiserror::Error;

/// Raised when a schedule or blueprint breaks its rules.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Exam window is empty: start {start_time} is not before end {end_time}")]
    MalformedSchedule {
        start_time: DateTime<Utc>,
        end_time: DateTime<Utc>,
    },

    #[error("Exam duration must be at least one minute")]
    InvalidDuration,

    #[error("A subject must be selected")]
    MissingSubject,

    #[error("At least one question count must be greater than zero")]
    EmptyBlueprint,

    #[error("Too many {kind} questions: {value} requested, at most {max} allowed")]
    CountOutOfRange {
        kind: &'static str,
        value: u32,
        max: u32,
    },
}

impl ValidationError {
    /// Stable machine-readable code.
    pub fn code(&self) -> &'static str {
        match self {
            ValidationError::MalformedSchedule { .. } => "MALFORMED_SCHEDULE",
            ValidationError::InvalidDuration => "INVALID_DURATION",
            ValidationError::MissingSubject => "MISSING_SUBJECT",
            ValidationError::EmptyBlueprint => "EMPTY_BLUEPRINT",
            ValidationError::CountOutOfRange { .. } => "COUNT_OUT_OF_RANGE",
        }
    }
}

/// Global Application Error Enum.
/// Centralizes error handling and mapping to HTTP responses.
#[derive(Debug)]
pub enum AppError {
    // 400 Bad Request
    BadRequest(String),

    // 400 Bad Request, with a validation code
    Validation(ValidationError),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

impl std::error::Error for AppError {}

/// Converts the error into a JSON response with appropriate HTTP status code.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, json!({ "error": msg })),
            AppError::Validation(err) => (
                StatusCode::BAD_REQUEST,
                json!({ "error": err.to_string(), "code": err.code() }),
            ),
        };

        (status, Json(body)).into_response()
    }
}

/// Allows using `?` on engine results inside handlers.
impl From<ValidationError> for AppError {
    fn from(err: ValidationError) -> Self {
        AppError::Validation(err)
    }
}
