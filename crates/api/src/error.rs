//! The single point translating internal failures into HTTP responses.
//!
//! Two response envelopes exist and existing clients depend on the shape
//! difference:
//!
//! - flat `{message, code}` for not-found, bad-request, and generic failures;
//! - structural maps for validation: a `field -> message` object for body
//!   validation, and `{messages: [...]}` for query-parameter validation.

use std::collections::BTreeMap;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use bookstack_core::error::CoreError;
use serde_json::json;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and adds the validation shapes and
/// database failures raised at the boundary. Implements [`IntoResponse`] to
/// produce the fixed JSON error contract.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `bookstack_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A database error from sqlx.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Request-body validation failed; one message per offending field.
    #[error("validation failed for {} field(s)", .0.len())]
    FieldValidation(BTreeMap<String, String>),

    /// Query-parameter validation failed; messages in parameter order.
    #[error("invalid query parameters")]
    ParamValidation(Vec<String>),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    /// Shorthand for a not-found failure with the given client message.
    pub fn not_found(message: impl Into<String>) -> Self {
        AppError::Core(CoreError::NotFound(message.into()))
    }

    /// Shorthand for a bad-request failure with the given client message.
    pub fn bad_request(message: impl Into<String>) -> Self {
        AppError::Core(CoreError::BadRequest(message.into()))
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::Core(core) => match core {
                CoreError::NotFound(msg) => flat(StatusCode::NOT_FOUND, "404", &msg),
                CoreError::BadRequest(msg) => flat(StatusCode::BAD_REQUEST, "400", &msg),
                CoreError::Unauthorized(msg) => flat(StatusCode::UNAUTHORIZED, "401", &msg),
                CoreError::Internal(msg) => {
                    tracing::error!(error = %msg, "Internal error");
                    flat(StatusCode::BAD_REQUEST, "400", "Unexpected error")
                }
            },

            AppError::Database(err) => {
                tracing::error!(error = %err, "Database error");
                flat(StatusCode::BAD_REQUEST, "400", "Unexpected error")
            }

            // Body validation: the response body IS the field->message map.
            AppError::FieldValidation(errors) => {
                (StatusCode::BAD_REQUEST, axum::Json(errors)).into_response()
            }

            AppError::ParamValidation(messages) => (
                StatusCode::BAD_REQUEST,
                axum::Json(json!({ "messages": messages })),
            )
                .into_response(),
        }
    }
}

/// Build the flat `{message, code}` envelope.
fn flat(status: StatusCode, code: &str, message: &str) -> Response {
    let body = json!({
        "message": message,
        "code": code,
    });
    (status, axum::Json(body)).into_response()
}
