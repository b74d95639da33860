//! Error types and HTTP response handling.
//!
//! This module provides the application's error hierarchy and conversion logic for
//! transforming errors into appropriate HTTP responses. The `AppError` enum serves
//! as the top-level error type that wraps domain-specific errors and implements
//! `IntoResponse` for automatic error handling in API endpoints.
//!
//! Every error renders the same JSON envelope the success paths use
//! (`{ success, message, code, error? }`), with the `code` field mirroring the
//! HTTP status code.

pub mod auth;
pub mod config;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::{
    error::{auth::AuthError, config::ConfigError},
    model::api::ApiResponse,
};

/// Top-level application error type.
///
/// Aggregates all possible error types that can occur in the application and provides
/// automatic conversion to HTTP responses. Infrastructure errors use `#[from]` for
/// automatic conversion. `AuthError` handles its own response mapping (401 vs 403),
/// while the remaining variants map directly onto the error taxonomy:
/// validation (400), not found (404), conflict (409), everything else (500).
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Authentication or authorization error.
    ///
    /// Delegates to `AuthError::into_response()` for custom status code mapping
    /// (401 Unauthorized vs 403 Forbidden).
    #[error(transparent)]
    AuthErr(#[from] AuthError),

    /// Database operation error from SeaORM.
    ///
    /// Results in 500 Internal Server Error with error details logged server-side.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// Malformed or missing required input.
    ///
    /// Results in 400 Bad Request with the provided error message.
    #[error("{0}")]
    Validation(String),

    /// Referenced entity absent.
    ///
    /// Results in 404 Not Found with the provided error message.
    #[error("{0}")]
    NotFound(String),

    /// Uniqueness violation on a natural key.
    ///
    /// Results in 409 Conflict with the provided error message.
    #[error("{0}")]
    Conflict(String),

    /// Internal server error with custom message.
    ///
    /// Results in 500 Internal Server Error. The provided message is logged
    /// but a generic message is returned to the client.
    #[error("{0}")]
    Internal(String),
}

/// Converts application errors into HTTP responses.
///
/// Maps each error variant to an appropriate HTTP status code and envelope body.
/// Authentication errors delegate to their own response handling. Internal and
/// database errors are logged with full details but return a generic message to
/// avoid information leakage.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            Self::AuthErr(err) => err.into_response(),
            Self::Validation(msg) => envelope(StatusCode::BAD_REQUEST, &msg),
            Self::NotFound(msg) => envelope(StatusCode::NOT_FOUND, &msg),
            Self::Conflict(msg) => envelope(StatusCode::CONFLICT, &msg),
            Self::DbErr(err) => {
                tracing::error!("Database error: {}", err);
                envelope(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
            }
            Self::ConfigErr(err) => {
                tracing::error!("Configuration error: {}", err);
                envelope(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
            }
            Self::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                envelope(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
            }
        }
    }
}

/// Builds a failure envelope response for the given status and message.
pub(crate) fn envelope(status: StatusCode, message: &str) -> Response {
    ApiResponse::<serde_json::Value>::failure(status, message).into_response()
}
