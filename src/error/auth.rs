use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::error::envelope;

/// Authentication and authorization failures.
#[derive(Error, Debug)]
pub enum AuthError {
    /// No `Authorization` header (or no bearer token in it) on a protected
    /// route. Results in a 401 Unauthorized response.
    #[error("Request is missing a bearer token")]
    MissingToken,

    /// The presented token could not be verified (bad signature, malformed,
    /// or expired). Results in a 403 Forbidden response.
    #[error("Bearer token failed verification")]
    InvalidToken,

    /// Login with an unknown username or wrong password.
    ///
    /// Collapsed into one variant so the response does not reveal which of
    /// the two was wrong. Results in a 401 Unauthorized response.
    #[error("Invalid login credentials")]
    InvalidCredentials,

    /// Token signing failed during login.
    ///
    /// Results in a 500 Internal Server Error with a generic message.
    #[error("Failed to sign access token: {0}")]
    TokenCreation(#[from] jsonwebtoken::errors::Error),
}

/// Converts authentication errors into HTTP responses.
///
/// - `MissingToken` / `InvalidCredentials` → 401 Unauthorized
/// - `InvalidToken` → 403 Forbidden
/// - `TokenCreation` → 500 Internal Server Error (detail logged, generic
///   message surfaced)
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        match self {
            Self::MissingToken => envelope(StatusCode::UNAUTHORIZED, "Unauthorized"),
            Self::InvalidToken => envelope(StatusCode::FORBIDDEN, "Invalid token"),
            Self::InvalidCredentials => {
                envelope(StatusCode::UNAUTHORIZED, "Invalid username or password")
            }
            Self::TokenCreation(err) => {
                tracing::error!("Token signing error: {}", err);
                envelope(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
            }
        }
    }
}
