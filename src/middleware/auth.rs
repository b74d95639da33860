use axum::{extract::FromRequestParts, http::request::Parts};
use jsonwebtoken::{decode, Validation};

use crate::{
    error::{auth::AuthError, AppError},
    model::auth::Claims,
    state::AppState,
};

/// The identity behind the request's bearer token.
///
/// Extracting this in a handler is what makes that route protected: a
/// missing `Authorization` header rejects with 401, a malformed or expired
/// token with 403. The identity is then threaded explicitly into services
/// that need it.
pub struct AuthUser {
    pub id: i32,
    pub username: String,
    pub role: String,
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let header = parts
            .headers
            .get(axum::http::header::AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .ok_or(AuthError::MissingToken)?;

        let token = header
            .strip_prefix("Bearer ")
            .ok_or(AuthError::MissingToken)?;

        let data = decode::<Claims>(token, &state.keys.decoding, &Validation::default())
            .map_err(|_| AuthError::InvalidToken)?;

        Ok(Self {
            id: data.claims.sub,
            username: data.claims.username,
            role: data.claims.role,
        })
    }
}
