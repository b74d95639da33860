use axum::{extract::State, response::IntoResponse, Json};

use crate::{
    error::AppError,
    model::{
        api::{ApiResponse, ErrorDto},
        auth::{LoginDto, LoginResponse},
    },
    service::auth::AuthService,
    state::AppState,
};

/// Tag for grouping auth endpoints in OpenAPI documentation
pub static AUTH_TAG: &str = "auth";

/// Log in with username and password.
///
/// Verifies the credentials against the stored bcrypt hash and returns a
/// bearer token valid for seven days. The same error is returned for an
/// unknown username and a wrong password.
///
/// # Returns
/// - `200 OK` - Token and user profile
/// - `401 Unauthorized` - Invalid username or password
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/v1/auth/login",
    tag = AUTH_TAG,
    request_body = LoginDto,
    responses(
        (status = 200, description = "Logged in", body = LoginResponse),
        (status = 401, description = "Invalid username or password", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginDto>,
) -> Result<impl IntoResponse, AppError> {
    let response = AuthService::new(&state.db, &state.keys)
        .login(payload)
        .await?;

    Ok(ApiResponse::ok("Login successful", response))
}
