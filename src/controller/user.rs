use axum::{
    extract::{Path, Query, State},
    response::IntoResponse,
    Json,
};

use crate::{
    error::AppError,
    middleware::auth::AuthUser,
    model::{
        api::{ApiResponse, ErrorDto},
        page::PageParams,
        user::{CreateUserDto, UpdateUserDto, UserDto, UserFilter},
    },
    service::user::UserService,
    state::AppState,
};

/// Tag for grouping user endpoints in OpenAPI documentation
pub static USER_TAG: &str = "user";

/// Get paginated users. Password hashes are never returned.
#[utoipa::path(
    get,
    path = "/v1/users",
    tag = USER_TAG,
    params(PageParams, UserFilter),
    responses(
        (status = 200, description = "Paginated users", body = Vec<UserDto>),
        (status = 401, description = "Missing bearer token", body = ErrorDto)
    ),
)]
pub async fn list_users(
    State(state): State<AppState>,
    _user: AuthUser,
    Query(params): Query<PageParams>,
    Query(filter): Query<UserFilter>,
) -> Result<impl IntoResponse, AppError> {
    let page = UserService::new(&state.db).list(&filter, &params).await?;

    Ok(ApiResponse::ok_paged(
        "Users retrieved",
        page.records,
        page.meta,
    ))
}

/// Get one user by id.
#[utoipa::path(
    get,
    path = "/v1/users/{id}",
    tag = USER_TAG,
    params(("id" = i32, Path, description = "User id")),
    responses(
        (status = 200, description = "User detail", body = UserDto),
        (status = 404, description = "User not found", body = ErrorDto)
    ),
)]
pub async fn get_user(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = UserService::new(&state.db).get_by_id(id).await?;

    Ok(ApiResponse::ok("User retrieved", user))
}

/// Create a user. The password is bcrypt-hashed before storage.
#[utoipa::path(
    post,
    path = "/v1/users",
    tag = USER_TAG,
    request_body = CreateUserDto,
    responses(
        (status = 201, description = "User created", body = UserDto),
        (status = 400, description = "Invalid user data", body = ErrorDto),
        (status = 409, description = "Username already taken", body = ErrorDto)
    ),
)]
pub async fn create_user(
    State(state): State<AppState>,
    _user: AuthUser,
    Json(payload): Json<CreateUserDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = UserService::new(&state.db).create(payload).await?;

    Ok(ApiResponse::created("User created", user))
}

/// Update a user. An absent password keeps the current one.
#[utoipa::path(
    put,
    path = "/v1/users/{id}",
    tag = USER_TAG,
    params(("id" = i32, Path, description = "User id")),
    request_body = UpdateUserDto,
    responses(
        (status = 200, description = "User updated", body = UserDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 409, description = "Username already taken", body = ErrorDto)
    ),
)]
pub async fn update_user(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateUserDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = UserService::new(&state.db).update(id, payload).await?;

    Ok(ApiResponse::ok("User updated", user))
}

/// Delete a user.
#[utoipa::path(
    delete,
    path = "/v1/users/{id}",
    tag = USER_TAG,
    params(("id" = i32, Path, description = "User id")),
    responses(
        (status = 200, description = "User deleted"),
        (status = 404, description = "User not found", body = ErrorDto)
    ),
)]
pub async fn delete_user(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    UserService::new(&state.db).delete(id).await?;

    Ok(ApiResponse::<()>::message("User deleted"))
}
