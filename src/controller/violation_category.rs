use axum::{
    extract::{Path, State},
    response::IntoResponse,
    Json,
};

use crate::{
    error::AppError,
    middleware::auth::AuthUser,
    model::{
        api::{ApiResponse, ErrorDto},
        violation_category::{
            CategoryWithTypesDto, CreateViolationCategoryDto, UpdateViolationCategoryDto,
            ViolationCategoryDto,
        },
    },
    service::violation_category::ViolationCategoryService,
    state::AppState,
};

/// Tag for grouping violation category endpoints in OpenAPI documentation
pub static VIOLATION_CATEGORY_TAG: &str = "violation-category";

/// Get every violation category with its types.
#[utoipa::path(
    get,
    path = "/v1/violation-categories",
    tag = VIOLATION_CATEGORY_TAG,
    responses(
        (status = 200, description = "Categories with their types", body = Vec<CategoryWithTypesDto>),
        (status = 401, description = "Missing bearer token", body = ErrorDto)
    ),
)]
pub async fn list_violation_categories(
    State(state): State<AppState>,
    _user: AuthUser,
) -> Result<impl IntoResponse, AppError> {
    let categories = ViolationCategoryService::new(&state.db).list().await?;

    Ok(ApiResponse::ok("Violation categories retrieved", categories))
}

/// Get one violation category by id.
#[utoipa::path(
    get,
    path = "/v1/violation-categories/{id}",
    tag = VIOLATION_CATEGORY_TAG,
    params(("id" = i32, Path, description = "Violation category id")),
    responses(
        (status = 200, description = "Category detail", body = ViolationCategoryDto),
        (status = 404, description = "Violation category not found", body = ErrorDto)
    ),
)]
pub async fn get_violation_category(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let category = ViolationCategoryService::new(&state.db).get_by_id(id).await?;

    Ok(ApiResponse::ok("Violation category retrieved", category))
}

/// Create a violation category.
#[utoipa::path(
    post,
    path = "/v1/violation-categories",
    tag = VIOLATION_CATEGORY_TAG,
    request_body = CreateViolationCategoryDto,
    responses(
        (status = 201, description = "Category created", body = ViolationCategoryDto),
        (status = 400, description = "Invalid category data", body = ErrorDto)
    ),
)]
pub async fn create_violation_category(
    State(state): State<AppState>,
    _user: AuthUser,
    Json(payload): Json<CreateViolationCategoryDto>,
) -> Result<impl IntoResponse, AppError> {
    let category = ViolationCategoryService::new(&state.db).create(payload).await?;

    Ok(ApiResponse::created("Violation category created", category))
}

/// Rename a violation category.
#[utoipa::path(
    put,
    path = "/v1/violation-categories/{id}",
    tag = VIOLATION_CATEGORY_TAG,
    params(("id" = i32, Path, description = "Violation category id")),
    request_body = UpdateViolationCategoryDto,
    responses(
        (status = 200, description = "Category updated", body = ViolationCategoryDto),
        (status = 404, description = "Violation category not found", body = ErrorDto)
    ),
)]
pub async fn update_violation_category(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateViolationCategoryDto>,
) -> Result<impl IntoResponse, AppError> {
    let category = ViolationCategoryService::new(&state.db)
        .update(id, payload)
        .await?;

    Ok(ApiResponse::ok("Violation category updated", category))
}

/// Delete a violation category.
#[utoipa::path(
    delete,
    path = "/v1/violation-categories/{id}",
    tag = VIOLATION_CATEGORY_TAG,
    params(("id" = i32, Path, description = "Violation category id")),
    responses(
        (status = 200, description = "Category deleted"),
        (status = 404, description = "Violation category not found", body = ErrorDto)
    ),
)]
pub async fn delete_violation_category(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    ViolationCategoryService::new(&state.db).delete(id).await?;

    Ok(ApiResponse::<()>::message("Violation category deleted"))
}
