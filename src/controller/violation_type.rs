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
        violation_type::{
            CreateViolationTypeDto, UpdateViolationTypeDto, ViolationTypeFilter,
            ViolationTypeListItemDto,
        },
    },
    service::violation_type::ViolationTypeService,
    state::AppState,
};

/// Tag for grouping violation type endpoints in OpenAPI documentation
pub static VIOLATION_TYPE_TAG: &str = "violation-type";

/// Get paginated violation types with their category name.
#[utoipa::path(
    get,
    path = "/v1/violation-types",
    tag = VIOLATION_TYPE_TAG,
    params(PageParams, ViolationTypeFilter),
    responses(
        (status = 200, description = "Paginated violation types", body = Vec<ViolationTypeListItemDto>),
        (status = 401, description = "Missing bearer token", body = ErrorDto)
    ),
)]
pub async fn list_violation_types(
    State(state): State<AppState>,
    _user: AuthUser,
    Query(params): Query<PageParams>,
    Query(filter): Query<ViolationTypeFilter>,
) -> Result<impl IntoResponse, AppError> {
    let page = ViolationTypeService::new(&state.db)
        .list(&filter, &params)
        .await?;

    Ok(ApiResponse::ok_paged(
        "Violation types retrieved",
        page.records,
        page.meta,
    ))
}

/// Get one violation type by id.
#[utoipa::path(
    get,
    path = "/v1/violation-types/{id}",
    tag = VIOLATION_TYPE_TAG,
    params(("id" = i32, Path, description = "Violation type id")),
    responses(
        (status = 200, description = "Violation type detail", body = ViolationTypeListItemDto),
        (status = 404, description = "Violation type not found", body = ErrorDto)
    ),
)]
pub async fn get_violation_type(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let kind = ViolationTypeService::new(&state.db).get_by_id(id).await?;

    Ok(ApiResponse::ok("Violation type retrieved", kind))
}

/// Create a violation type.
#[utoipa::path(
    post,
    path = "/v1/violation-types",
    tag = VIOLATION_TYPE_TAG,
    request_body = CreateViolationTypeDto,
    responses(
        (status = 201, description = "Violation type created", body = ViolationTypeListItemDto),
        (status = 400, description = "Invalid violation type data", body = ErrorDto),
        (status = 404, description = "Violation category not found", body = ErrorDto),
        (status = 409, description = "Violation type already exists", body = ErrorDto)
    ),
)]
pub async fn create_violation_type(
    State(state): State<AppState>,
    _user: AuthUser,
    Json(payload): Json<CreateViolationTypeDto>,
) -> Result<impl IntoResponse, AppError> {
    let kind = ViolationTypeService::new(&state.db).create(payload).await?;

    Ok(ApiResponse::created("Violation type created", kind))
}

/// Update a violation type.
///
/// Changing the point value here does not retroactively adjust student
/// totals; only re-pointing individual violations does.
#[utoipa::path(
    put,
    path = "/v1/violation-types/{id}",
    tag = VIOLATION_TYPE_TAG,
    params(("id" = i32, Path, description = "Violation type id")),
    request_body = UpdateViolationTypeDto,
    responses(
        (status = 200, description = "Violation type updated", body = ViolationTypeListItemDto),
        (status = 404, description = "Violation type or category not found", body = ErrorDto),
        (status = 409, description = "Violation type already exists", body = ErrorDto)
    ),
)]
pub async fn update_violation_type(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateViolationTypeDto>,
) -> Result<impl IntoResponse, AppError> {
    let kind = ViolationTypeService::new(&state.db).update(id, payload).await?;

    Ok(ApiResponse::ok("Violation type updated", kind))
}

/// Delete a violation type.
#[utoipa::path(
    delete,
    path = "/v1/violation-types/{id}",
    tag = VIOLATION_TYPE_TAG,
    params(("id" = i32, Path, description = "Violation type id")),
    responses(
        (status = 200, description = "Violation type deleted"),
        (status = 404, description = "Violation type not found", body = ErrorDto)
    ),
)]
pub async fn delete_violation_type(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    ViolationTypeService::new(&state.db).delete(id).await?;

    Ok(ApiResponse::<()>::message("Violation type deleted"))
}
