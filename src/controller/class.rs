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
        class::{ClassDto, ClassFilter, CreateClassDto, ImportClassesDto, UpdateClassDto},
        page::PageParams,
        student::ImportReportDto,
    },
    service::class::ClassService,
    state::AppState,
};

/// Tag for grouping class endpoints in OpenAPI documentation
pub static CLASS_TAG: &str = "class";

/// Get paginated classes, ordered by name.
#[utoipa::path(
    get,
    path = "/v1/classes",
    tag = CLASS_TAG,
    params(PageParams, ClassFilter),
    responses(
        (status = 200, description = "Paginated classes", body = Vec<ClassDto>),
        (status = 401, description = "Missing bearer token", body = ErrorDto)
    ),
)]
pub async fn list_classes(
    State(state): State<AppState>,
    _user: AuthUser,
    Query(params): Query<PageParams>,
    Query(filter): Query<ClassFilter>,
) -> Result<impl IntoResponse, AppError> {
    let page = ClassService::new(&state.db).list(&filter, &params).await?;

    Ok(ApiResponse::ok_paged(
        "Classes retrieved",
        page.records,
        page.meta,
    ))
}

/// Get one class by id.
#[utoipa::path(
    get,
    path = "/v1/classes/{id}",
    tag = CLASS_TAG,
    params(("id" = i32, Path, description = "Class id")),
    responses(
        (status = 200, description = "Class detail", body = ClassDto),
        (status = 404, description = "Class not found", body = ErrorDto)
    ),
)]
pub async fn get_class(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let class = ClassService::new(&state.db).get_by_id(id).await?;

    Ok(ApiResponse::ok("Class retrieved", class))
}

/// Create a class. Names are unique, ignoring case.
#[utoipa::path(
    post,
    path = "/v1/classes",
    tag = CLASS_TAG,
    request_body = CreateClassDto,
    responses(
        (status = 201, description = "Class created", body = ClassDto),
        (status = 400, description = "Invalid class data", body = ErrorDto),
        (status = 409, description = "Class name already exists", body = ErrorDto)
    ),
)]
pub async fn create_class(
    State(state): State<AppState>,
    _user: AuthUser,
    Json(payload): Json<CreateClassDto>,
) -> Result<impl IntoResponse, AppError> {
    let class = ClassService::new(&state.db).create(payload).await?;

    Ok(ApiResponse::created("Class created", class))
}

/// Rename a class.
#[utoipa::path(
    put,
    path = "/v1/classes/{id}",
    tag = CLASS_TAG,
    params(("id" = i32, Path, description = "Class id")),
    request_body = UpdateClassDto,
    responses(
        (status = 200, description = "Class updated", body = ClassDto),
        (status = 404, description = "Class not found", body = ErrorDto),
        (status = 409, description = "Class name already exists", body = ErrorDto)
    ),
)]
pub async fn update_class(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateClassDto>,
) -> Result<impl IntoResponse, AppError> {
    let class = ClassService::new(&state.db).update(id, payload).await?;

    Ok(ApiResponse::ok("Class updated", class))
}

/// Delete a class.
#[utoipa::path(
    delete,
    path = "/v1/classes/{id}",
    tag = CLASS_TAG,
    params(("id" = i32, Path, description = "Class id")),
    responses(
        (status = 200, description = "Class deleted"),
        (status = 404, description = "Class not found", body = ErrorDto)
    ),
)]
pub async fn delete_class(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    ClassService::new(&state.db).delete(id).await?;

    Ok(ApiResponse::<()>::message("Class deleted"))
}

/// Bulk-import classes. Bad rows are skipped with a reason.
#[utoipa::path(
    post,
    path = "/v1/classes/import",
    tag = CLASS_TAG,
    request_body = ImportClassesDto,
    responses(
        (status = 200, description = "Import report", body = ImportReportDto)
    ),
)]
pub async fn import_classes(
    State(state): State<AppState>,
    _user: AuthUser,
    Json(payload): Json<ImportClassesDto>,
) -> Result<impl IntoResponse, AppError> {
    let report = ClassService::new(&state.db).import(payload).await?;

    Ok(ApiResponse::ok(
        format!("{} classes imported", report.imported),
        report,
    ))
}
