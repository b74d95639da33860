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
        violation::{
            CreateViolationDto, FilterFormDto, LedgerResultDto, UpdateViolationDto,
            ViolationFilter, ViolationListItemDto,
        },
    },
    service::violation::ViolationService,
    state::AppState,
};

/// Tag for grouping violation endpoints in OpenAPI documentation
pub static VIOLATION_TAG: &str = "violation";

/// Get paginated violations, newest first.
///
/// All filters combine: `search` matches student name, NIS, class name,
/// violation type name, or teacher username, `year_id` /
/// `classId` narrow by enrollment, `categoryId` by the violation type's
/// category, `teacherId` by the recording user, `status` by the implemented
/// flag, and `timePreset` (`today`, `last_7_days`, `last_30_days`,
/// `this_month`, `this_year`, `all`) bounds `created_at` from below with no
/// upper bound. Unknown preset values mean no time filter.
#[utoipa::path(
    get,
    path = "/v1/violations",
    tag = VIOLATION_TAG,
    params(PageParams, ViolationFilter),
    responses(
        (status = 200, description = "Paginated violations", body = Vec<ViolationListItemDto>),
        (status = 401, description = "Missing bearer token", body = ErrorDto)
    ),
)]
pub async fn list_violations(
    State(state): State<AppState>,
    _user: AuthUser,
    Query(params): Query<PageParams>,
    Query(filter): Query<ViolationFilter>,
) -> Result<impl IntoResponse, AppError> {
    let page = ViolationService::new(&state.db, state.ledger_transactions)
        .list(&filter, &params)
        .await?;

    Ok(ApiResponse::ok_paged(
        "Violations retrieved",
        page.records,
        page.meta,
    ))
}

/// Get every matching violation, unpaginated, for export.
#[utoipa::path(
    get,
    path = "/v1/violations/export",
    tag = VIOLATION_TAG,
    params(ViolationFilter),
    responses(
        (status = 200, description = "All matching violations", body = Vec<ViolationListItemDto>)
    ),
)]
pub async fn export_violations(
    State(state): State<AppState>,
    _user: AuthUser,
    Query(filter): Query<ViolationFilter>,
) -> Result<impl IntoResponse, AppError> {
    let violations = ViolationService::new(&state.db, state.ledger_transactions)
        .export(&filter)
        .await?;

    Ok(ApiResponse::ok("Violations exported", violations))
}

/// Get the option lists for the violation filter form.
#[utoipa::path(
    get,
    path = "/v1/violations/filter-form",
    tag = VIOLATION_TAG,
    responses(
        (status = 200, description = "Filter form options", body = FilterFormDto)
    ),
)]
pub async fn violation_filter_form(
    State(state): State<AppState>,
    _user: AuthUser,
) -> Result<impl IntoResponse, AppError> {
    let form = ViolationService::new(&state.db, state.ledger_transactions)
        .filter_form()
        .await?;

    Ok(ApiResponse::ok("Filter form retrieved", form))
}

/// Get one violation by id.
#[utoipa::path(
    get,
    path = "/v1/violations/{id}",
    tag = VIOLATION_TAG,
    params(("id" = i32, Path, description = "Violation id")),
    responses(
        (status = 200, description = "Violation detail", body = ViolationListItemDto),
        (status = 404, description = "Violation not found", body = ErrorDto)
    ),
)]
pub async fn get_violation(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let violation = ViolationService::new(&state.db, state.ledger_transactions)
        .get_by_id(id)
        .await?;

    Ok(ApiResponse::ok("Violation retrieved", violation))
}

/// Record a violation.
///
/// Adds the violation type's points to the student's total and attributes
/// the record to the authenticated user. The enrollment is resolved
/// server-side from the NIS.
///
/// # Returns
/// - `201 Created` - Violation recorded; body carries the new point total
/// - `404 Not Found` - Student, type, or enrollment missing (no mutation)
#[utoipa::path(
    post,
    path = "/v1/violations",
    tag = VIOLATION_TAG,
    request_body = CreateViolationDto,
    responses(
        (status = 201, description = "Violation recorded", body = LedgerResultDto),
        (status = 404, description = "Student or violation type not found", body = ErrorDto)
    ),
)]
pub async fn create_violation(
    State(state): State<AppState>,
    user: AuthUser,
    Json(payload): Json<CreateViolationDto>,
) -> Result<impl IntoResponse, AppError> {
    let result = ViolationService::new(&state.db, state.ledger_transactions)
        .create(payload, user.id)
        .await?;

    Ok(ApiResponse::created("Violation recorded", result))
}

/// Re-point a violation at a different type.
///
/// The student's total moves by the difference between the old and new
/// type's points.
#[utoipa::path(
    put,
    path = "/v1/violations/{id}",
    tag = VIOLATION_TAG,
    params(("id" = i32, Path, description = "Violation id")),
    request_body = UpdateViolationDto,
    responses(
        (status = 200, description = "Violation updated", body = LedgerResultDto),
        (status = 404, description = "Violation or type not found", body = ErrorDto)
    ),
)]
pub async fn update_violation(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateViolationDto>,
) -> Result<impl IntoResponse, AppError> {
    let result = ViolationService::new(&state.db, state.ledger_transactions)
        .update(id, payload)
        .await?;

    Ok(ApiResponse::ok("Violation updated", result))
}

/// Delete a violation, subtracting its type's points.
#[utoipa::path(
    delete,
    path = "/v1/violations/{id}",
    tag = VIOLATION_TAG,
    params(("id" = i32, Path, description = "Violation id")),
    responses(
        (status = 200, description = "Violation deleted", body = LedgerResultDto),
        (status = 404, description = "Violation not found", body = ErrorDto)
    ),
)]
pub async fn delete_violation(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let result = ViolationService::new(&state.db, state.ledger_transactions)
        .delete(id)
        .await?;

    Ok(ApiResponse::ok("Violation deleted", result))
}

/// Mark a violation's punishment as carried out. No point effect.
#[utoipa::path(
    put,
    path = "/v1/violations/implement/{id}",
    tag = VIOLATION_TAG,
    params(("id" = i32, Path, description = "Violation id")),
    responses(
        (status = 200, description = "Violation marked implemented", body = ViolationListItemDto),
        (status = 404, description = "Violation not found", body = ErrorDto)
    ),
)]
pub async fn implement_violation(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let violation = ViolationService::new(&state.db, state.ledger_transactions)
        .set_implemented(id, true)
        .await?;

    Ok(ApiResponse::ok("Violation marked implemented", violation))
}

/// Mark a violation's punishment as not carried out. No point effect.
#[utoipa::path(
    put,
    path = "/v1/violations/unimplement/{id}",
    tag = VIOLATION_TAG,
    params(("id" = i32, Path, description = "Violation id")),
    responses(
        (status = 200, description = "Violation marked unimplemented", body = ViolationListItemDto),
        (status = 404, description = "Violation not found", body = ErrorDto)
    ),
)]
pub async fn unimplement_violation(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let violation = ViolationService::new(&state.db, state.ledger_transactions)
        .set_implemented(id, false)
        .await?;

    Ok(ApiResponse::ok("Violation marked unimplemented", violation))
}
