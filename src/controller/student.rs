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
        student::{
            CreateStudentDto, ImportReportDto, ImportStudentsDto, PromoteStudentsDto,
            StudentFilter, StudentListItemDto, UpdateStudentDto,
        },
    },
    service::student::StudentService,
    state::AppState,
};

/// Tag for grouping student endpoints in OpenAPI documentation
pub static STUDENT_TAG: &str = "student";

/// Get paginated students.
///
/// Lists students joined with their enrollment, class, and year period.
/// `search` matches student name, NIS, or class name case-insensitively;
/// `classId` and `yearPeriodId` narrow by enrollment. Page parameters are
/// lenient and fall back to page 1 / size 10.
#[utoipa::path(
    get,
    path = "/v1/students",
    tag = STUDENT_TAG,
    params(PageParams, StudentFilter),
    responses(
        (status = 200, description = "Paginated students", body = Vec<StudentListItemDto>),
        (status = 401, description = "Missing bearer token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_students(
    State(state): State<AppState>,
    _user: AuthUser,
    Query(params): Query<PageParams>,
    Query(filter): Query<StudentFilter>,
) -> Result<impl IntoResponse, AppError> {
    let page = StudentService::new(&state.db).list(&filter, &params).await?;

    Ok(ApiResponse::ok_paged(
        "Students retrieved",
        page.records,
        page.meta,
    ))
}

/// Get one student by NIS.
#[utoipa::path(
    get,
    path = "/v1/students/{nis}",
    tag = STUDENT_TAG,
    params(("nis" = i64, Path, description = "Student NIS")),
    responses(
        (status = 200, description = "Student detail", body = StudentListItemDto),
        (status = 404, description = "Student not found", body = ErrorDto)
    ),
)]
pub async fn get_student(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(nis): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    let student = StudentService::new(&state.db).get_by_nis(nis).await?;

    Ok(ApiResponse::ok("Student retrieved", student))
}

/// Register a student with their initial enrollment.
///
/// # Returns
/// - `201 Created` - Student registered
/// - `404 Not Found` - Class or year period does not exist
/// - `409 Conflict` - NIS already registered (nothing is written)
#[utoipa::path(
    post,
    path = "/v1/students",
    tag = STUDENT_TAG,
    request_body = CreateStudentDto,
    responses(
        (status = 201, description = "Student registered", body = StudentListItemDto),
        (status = 400, description = "Invalid student data", body = ErrorDto),
        (status = 404, description = "Class or year period not found", body = ErrorDto),
        (status = 409, description = "NIS already registered", body = ErrorDto)
    ),
)]
pub async fn create_student(
    State(state): State<AppState>,
    _user: AuthUser,
    Json(payload): Json<CreateStudentDto>,
) -> Result<impl IntoResponse, AppError> {
    let student = StudentService::new(&state.db).create(payload).await?;

    Ok(ApiResponse::created("Student registered", student))
}

/// Update a student's profile and enrollment.
#[utoipa::path(
    put,
    path = "/v1/students/{nis}",
    tag = STUDENT_TAG,
    params(("nis" = i64, Path, description = "Student NIS")),
    request_body = UpdateStudentDto,
    responses(
        (status = 200, description = "Student updated", body = StudentListItemDto),
        (status = 404, description = "Student, class, or year period not found", body = ErrorDto)
    ),
)]
pub async fn update_student(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(nis): Path<i64>,
    Json(payload): Json<UpdateStudentDto>,
) -> Result<impl IntoResponse, AppError> {
    let student = StudentService::new(&state.db).update(nis, payload).await?;

    Ok(ApiResponse::ok("Student updated", student))
}

/// Delete a student. Enrollments and violations cascade.
#[utoipa::path(
    delete,
    path = "/v1/students/{nis}",
    tag = STUDENT_TAG,
    params(("nis" = i64, Path, description = "Student NIS")),
    responses(
        (status = 200, description = "Student deleted"),
        (status = 404, description = "Student not found", body = ErrorDto)
    ),
)]
pub async fn delete_student(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(nis): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    StudentService::new(&state.db).delete(nis).await?;

    Ok(ApiResponse::<()>::message("Student deleted"))
}

/// Promote students into a class for a year period.
///
/// Re-points an existing enrollment for that period rather than creating a
/// duplicate. Unknown NIS values are skipped; the response reports how many
/// students were moved.
#[utoipa::path(
    post,
    path = "/v1/students/promote",
    tag = STUDENT_TAG,
    request_body = PromoteStudentsDto,
    responses(
        (status = 200, description = "Students promoted", body = usize),
        (status = 404, description = "Class or year period not found", body = ErrorDto)
    ),
)]
pub async fn promote_students(
    State(state): State<AppState>,
    _user: AuthUser,
    Json(payload): Json<PromoteStudentsDto>,
) -> Result<impl IntoResponse, AppError> {
    let promoted = StudentService::new(&state.db).promote(payload).await?;

    Ok(ApiResponse::ok(
        format!("{promoted} students promoted"),
        promoted,
    ))
}

/// Bulk-import students.
///
/// Class labels resolve case-insensitively against existing classes and
/// enrollments land in the most recent year period. Bad rows are skipped
/// with a reason instead of failing the whole import.
#[utoipa::path(
    post,
    path = "/v1/students/import",
    tag = STUDENT_TAG,
    request_body = ImportStudentsDto,
    responses(
        (status = 200, description = "Import report", body = ImportReportDto),
        (status = 400, description = "No year period configured", body = ErrorDto)
    ),
)]
pub async fn import_students(
    State(state): State<AppState>,
    _user: AuthUser,
    Json(payload): Json<ImportStudentsDto>,
) -> Result<impl IntoResponse, AppError> {
    let report = StudentService::new(&state.db).import(payload).await?;

    Ok(ApiResponse::ok(
        format!("{} students imported", report.imported),
        report,
    ))
}
