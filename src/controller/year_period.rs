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
        year_period::{CreateYearPeriodDto, YearPeriodDto},
    },
    service::year_period::YearPeriodService,
    state::AppState,
};

/// Tag for grouping year period endpoints in OpenAPI documentation
pub static YEAR_PERIOD_TAG: &str = "year-period";

/// Get paginated year periods, newest first.
#[utoipa::path(
    get,
    path = "/v1/year-periods",
    tag = YEAR_PERIOD_TAG,
    params(PageParams),
    responses(
        (status = 200, description = "Paginated year periods", body = Vec<YearPeriodDto>),
        (status = 401, description = "Missing bearer token", body = ErrorDto)
    ),
)]
pub async fn list_year_periods(
    State(state): State<AppState>,
    _user: AuthUser,
    Query(params): Query<PageParams>,
) -> Result<impl IntoResponse, AppError> {
    let page = YearPeriodService::new(&state.db).list(&params).await?;

    Ok(ApiResponse::ok_paged(
        "Year periods retrieved",
        page.records,
        page.meta,
    ))
}

/// Create the year period starting at the given year.
///
/// The end year and display name ("Tahun Ajaran {start}/{end}") are derived
/// from the starting year.
#[utoipa::path(
    post,
    path = "/v1/year-periods",
    tag = YEAR_PERIOD_TAG,
    request_body = CreateYearPeriodDto,
    responses(
        (status = 201, description = "Year period created", body = YearPeriodDto),
        (status = 400, description = "Invalid year", body = ErrorDto),
        (status = 409, description = "Year period already exists", body = ErrorDto)
    ),
)]
pub async fn create_year_period(
    State(state): State<AppState>,
    _user: AuthUser,
    Json(payload): Json<CreateYearPeriodDto>,
) -> Result<impl IntoResponse, AppError> {
    let period = YearPeriodService::new(&state.db).create(payload).await?;

    Ok(ApiResponse::created("Year period created", period))
}

/// Delete a year period.
#[utoipa::path(
    delete,
    path = "/v1/year-periods/{id}",
    tag = YEAR_PERIOD_TAG,
    params(("id" = i32, Path, description = "Year period id")),
    responses(
        (status = 200, description = "Year period deleted"),
        (status = 404, description = "Year period not found", body = ErrorDto)
    ),
)]
pub async fn delete_year_period(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    YearPeriodService::new(&state.db).delete(id).await?;

    Ok(ApiResponse::<()>::message("Year period deleted"))
}
