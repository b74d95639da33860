use axum::{extract::State, response::IntoResponse};

use crate::{
    error::AppError,
    middleware::auth::AuthUser,
    model::{
        api::{ApiResponse, ErrorDto},
        stats::StatsOverviewDto,
    },
    service::stats::StatsService,
    state::AppState,
};

/// Tag for grouping dashboard endpoints in OpenAPI documentation
pub static STATS_TAG: &str = "stats";

/// Get the dashboard overview.
///
/// Headline counts, per-category and per-month violation totals, and the
/// five highest-point students.
#[utoipa::path(
    get,
    path = "/v1/stats-overview",
    tag = STATS_TAG,
    responses(
        (status = 200, description = "Dashboard overview", body = StatsOverviewDto),
        (status = 401, description = "Missing bearer token", body = ErrorDto)
    ),
)]
pub async fn stats_overview(
    State(state): State<AppState>,
    _user: AuthUser,
) -> Result<impl IntoResponse, AppError> {
    let overview = StatsService::new(&state.db).overview().await?;

    Ok(ApiResponse::ok("Overview retrieved", overview))
}
