use axum::{
    routing::{delete, get, post, put},
    Json, Router,
};
use utoipa::OpenApi;

use crate::{
    controller::{
        auth::login,
        class::{
            create_class, delete_class, get_class, import_classes, list_classes, update_class,
        },
        stats::stats_overview,
        student::{
            create_student, delete_student, get_student, import_students, list_students,
            promote_students, update_student,
        },
        user::{create_user, delete_user, get_user, list_users, update_user},
        violation::{
            create_violation, delete_violation, export_violations, get_violation,
            implement_violation, list_violations, unimplement_violation, update_violation,
            violation_filter_form,
        },
        violation_category::{
            create_violation_category, delete_violation_category, get_violation_category,
            list_violation_categories, update_violation_category,
        },
        violation_type::{
            create_violation_type, delete_violation_type, get_violation_type,
            list_violation_types, update_violation_type,
        },
        year_period::{create_year_period, delete_year_period, list_year_periods},
    },
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::controller::auth::login,
        crate::controller::student::list_students,
        crate::controller::student::get_student,
        crate::controller::student::create_student,
        crate::controller::student::update_student,
        crate::controller::student::delete_student,
        crate::controller::student::promote_students,
        crate::controller::student::import_students,
        crate::controller::class::list_classes,
        crate::controller::class::get_class,
        crate::controller::class::create_class,
        crate::controller::class::update_class,
        crate::controller::class::delete_class,
        crate::controller::class::import_classes,
        crate::controller::year_period::list_year_periods,
        crate::controller::year_period::create_year_period,
        crate::controller::year_period::delete_year_period,
        crate::controller::violation::list_violations,
        crate::controller::violation::export_violations,
        crate::controller::violation::violation_filter_form,
        crate::controller::violation::get_violation,
        crate::controller::violation::create_violation,
        crate::controller::violation::update_violation,
        crate::controller::violation::delete_violation,
        crate::controller::violation::implement_violation,
        crate::controller::violation::unimplement_violation,
        crate::controller::violation_type::list_violation_types,
        crate::controller::violation_type::get_violation_type,
        crate::controller::violation_type::create_violation_type,
        crate::controller::violation_type::update_violation_type,
        crate::controller::violation_type::delete_violation_type,
        crate::controller::violation_category::list_violation_categories,
        crate::controller::violation_category::get_violation_category,
        crate::controller::violation_category::create_violation_category,
        crate::controller::violation_category::update_violation_category,
        crate::controller::violation_category::delete_violation_category,
        crate::controller::user::list_users,
        crate::controller::user::get_user,
        crate::controller::user::create_user,
        crate::controller::user::update_user,
        crate::controller::user::delete_user,
        crate::controller::stats::stats_overview,
    ),
    info(
        title = "Student Violation Tracking API",
        description = "REST backend for recording student disciplinary violations"
    )
)]
struct ApiDoc;

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/v1/auth/login", post(login))
        .route("/v1/students", get(list_students).post(create_student))
        .route("/v1/students/promote", post(promote_students))
        .route("/v1/students/import", post(import_students))
        .route(
            "/v1/students/{nis}",
            get(get_student).put(update_student).delete(delete_student),
        )
        .route("/v1/classes", get(list_classes).post(create_class))
        .route("/v1/classes/import", post(import_classes))
        .route(
            "/v1/classes/{id}",
            get(get_class).put(update_class).delete(delete_class),
        )
        .route(
            "/v1/year-periods",
            get(list_year_periods).post(create_year_period),
        )
        .route("/v1/year-periods/{id}", delete(delete_year_period))
        .route("/v1/violations", get(list_violations).post(create_violation))
        .route("/v1/violations/export", get(export_violations))
        .route("/v1/violations/filter-form", get(violation_filter_form))
        .route("/v1/violations/implement/{id}", put(implement_violation))
        .route("/v1/violations/unimplement/{id}", put(unimplement_violation))
        .route(
            "/v1/violations/{id}",
            get(get_violation)
                .put(update_violation)
                .delete(delete_violation),
        )
        .route(
            "/v1/violation-types",
            get(list_violation_types).post(create_violation_type),
        )
        .route(
            "/v1/violation-types/{id}",
            get(get_violation_type)
                .put(update_violation_type)
                .delete(delete_violation_type),
        )
        .route(
            "/v1/violation-categories",
            get(list_violation_categories).post(create_violation_category),
        )
        .route(
            "/v1/violation-categories/{id}",
            get(get_violation_category)
                .put(update_violation_category)
                .delete(delete_violation_category),
        )
        .route("/v1/users", get(list_users).post(create_user))
        .route(
            "/v1/users/{id}",
            get(get_user).put(update_user).delete(delete_user),
        )
        .route("/v1/stats-overview", get(stats_overview))
        .route("/api-docs/openapi.json", get(openapi_json))
}
