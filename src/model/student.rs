use chrono::{DateTime, Utc};
use sea_orm::FromQueryResult;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::util::parse::lenient_i32;

/// Filters accepted by the student list endpoint.
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
pub struct StudentFilter {
    /// Case-insensitive substring match on name or NIS.
    pub search: Option<String>,
    #[serde(default, rename = "classId", deserialize_with = "lenient_i32")]
    pub class_id: Option<i32>,
    #[serde(default, rename = "yearPeriodId", deserialize_with = "lenient_i32")]
    pub year_period_id: Option<i32>,
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CreateStudentDto {
    pub nis: i64,
    pub name: String,
    pub class_id: i32,
    pub year_period_id: i32,
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct UpdateStudentDto {
    pub name: String,
    pub class_id: i32,
    pub year_period_id: i32,
}

/// One student row in a list response, joined with the latest enrollment.
#[derive(Debug, Clone, PartialEq, Serialize, FromQueryResult, ToSchema)]
pub struct StudentListItemDto {
    pub nis: i64,
    pub name: String,
    pub point: i32,
    pub class_id: Option<i32>,
    pub class_name: Option<String>,
    pub year_period_id: Option<i32>,
    pub year_period: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Request body for moving a set of students into a class for a year period.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct PromoteStudentsDto {
    pub nis_list: Vec<i64>,
    pub class_id: i32,
    pub year_period_id: i32,
}

/// One row of a bulk student import payload. The class is given as a
/// label and resolved case-insensitively against existing classes.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct ImportStudentRow {
    pub nis: i64,
    pub name: String,
    pub class: String,
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct ImportStudentsDto {
    pub rows: Vec<ImportStudentRow>,
}

/// Outcome of a bulk import: imported rows plus the ones skipped and why.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ImportReportDto {
    pub imported: usize,
    pub skipped: Vec<SkippedRowDto>,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct SkippedRowDto {
    pub row: usize,
    pub reason: String,
}
