use chrono::{DateTime, Datelike, Duration, TimeZone, Utc};
use sea_orm::FromQueryResult;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::util::parse::{lenient_bool, lenient_i32};

/// Named time windows for violation list filtering. Every window is
/// open-ended: it sets a lower bound on `created_at` and no upper bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimePreset {
    Today,
    Last7Days,
    Last30Days,
    ThisMonth,
    ThisYear,
    All,
}

impl TimePreset {
    /// Parses a query-string value. Unknown values are treated as no
    /// filter rather than rejected.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "today" => Some(Self::Today),
            "last_7_days" => Some(Self::Last7Days),
            "last_30_days" => Some(Self::Last30Days),
            "this_month" => Some(Self::ThisMonth),
            "this_year" => Some(Self::ThisYear),
            "all" => Some(Self::All),
            _ => None,
        }
    }

    /// Lower bound for `created_at`, anchored to `now`. `None` means the
    /// window is unbounded.
    pub fn from_date(&self, now: DateTime<Utc>) -> Option<DateTime<Utc>> {
        match self {
            Self::Today => Utc
                .with_ymd_and_hms(now.year(), now.month(), now.day(), 0, 0, 0)
                .single(),
            Self::Last7Days => Some(now - Duration::days(7)),
            Self::Last30Days => Some(now - Duration::days(30)),
            Self::ThisMonth => Utc
                .with_ymd_and_hms(now.year(), now.month(), 1, 0, 0, 0)
                .single(),
            Self::ThisYear => Utc.with_ymd_and_hms(now.year(), 1, 1, 0, 0, 0).single(),
            Self::All => None,
        }
    }
}

/// Filters accepted by the violation list endpoint.
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
pub struct ViolationFilter {
    /// Case-insensitive substring match on student name or NIS.
    pub search: Option<String>,
    #[serde(default, rename = "year_id", deserialize_with = "lenient_i32")]
    pub year_id: Option<i32>,
    #[serde(default, rename = "classId", deserialize_with = "lenient_i32")]
    pub class_id: Option<i32>,
    #[serde(default, rename = "categoryId", deserialize_with = "lenient_i32")]
    pub category_id: Option<i32>,
    #[serde(default, rename = "teacherId", deserialize_with = "lenient_i32")]
    pub teacher_id: Option<i32>,
    /// Implemented flag; absent or non-boolean means both.
    #[serde(default, rename = "status", deserialize_with = "lenient_bool")]
    pub status: Option<bool>,
    #[serde(rename = "timePreset")]
    pub time_preset: Option<String>,
}

impl ViolationFilter {
    pub fn time_preset(&self) -> Option<TimePreset> {
        self.time_preset.as_deref().and_then(TimePreset::parse)
    }
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CreateViolationDto {
    pub nis: i64,
    pub type_id: i32,
    #[serde(default)]
    pub implemented: bool,
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct UpdateViolationDto {
    pub type_id: i32,
    pub implemented: bool,
}

/// Joined projection for violation lists and exports.
#[derive(Debug, Clone, PartialEq, Serialize, FromQueryResult, ToSchema)]
pub struct ViolationListItemDto {
    pub id: i32,
    pub nis: i64,
    pub student_name: String,
    pub class_name: Option<String>,
    pub violation_name: String,
    pub point: i32,
    pub punishment: String,
    pub category_name: String,
    pub implemented: bool,
    pub teacher_name: String,
    pub created_at: DateTime<Utc>,
}

/// Result of a ledger mutation: the student's point total afterwards.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct LedgerResultDto {
    pub violation_id: i32,
    pub nis: i64,
    pub total_points: i32,
}

/// Option lists for populating the violation filter form.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct FilterFormDto {
    pub classes: Vec<crate::model::class::ClassDto>,
    pub categories: Vec<crate::model::violation_category::ViolationCategoryDto>,
    pub teachers: Vec<crate::model::user::UserDto>,
}
