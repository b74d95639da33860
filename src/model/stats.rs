use serde::Serialize;
use utoipa::ToSchema;

/// Headline numbers for the dashboard cards.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct StatsCardsDto {
    pub total_students: u64,
    pub total_classes: u64,
    pub total_violations: u64,
    pub unimplemented_violations: u64,
    /// Mean violation-type point over all recorded violations; 0 when none.
    pub average_points: f64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct CategoryCountDto {
    pub category: String,
    pub count: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct TopStudentDto {
    pub nis: i64,
    pub name: String,
    pub point: i32,
}

/// Violation count bucketed by calendar month (`YYYY-MM`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct MonthCountDto {
    pub month: String,
    pub count: u64,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct StatsOverviewDto {
    pub cards: StatsCardsDto,
    pub violations_by_category: Vec<CategoryCountDto>,
    pub top_students: Vec<TopStudentDto>,
    pub violations_by_month: Vec<MonthCountDto>,
}
