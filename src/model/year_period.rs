use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A period is created from its starting year; the end year and display
/// name are derived.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CreateYearPeriodDto {
    pub year: i32,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct YearPeriodDto {
    pub id: i32,
    pub start_year: i32,
    pub end_year: i32,
    pub display_name: String,
}

impl From<entity::year_period::Model> for YearPeriodDto {
    fn from(period: entity::year_period::Model) -> Self {
        Self {
            id: period.id,
            start_year: period.start_year,
            end_year: period.end_year,
            display_name: period.display_name,
        }
    }
}
