//! Year period factory for creating test academic-year windows.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates a year period with a unique default start year.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok(entity::year_period::Model)` - Created year period entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_year_period(
    db: &DatabaseConnection,
) -> Result<entity::year_period::Model, DbErr> {
    create_year_period_for(db, 2000 + next_id() as i32).await
}

/// Creates a year period starting at the given year.
///
/// The display name follows the original backend's convention
/// ("Tahun Ajaran {start}/{end}").
///
/// # Arguments
/// - `db` - Database connection
/// - `start_year` - First calendar year of the academic year
///
/// # Returns
/// - `Ok(entity::year_period::Model)` - Created year period entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_year_period_for(
    db: &DatabaseConnection,
    start_year: i32,
) -> Result<entity::year_period::Model, DbErr> {
    entity::year_period::ActiveModel {
        start_year: ActiveValue::Set(start_year),
        end_year: ActiveValue::Set(start_year + 1),
        display_name: ActiveValue::Set(format!("Tahun Ajaran {}/{}", start_year, start_year + 1)),
        ..Default::default()
    }
    .insert(db)
    .await
}
