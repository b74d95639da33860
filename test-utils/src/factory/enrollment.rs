//! Enrollment factory linking students to classes within year periods.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates an enrollment for the given student, class and year period.
///
/// # Arguments
/// - `db` - Database connection
/// - `nis` - Student natural key
/// - `class_id` - Class ID
/// - `year_period_id` - Year period ID
///
/// # Returns
/// - `Ok(entity::enrollment::Model)` - Created enrollment entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_enrollment(
    db: &DatabaseConnection,
    nis: i64,
    class_id: i32,
    year_period_id: i32,
) -> Result<entity::enrollment::Model, DbErr> {
    entity::enrollment::ActiveModel {
        nis: ActiveValue::Set(nis),
        class_id: ActiveValue::Set(class_id),
        year_period_id: ActiveValue::Set(year_period_id),
        ..Default::default()
    }
    .insert(db)
    .await
}
