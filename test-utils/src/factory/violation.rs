//! Violation record factory.
//!
//! Inserts violation rows directly, bypassing the point ledger. Tests that
//! care about the student aggregate should go through the violation service
//! instead.

use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates a violation row with the given associations.
///
/// # Arguments
/// - `db` - Database connection
/// - `nis` - Student natural key
/// - `enrollment_id` - Enrollment the violation is attributed to
/// - `type_id` - Violation type ID
/// - `teacher_id` - Recording teacher's user ID
///
/// # Returns
/// - `Ok(entity::violation::Model)` - Created violation entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_violation(
    db: &DatabaseConnection,
    nis: i64,
    enrollment_id: i32,
    type_id: i32,
    teacher_id: i32,
) -> Result<entity::violation::Model, DbErr> {
    create_violation_at(db, nis, enrollment_id, type_id, teacher_id, Utc::now()).await
}

/// Creates a violation row with an explicit `created_at`, for tests that
/// exercise time-window filtering.
pub async fn create_violation_at(
    db: &DatabaseConnection,
    nis: i64,
    enrollment_id: i32,
    type_id: i32,
    teacher_id: i32,
    created_at: DateTime<Utc>,
) -> Result<entity::violation::Model, DbErr> {
    entity::violation::ActiveModel {
        nis: ActiveValue::Set(nis),
        enrollment_id: ActiveValue::Set(enrollment_id),
        type_id: ActiveValue::Set(type_id),
        teacher_id: ActiveValue::Set(teacher_id),
        implemented: ActiveValue::Set(false),
        created_at: ActiveValue::Set(created_at),
        updated_at: ActiveValue::Set(created_at),
        ..Default::default()
    }
    .insert(db)
    .await
}
