//! Shared helper utilities for factory methods.
//!
//! This module provides common utilities used across all factory modules,
//! including ID generation and convenience methods for creating entities
//! with their dependencies.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique IDs in tests.
///
/// This atomic counter ensures each factory-created entity gets a unique
/// identifier to prevent collisions in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// This function provides monotonically increasing values for use in
/// generating unique test identifiers across all factories.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Everything needed to exercise violation operations in a test.
pub struct ViolationSetup {
    pub teacher: entity::user::Model,
    pub student: entity::student::Model,
    pub class: entity::class::Model,
    pub year_period: entity::year_period::Model,
    pub enrollment: entity::enrollment::Model,
    pub category: entity::violation_category::Model,
    pub violation_type: entity::violation_type::Model,
    pub violation: entity::violation::Model,
}

/// Creates a complete violation record with all dependencies.
///
/// This is a convenience method that creates:
/// 1. User (as recording teacher)
/// 2. Student, Class, YearPeriod and the linking Enrollment
/// 3. Violation Category and Violation Type
/// 4. The Violation row itself
///
/// All entities are created with default values. The violation row is
/// inserted directly, without going through the point ledger, so the
/// student's aggregate point total stays at its factory default. Use the
/// individual factories if you need to customize specific entities.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok(ViolationSetup)` - All created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_violation_with_dependencies(
    db: &DatabaseConnection,
) -> Result<ViolationSetup, DbErr> {
    let teacher = crate::factory::user::create_user(db).await?;
    let student = crate::factory::student::create_student(db).await?;
    let class = crate::factory::class::create_class(db).await?;
    let year_period = crate::factory::year_period::create_year_period(db).await?;
    let enrollment =
        crate::factory::enrollment::create_enrollment(db, student.nis, class.id, year_period.id)
            .await?;
    let category = crate::factory::violation_category::create_violation_category(db).await?;
    let violation_type =
        crate::factory::violation_type::create_violation_type(db, category.id).await?;
    let violation = crate::factory::violation::create_violation(
        db,
        student.nis,
        enrollment.id,
        violation_type.id,
        teacher.id,
    )
    .await?;

    Ok(ViolationSetup {
        teacher,
        student,
        class,
        year_period,
        enrollment,
        category,
        violation_type,
        violation,
    })
}
