//! Violation category factory.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates a violation category with a unique default name.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok(entity::violation_category::Model)` - Created category entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_violation_category(
    db: &DatabaseConnection,
) -> Result<entity::violation_category::Model, DbErr> {
    create_violation_category_with_name(db, format!("Category {}", next_id())).await
}

/// Creates a violation category with the given name.
pub async fn create_violation_category_with_name(
    db: &DatabaseConnection,
    name: impl Into<String>,
) -> Result<entity::violation_category::Model, DbErr> {
    entity::violation_category::ActiveModel {
        name: ActiveValue::Set(name.into()),
        ..Default::default()
    }
    .insert(db)
    .await
}
