//! Class factory for creating test class entities.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates a class with a unique default name.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok(entity::class::Model)` - Created class entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_class(db: &DatabaseConnection) -> Result<entity::class::Model, DbErr> {
    create_class_with_name(db, format!("Class {}", next_id())).await
}

/// Creates a class with the given name.
///
/// # Arguments
/// - `db` - Database connection
/// - `name` - Class label, e.g. "X IPA 1"
///
/// # Returns
/// - `Ok(entity::class::Model)` - Created class entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_class_with_name(
    db: &DatabaseConnection,
    name: impl Into<String>,
) -> Result<entity::class::Model, DbErr> {
    entity::class::ActiveModel {
        name: ActiveValue::Set(name.into()),
        ..Default::default()
    }
    .insert(db)
    .await
}
