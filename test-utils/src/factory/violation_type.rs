//! Violation type factory for creating catalog entries.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test violation types with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::violation_type::ViolationTypeFactory;
///
/// let vtype = ViolationTypeFactory::new(&db, category.id)
///     .name("Late arrival")
///     .point(10)
///     .punishment("Written warning")
///     .build()
///     .await?;
/// ```
pub struct ViolationTypeFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    point: i32,
    punishment: String,
    category_id: i32,
}

impl<'a> ViolationTypeFactory<'a> {
    /// Creates a new ViolationTypeFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Violation Type {id}"` where id is auto-incremented
    /// - point: `10`
    /// - punishment: `"Warning {id}"`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `category_id` - Violation category the type belongs to
    pub fn new(db: &'a DatabaseConnection, category_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Violation Type {}", id),
            point: 10,
            punishment: format!("Warning {}", id),
            category_id,
        }
    }

    /// Sets the name for the violation type.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the point penalty for the violation type.
    pub fn point(mut self, point: i32) -> Self {
        self.point = point;
        self
    }

    /// Sets the punishment description for the violation type.
    pub fn punishment(mut self, punishment: impl Into<String>) -> Self {
        self.punishment = punishment.into();
        self
    }

    /// Builds and inserts the violation type entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::violation_type::Model)` - Created violation type entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::violation_type::Model, DbErr> {
        entity::violation_type::ActiveModel {
            name: ActiveValue::Set(self.name),
            point: ActiveValue::Set(self.point),
            punishment: ActiveValue::Set(self.punishment),
            category_id: ActiveValue::Set(self.category_id),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a violation type with default values in the given category.
///
/// Shorthand for `ViolationTypeFactory::new(db, category_id).build().await`.
///
/// # Arguments
/// - `db` - Database connection
/// - `category_id` - Violation category the type belongs to
///
/// # Returns
/// - `Ok(entity::violation_type::Model)` - Created violation type entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_violation_type(
    db: &DatabaseConnection,
    category_id: i32,
) -> Result<entity::violation_type::Model, DbErr> {
    ViolationTypeFactory::new(db, category_id).build().await
}
