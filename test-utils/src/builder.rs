use entity::prelude::*;
use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{context::TestContext, error::TestError};

/// Builder for creating test contexts with customizable database schemas.
///
/// Provides a fluent interface for configuring test environments with in-memory SQLite
/// databases. Use the builder pattern to add entity tables, then call `build()` to
/// create the configured test context.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::builder::TestBuilder;
/// use entity::prelude::{Student, Class};
///
/// let test = TestBuilder::new()
///     .with_table(Student)
///     .with_table(Class)
///     .build()
///     .await?;
/// ```
pub struct TestBuilder {
    /// Vector of CREATE TABLE statements to execute during database setup.
    ///
    /// Each statement is generated from an entity model using SeaORM's schema builder.
    /// Statements are executed in the order they were added during `build()`.
    tables: Vec<TableCreateStatement>,
}

impl TestBuilder {
    /// Creates a new test builder with no tables configured.
    ///
    /// # Returns
    /// - New `TestBuilder` instance with empty table configuration
    pub fn new() -> Self {
        Self { tables: Vec::new() }
    }

    /// Adds an entity table to the test database schema.
    ///
    /// Generates a CREATE TABLE statement from the provided SeaORM entity using SQLite
    /// backend syntax. The table will be created when `build()` is called. Chain multiple
    /// calls to add multiple tables. Tables should be added in dependency order (tables
    /// with foreign keys should be added after their referenced tables).
    ///
    /// # Arguments
    /// - `entity` - SeaORM entity model implementing `EntityTrait` to create table for
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Adds all tables required for roster operations.
    ///
    /// This convenience method adds the following tables in dependency order:
    /// - User
    /// - Student
    /// - Class
    /// - YearPeriod
    /// - Enrollment
    ///
    /// Use this when testing student/class/enrollment functionality that does
    /// not involve the violation catalog. For violation tests, use
    /// `with_violation_tables()`.
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_roster_tables(self) -> Self {
        self.with_table(User)
            .with_table(Student)
            .with_table(Class)
            .with_table(YearPeriod)
            .with_table(Enrollment)
    }

    /// Adds all tables required for violation operations.
    ///
    /// Adds the roster tables plus the violation catalog and violation record
    /// tables, in dependency order:
    /// - roster tables (see `with_roster_tables()`)
    /// - ViolationCategory
    /// - ViolationType
    /// - Violation
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_violation_tables(self) -> Self {
        self.with_roster_tables()
            .with_table(ViolationCategory)
            .with_table(ViolationType)
            .with_table(Violation)
    }

    /// Builds the configured test context.
    ///
    /// Creates the in-memory database and executes all configured CREATE TABLE
    /// statements in the order they were added.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Fully initialized test context
    /// - `Err(TestError::Database)` - Failed to connect or create tables
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut context = TestContext::new();

        context.with_tables(self.tables).await?;

        Ok(context)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
