//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests. Factories automatically handle dependencies and foreign
//! key relationships, making tests more concise and maintainable.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     // Create with defaults
//!     let student = factory::student::create_student(&db).await?;
//!     let class = factory::class::create_class(&db).await?;
//!
//!     // Create a violation with its full dependency chain
//!     let setup = factory::helpers::create_violation_with_dependencies(&db).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! Use the factory builders for custom values:
//!
//! ```rust,ignore
//! let student = factory::student::StudentFactory::new(&db)
//!     .nis(12345)
//!     .name("Budi")
//!     .point(10)
//!     .build()
//!     .await?;
//! ```

pub mod class;
pub mod enrollment;
pub mod helpers;
pub mod student;
pub mod user;
pub mod violation;
pub mod violation_category;
pub mod violation_type;
pub mod year_period;

// Re-export commonly used factory functions for concise usage
pub use class::create_class;
pub use enrollment::create_enrollment;
pub use student::create_student;
pub use user::create_user;
pub use violation::create_violation;
pub use violation_category::create_violation_category;
pub use violation_type::create_violation_type;
pub use year_period::create_year_period;
