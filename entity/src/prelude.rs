pub use super::class::Entity as Class;
pub use super::enrollment::Entity as Enrollment;
pub use super::student::Entity as Student;
pub use super::user::Entity as User;
pub use super::violation::Entity as Violation;
pub use super::violation_category::Entity as ViolationCategory;
pub use super::violation_type::Entity as ViolationType;
pub use super::year_period::Entity as YearPeriod;
