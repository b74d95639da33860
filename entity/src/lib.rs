//! SeaORM entities for the violation tracking schema.

pub mod prelude;

pub mod class;
pub mod enrollment;
pub mod student;
pub mod user;
pub mod violation;
pub mod violation_category;
pub mod violation_type;
pub mod year_period;
