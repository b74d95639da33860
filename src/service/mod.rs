//! Business logic layer.
//!
//! Services sit between controllers and repositories: they validate input,
//! enforce uniqueness and existence rules, and keep the denormalized student
//! point total consistent with the recorded violations. Controllers never
//! touch repositories directly.

pub mod auth;
pub mod class;
pub mod stats;
pub mod student;
pub mod user;
pub mod violation;
pub mod violation_category;
pub mod violation_type;
pub mod year_period;

#[cfg(test)]
mod test;
