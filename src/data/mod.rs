//! Database repository layer for all domain entities.
//!
//! Repositories wrap SeaORM queries for one entity family each and return
//! entity models or projection DTOs to the service layer. Every repository
//! is generic over [`sea_orm::ConnectionTrait`] so the same code runs
//! against the connection pool and inside transactions.

pub mod class;
pub mod paginate;
pub mod stats;
pub mod student;
pub mod user;
pub mod violation;
pub mod violation_category;
pub mod violation_type;
pub mod year_period;

#[cfg(test)]
mod test;
