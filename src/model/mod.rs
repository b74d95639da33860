//! Domain models, DTOs, and operation parameter types.
//!
//! Each resource module holds the serializable DTOs its controller exchanges
//! with clients plus the parameter structs its service consumes. `api` and
//! `page` hold the response envelope and pagination types shared by every
//! resource.

pub mod api;
pub mod auth;
pub mod class;
pub mod page;
pub mod stats;
pub mod student;
pub mod user;
pub mod violation;
pub mod violation_category;
pub mod violation_type;
pub mod year_period;
