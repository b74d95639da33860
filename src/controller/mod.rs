//! HTTP request handlers.
//!
//! Controllers parse and validate request input, call the service layer,
//! and wrap results in the shared response envelope. Protected handlers
//! take an [`crate::middleware::auth::AuthUser`] argument, which is what
//! enforces the bearer token.

pub mod auth;
pub mod class;
pub mod stats;
pub mod student;
pub mod user;
pub mod violation;
pub mod violation_category;
pub mod violation_type;
pub mod year_period;
