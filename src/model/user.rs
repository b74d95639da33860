use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
pub struct UserFilter {
    /// Case-insensitive substring match on username.
    pub search: Option<String>,
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CreateUserDto {
    pub username: String,
    pub password: String,
    pub role: String,
}

/// Password is optional on update; absent means keep the current hash.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct UpdateUserDto {
    pub username: String,
    pub password: Option<String>,
    pub role: String,
}

/// User projection without the password hash.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct UserDto {
    pub id: i32,
    pub username: String,
    pub role: String,
    pub created_at: DateTime<Utc>,
}

impl From<entity::user::Model> for UserDto {
    fn from(user: entity::user::Model) -> Self {
        Self {
            id: user.id,
            username: user.username,
            role: user.role,
            created_at: user.created_at,
        }
    }
}
