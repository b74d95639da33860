use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// JWT claims issued at login and verified on every protected route.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// User id.
    pub sub: i32,
    pub username: String,
    pub role: String,
    /// Expiry as a unix timestamp.
    pub exp: usize,
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct LoginDto {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct LoginResponse {
    pub token: String,
    pub user: AuthenticatedUser,
}

/// The subset of the user record returned alongside the token.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct AuthenticatedUser {
    pub id: i32,
    pub username: String,
    pub role: String,
}

impl From<entity::user::Model> for AuthenticatedUser {
    fn from(user: entity::user::Model) -> Self {
        Self {
            id: user.id,
            username: user.username,
            role: user.role,
        }
    }
}
