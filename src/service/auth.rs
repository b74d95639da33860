use chrono::{Duration, Utc};
use jsonwebtoken::{encode, Header};
use sea_orm::DatabaseConnection;

use crate::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    model::auth::{Claims, LoginDto, LoginResponse},
    state::Keys,
};

/// Issued tokens stay valid for one week.
const TOKEN_LIFETIME_DAYS: i64 = 7;

pub struct AuthService<'a> {
    db: &'a DatabaseConnection,
    keys: &'a Keys,
}

impl<'a> AuthService<'a> {
    pub fn new(db: &'a DatabaseConnection, keys: &'a Keys) -> Self {
        Self { db, keys }
    }

    /// Verifies credentials and issues a bearer token.
    ///
    /// Unknown usernames and wrong passwords produce the same error so the
    /// response does not reveal which accounts exist.
    pub async fn login(&self, dto: LoginDto) -> Result<LoginResponse, AppError> {
        let user = UserRepository::new(self.db)
            .find_by_username(dto.username.trim())
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        let valid = bcrypt::verify(&dto.password, &user.password)
            .map_err(|err| AppError::Internal(format!("Password verification failed: {err}")))?;
        if !valid {
            return Err(AuthError::InvalidCredentials.into());
        }

        let expiry = Utc::now() + Duration::days(TOKEN_LIFETIME_DAYS);
        let claims = Claims {
            sub: user.id,
            username: user.username.clone(),
            role: user.role.clone(),
            exp: expiry.timestamp() as usize,
        };

        let token = encode(&Header::default(), &claims, &self.keys.encoding)
            .map_err(AuthError::TokenCreation)?;

        Ok(LoginResponse {
            token,
            user: user.into(),
        })
    }
}
