use sea_orm::DatabaseConnection;

use crate::{
    data::user::UserRepository,
    error::AppError,
    model::{
        page::{Page, PageParams},
        user::{CreateUserDto, UpdateUserDto, UserDto, UserFilter},
    },
};

pub struct UserService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn list(
        &self,
        filter: &UserFilter,
        params: &PageParams,
    ) -> Result<Page<UserDto>, AppError> {
        let page = UserRepository::new(self.db).list(filter, params).await?;

        Ok(Page {
            records: page.records.into_iter().map(Into::into).collect(),
            meta: page.meta,
        })
    }

    pub async fn get_by_id(&self, id: i32) -> Result<UserDto, AppError> {
        UserRepository::new(self.db)
            .find_by_id(id)
            .await?
            .map(Into::into)
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))
    }

    /// Creates a user with a bcrypt-hashed password.
    pub async fn create(&self, dto: CreateUserDto) -> Result<UserDto, AppError> {
        let username = dto.username.trim().to_string();
        if username.is_empty() {
            return Err(AppError::Validation(
                "Username must not be empty".to_string(),
            ));
        }
        if dto.password.len() < 6 {
            return Err(AppError::Validation(
                "Password must be at least 6 characters".to_string(),
            ));
        }

        let users = UserRepository::new(self.db);
        if users.find_by_username(&username).await?.is_some() {
            return Err(AppError::Conflict("Username already taken".to_string()));
        }

        let hash = bcrypt::hash(&dto.password, bcrypt::DEFAULT_COST)
            .map_err(|err| AppError::Internal(format!("Password hashing failed: {err}")))?;

        Ok(users.create(username, hash, dto.role).await?.into())
    }

    /// Updates a user. An absent password keeps the stored hash.
    pub async fn update(&self, id: i32, dto: UpdateUserDto) -> Result<UserDto, AppError> {
        let username = dto.username.trim().to_string();
        if username.is_empty() {
            return Err(AppError::Validation(
                "Username must not be empty".to_string(),
            ));
        }

        let users = UserRepository::new(self.db);
        let user = users
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

        if let Some(existing) = users.find_by_username(&username).await? {
            if existing.id != id {
                return Err(AppError::Conflict("Username already taken".to_string()));
            }
        }

        let hash = match dto.password {
            Some(password) => {
                if password.len() < 6 {
                    return Err(AppError::Validation(
                        "Password must be at least 6 characters".to_string(),
                    ));
                }
                Some(
                    bcrypt::hash(&password, bcrypt::DEFAULT_COST).map_err(|err| {
                        AppError::Internal(format!("Password hashing failed: {err}"))
                    })?,
                )
            }
            None => None,
        };

        Ok(users.update(user, username, hash, dto.role).await?.into())
    }

    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let users = UserRepository::new(self.db);
        users
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

        users.delete(id).await?;

        Ok(())
    }
}
