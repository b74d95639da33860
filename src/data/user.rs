use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, Condition, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::model::{
    page::{Page, PageParams},
    user::UserFilter,
};
use crate::util::query::contains_ci;

use super::paginate::paginate;

pub struct UserRepository<'a, C> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> UserRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Gets paginated users ordered by username.
    pub async fn list(
        &self,
        filter: &UserFilter,
        params: &PageParams,
    ) -> Result<Page<entity::user::Model>, DbErr> {
        let mut condition = Condition::all();
        if let Some(term) = filter.search.as_deref().filter(|s| !s.trim().is_empty()) {
            condition = condition.add(contains_ci(entity::user::Column::Username, term));
        }

        let query = entity::prelude::User::find()
            .filter(condition)
            .order_by_asc(entity::user::Column::Username);

        paginate(self.db, query, params).await
    }

    /// Gets every user, for the filter-form teacher dropdown.
    pub async fn all(&self) -> Result<Vec<entity::user::Model>, DbErr> {
        entity::prelude::User::find()
            .order_by_asc(entity::user::Column::Username)
            .all(self.db)
            .await
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<entity::user::Model>, DbErr> {
        entity::prelude::User::find_by_id(id).one(self.db).await
    }

    pub async fn find_by_username(
        &self,
        username: &str,
    ) -> Result<Option<entity::user::Model>, DbErr> {
        entity::prelude::User::find()
            .filter(entity::user::Column::Username.eq(username))
            .one(self.db)
            .await
    }

    pub async fn count(&self) -> Result<u64, DbErr> {
        entity::prelude::User::find().count(self.db).await
    }

    /// Inserts a user row; `password` must already be hashed.
    pub async fn create(
        &self,
        username: String,
        password: String,
        role: String,
    ) -> Result<entity::user::Model, DbErr> {
        let now = chrono::Utc::now();
        entity::user::ActiveModel {
            username: ActiveValue::Set(username),
            password: ActiveValue::Set(password),
            role: ActiveValue::Set(role),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Updates a user; `password` of `None` keeps the stored hash.
    pub async fn update(
        &self,
        user: entity::user::Model,
        username: String,
        password: Option<String>,
        role: String,
    ) -> Result<entity::user::Model, DbErr> {
        let mut active: entity::user::ActiveModel = user.into();
        active.username = ActiveValue::Set(username);
        if let Some(password) = password {
            active.password = ActiveValue::Set(password);
        }
        active.role = ActiveValue::Set(role);
        active.updated_at = ActiveValue::Set(chrono::Utc::now());
        active.update(self.db).await
    }

    pub async fn delete(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::User::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(())
    }
}
