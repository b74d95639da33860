use sea_orm::{
    ActiveModelTrait, ActiveValue, Condition, ConnectionTrait, DbErr, EntityTrait, PaginatorTrait,
    QueryFilter, QueryOrder,
};

use crate::model::{
    class::ClassFilter,
    page::{Page, PageParams},
};
use crate::util::query::{contains_ci, eq_ci};

use super::paginate::paginate;

pub struct ClassRepository<'a, C> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ClassRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Gets paginated classes ordered by name.
    pub async fn list(
        &self,
        filter: &ClassFilter,
        params: &PageParams,
    ) -> Result<Page<entity::class::Model>, DbErr> {
        let mut condition = Condition::all();
        if let Some(term) = filter.search.as_deref().filter(|s| !s.trim().is_empty()) {
            condition = condition.add(contains_ci(entity::class::Column::Name, term));
        }

        let query = entity::prelude::Class::find()
            .filter(condition)
            .order_by_asc(entity::class::Column::Name);

        paginate(self.db, query, params).await
    }

    /// Gets every class ordered by name, for dropdowns.
    pub async fn all(&self) -> Result<Vec<entity::class::Model>, DbErr> {
        entity::prelude::Class::find()
            .order_by_asc(entity::class::Column::Name)
            .all(self.db)
            .await
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<entity::class::Model>, DbErr> {
        entity::prelude::Class::find_by_id(id).one(self.db).await
    }

    /// Looks a class up by name, ignoring case.
    pub async fn find_by_name(&self, name: &str) -> Result<Option<entity::class::Model>, DbErr> {
        entity::prelude::Class::find()
            .filter(eq_ci(entity::class::Column::Name, name))
            .one(self.db)
            .await
    }

    pub async fn create(&self, name: String) -> Result<entity::class::Model, DbErr> {
        entity::class::ActiveModel {
            name: ActiveValue::Set(name),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn update(
        &self,
        class: entity::class::Model,
        name: String,
    ) -> Result<entity::class::Model, DbErr> {
        let mut active: entity::class::ActiveModel = class.into();
        active.name = ActiveValue::Set(name);
        active.update(self.db).await
    }

    pub async fn delete(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::Class::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(())
    }

    /// Counts classes, for the dashboard cards.
    pub async fn count(&self) -> Result<u64, DbErr> {
        entity::prelude::Class::find().count(self.db).await
    }
}
