use sea_orm::{
    ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr, EntityTrait, QueryOrder,
};

pub struct ViolationCategoryRepository<'a, C> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ViolationCategoryRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Gets every category with its violation types, ordered by name.
    pub async fn all_with_types(
        &self,
    ) -> Result<
        Vec<(
            entity::violation_category::Model,
            Vec<entity::violation_type::Model>,
        )>,
        DbErr,
    > {
        entity::prelude::ViolationCategory::find()
            .find_with_related(entity::prelude::ViolationType)
            .order_by_asc(entity::violation_category::Column::Name)
            .all(self.db)
            .await
    }

    /// Gets every category without its types, for dropdowns.
    pub async fn all(&self) -> Result<Vec<entity::violation_category::Model>, DbErr> {
        entity::prelude::ViolationCategory::find()
            .order_by_asc(entity::violation_category::Column::Name)
            .all(self.db)
            .await
    }

    pub async fn find_by_id(
        &self,
        id: i32,
    ) -> Result<Option<entity::violation_category::Model>, DbErr> {
        entity::prelude::ViolationCategory::find_by_id(id)
            .one(self.db)
            .await
    }

    pub async fn create(
        &self,
        name: String,
    ) -> Result<entity::violation_category::Model, DbErr> {
        entity::violation_category::ActiveModel {
            name: ActiveValue::Set(name),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn update(
        &self,
        category: entity::violation_category::Model,
        name: String,
    ) -> Result<entity::violation_category::Model, DbErr> {
        let mut active: entity::violation_category::ActiveModel = category.into();
        active.name = ActiveValue::Set(name);
        active.update(self.db).await
    }

    pub async fn delete(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::ViolationCategory::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(())
    }
}
