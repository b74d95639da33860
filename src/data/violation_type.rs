use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, Condition, ConnectionTrait, DbErr, EntityTrait,
    JoinType, QueryFilter, QueryOrder, QuerySelect, RelationTrait, Select,
};

use crate::model::{
    page::{Page, PageParams},
    violation_type::{ViolationTypeFilter, ViolationTypeListItemDto},
};
use crate::util::query::{contains_ci, eq_ci};

use super::paginate::paginate;

pub struct ViolationTypeRepository<'a, C> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ViolationTypeRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    fn joined() -> Select<entity::violation_type::Entity> {
        entity::prelude::ViolationType::find()
            .join(
                JoinType::InnerJoin,
                entity::violation_type::Relation::ViolationCategory.def(),
            )
            .select_only()
            .column_as(entity::violation_type::Column::Id, "id")
            .column_as(entity::violation_type::Column::Name, "name")
            .column_as(entity::violation_type::Column::Point, "point")
            .column_as(entity::violation_type::Column::Punishment, "punishment")
            .column_as(entity::violation_type::Column::CategoryId, "category_id")
            .column_as(entity::violation_category::Column::Name, "category_name")
    }

    /// Gets paginated violation types joined with their category name.
    pub async fn list(
        &self,
        filter: &ViolationTypeFilter,
        params: &PageParams,
    ) -> Result<Page<ViolationTypeListItemDto>, DbErr> {
        let mut condition = Condition::all();
        if let Some(term) = filter.search.as_deref().filter(|s| !s.trim().is_empty()) {
            condition = condition.add(
                Condition::any()
                    .add(contains_ci(entity::violation_type::Column::Name, term))
                    .add(contains_ci(
                        entity::violation_type::Column::Punishment,
                        term,
                    )),
            );
        }
        if let Some(category_id) = filter.category_id {
            condition = condition.add(entity::violation_type::Column::CategoryId.eq(category_id));
        }

        let query = Self::joined()
            .filter(condition)
            .order_by_asc(entity::violation_type::Column::Name)
            .into_model::<ViolationTypeListItemDto>();

        paginate(self.db, query, params).await
    }

    /// Gets one violation type joined with its category name.
    pub async fn detail(&self, id: i32) -> Result<Option<ViolationTypeListItemDto>, DbErr> {
        Self::joined()
            .filter(entity::violation_type::Column::Id.eq(id))
            .into_model::<ViolationTypeListItemDto>()
            .one(self.db)
            .await
    }

    pub async fn find_by_id(
        &self,
        id: i32,
    ) -> Result<Option<entity::violation_type::Model>, DbErr> {
        entity::prelude::ViolationType::find_by_id(id)
            .one(self.db)
            .await
    }

    /// Looks a type up by name, ignoring case.
    pub async fn find_by_name(
        &self,
        name: &str,
    ) -> Result<Option<entity::violation_type::Model>, DbErr> {
        entity::prelude::ViolationType::find()
            .filter(eq_ci(entity::violation_type::Column::Name, name))
            .one(self.db)
            .await
    }

    /// Gets all types belonging to one category.
    pub async fn by_category(
        &self,
        category_id: i32,
    ) -> Result<Vec<entity::violation_type::Model>, DbErr> {
        entity::prelude::ViolationType::find()
            .filter(entity::violation_type::Column::CategoryId.eq(category_id))
            .order_by_asc(entity::violation_type::Column::Name)
            .all(self.db)
            .await
    }

    pub async fn create(
        &self,
        name: String,
        point: i32,
        punishment: String,
        category_id: i32,
    ) -> Result<entity::violation_type::Model, DbErr> {
        entity::violation_type::ActiveModel {
            name: ActiveValue::Set(name),
            point: ActiveValue::Set(point),
            punishment: ActiveValue::Set(punishment),
            category_id: ActiveValue::Set(category_id),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn update(
        &self,
        kind: entity::violation_type::Model,
        name: String,
        point: i32,
        punishment: String,
        category_id: i32,
    ) -> Result<entity::violation_type::Model, DbErr> {
        let mut active: entity::violation_type::ActiveModel = kind.into();
        active.name = ActiveValue::Set(name);
        active.point = ActiveValue::Set(point);
        active.punishment = ActiveValue::Set(punishment);
        active.category_id = ActiveValue::Set(category_id);
        active.update(self.db).await
    }

    pub async fn delete(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::ViolationType::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(())
    }
}
