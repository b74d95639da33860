use chrono::{DateTime, Utc};
use sea_orm::{
    sea_query::{Alias, Expr, ExprTrait},
    ActiveModelTrait, ActiveValue, ColumnTrait, Condition, ConnectionTrait, DbErr, EntityTrait,
    JoinType, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, RelationTrait, Select,
};

use crate::model::{
    page::{Page, PageParams},
    violation::{ViolationFilter, ViolationListItemDto},
};
use crate::util::query::contains_ci;

use super::paginate::paginate;

pub struct ViolationRepository<'a, C> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ViolationRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Base query joining violations with student, class, type, category,
    /// and recording teacher, projected into the list DTO columns.
    fn joined() -> Select<entity::violation::Entity> {
        entity::prelude::Violation::find()
            .join(JoinType::InnerJoin, entity::violation::Relation::Student.def())
            .join(
                JoinType::InnerJoin,
                entity::violation::Relation::Enrollment.def(),
            )
            .join(JoinType::LeftJoin, entity::enrollment::Relation::Class.def())
            .join(
                JoinType::InnerJoin,
                entity::violation::Relation::ViolationType.def(),
            )
            .join(
                JoinType::InnerJoin,
                entity::violation_type::Relation::ViolationCategory.def(),
            )
            .join(JoinType::InnerJoin, entity::violation::Relation::User.def())
            .select_only()
            .column_as(entity::violation::Column::Id, "id")
            .column_as(entity::violation::Column::Nis, "nis")
            .column_as(entity::student::Column::Name, "student_name")
            .column_as(entity::class::Column::Name, "class_name")
            .column_as(entity::violation_type::Column::Name, "violation_name")
            .column_as(entity::violation_type::Column::Point, "point")
            .column_as(entity::violation_type::Column::Punishment, "punishment")
            .column_as(entity::violation_category::Column::Name, "category_name")
            .column_as(entity::violation::Column::Implemented, "implemented")
            .column_as(entity::user::Column::Username, "teacher_name")
            .column_as(entity::violation::Column::CreatedAt, "created_at")
    }

    /// Translates the structured filter into a single condition over the
    /// joined entities. `from_date` is the resolved time-window anchor.
    fn condition(filter: &ViolationFilter, from_date: Option<DateTime<Utc>>) -> Condition {
        let mut condition = Condition::all();
        if let Some(term) = filter.search.as_deref().filter(|s| !s.trim().is_empty()) {
            condition = condition.add(
                Condition::any()
                    .add(contains_ci(entity::student::Column::Name, term))
                    .add(
                        Expr::col((entity::violation::Entity, entity::violation::Column::Nis))
                            .cast_as(Alias::new("text"))
                            .like(format!("%{term}%")),
                    )
                    .add(contains_ci(entity::class::Column::Name, term))
                    .add(contains_ci(entity::violation_type::Column::Name, term))
                    .add(contains_ci(entity::user::Column::Username, term)),
            );
        }
        if let Some(year_id) = filter.year_id {
            condition = condition.add(entity::enrollment::Column::YearPeriodId.eq(year_id));
        }
        if let Some(class_id) = filter.class_id {
            condition = condition.add(entity::enrollment::Column::ClassId.eq(class_id));
        }
        if let Some(category_id) = filter.category_id {
            condition = condition.add(entity::violation_type::Column::CategoryId.eq(category_id));
        }
        if let Some(teacher_id) = filter.teacher_id {
            condition = condition.add(entity::violation::Column::TeacherId.eq(teacher_id));
        }
        if let Some(status) = filter.status {
            condition = condition.add(entity::violation::Column::Implemented.eq(status));
        }
        if let Some(from) = from_date {
            condition = condition.add(entity::violation::Column::CreatedAt.gte(from));
        }

        condition
    }

    /// Gets paginated violations matching the filter, newest first.
    pub async fn list(
        &self,
        filter: &ViolationFilter,
        from_date: Option<DateTime<Utc>>,
        params: &PageParams,
    ) -> Result<Page<ViolationListItemDto>, DbErr> {
        let query = Self::joined()
            .filter(Self::condition(filter, from_date))
            .order_by_desc(entity::violation::Column::CreatedAt)
            .into_model::<ViolationListItemDto>();

        paginate(self.db, query, params).await
    }

    /// Gets every violation matching the filter, unpaginated, for export.
    pub async fn export(
        &self,
        filter: &ViolationFilter,
        from_date: Option<DateTime<Utc>>,
    ) -> Result<Vec<ViolationListItemDto>, DbErr> {
        Self::joined()
            .filter(Self::condition(filter, from_date))
            .order_by_desc(entity::violation::Column::CreatedAt)
            .into_model::<ViolationListItemDto>()
            .all(self.db)
            .await
    }

    /// Gets one violation in the joined projection.
    pub async fn detail(&self, id: i32) -> Result<Option<ViolationListItemDto>, DbErr> {
        Self::joined()
            .filter(entity::violation::Column::Id.eq(id))
            .into_model::<ViolationListItemDto>()
            .one(self.db)
            .await
    }

    /// Gets the raw violation row.
    pub async fn find_by_id(&self, id: i32) -> Result<Option<entity::violation::Model>, DbErr> {
        entity::prelude::Violation::find_by_id(id).one(self.db).await
    }

    pub async fn create(
        &self,
        nis: i64,
        enrollment_id: i32,
        type_id: i32,
        teacher_id: i32,
        implemented: bool,
    ) -> Result<entity::violation::Model, DbErr> {
        let now = Utc::now();
        entity::violation::ActiveModel {
            nis: ActiveValue::Set(nis),
            enrollment_id: ActiveValue::Set(enrollment_id),
            type_id: ActiveValue::Set(type_id),
            teacher_id: ActiveValue::Set(teacher_id),
            implemented: ActiveValue::Set(implemented),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Updates the violation's type and implemented flag.
    pub async fn update(
        &self,
        violation: entity::violation::Model,
        type_id: i32,
        implemented: bool,
    ) -> Result<entity::violation::Model, DbErr> {
        let mut active: entity::violation::ActiveModel = violation.into();
        active.type_id = ActiveValue::Set(type_id);
        active.implemented = ActiveValue::Set(implemented);
        active.updated_at = ActiveValue::Set(Utc::now());
        active.update(self.db).await
    }

    /// Flips the implemented flag without touching anything else.
    pub async fn set_implemented(
        &self,
        violation: entity::violation::Model,
        implemented: bool,
    ) -> Result<entity::violation::Model, DbErr> {
        let mut active: entity::violation::ActiveModel = violation.into();
        active.implemented = ActiveValue::Set(implemented);
        active.updated_at = ActiveValue::Set(Utc::now());
        active.update(self.db).await
    }

    pub async fn delete(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::Violation::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(())
    }
}
