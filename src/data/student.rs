use sea_orm::{
    sea_query::{Alias, Expr, ExprTrait},
    ActiveModelTrait, ActiveValue, ColumnTrait, Condition, ConnectionTrait, DbErr, EntityTrait,
    JoinType, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, RelationTrait,
};

use crate::model::{
    page::{Page, PageParams},
    student::{StudentFilter, StudentListItemDto},
};
use crate::util::query::contains_ci;

use super::paginate::paginate;

pub struct StudentRepository<'a, C> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> StudentRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Gets a student row by NIS.
    pub async fn find_by_nis(&self, nis: i64) -> Result<Option<entity::student::Model>, DbErr> {
        entity::prelude::Student::find_by_id(nis).one(self.db).await
    }

    /// Checks whether a student with the given NIS exists.
    pub async fn exists(&self, nis: i64) -> Result<bool, DbErr> {
        let count = entity::prelude::Student::find_by_id(nis)
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Gets paginated students joined with their enrollment, class, and
    /// year period. Search matches student name or NIS as text.
    pub async fn list(
        &self,
        filter: &StudentFilter,
        params: &PageParams,
    ) -> Result<Page<StudentListItemDto>, DbErr> {
        let mut condition = Condition::all();
        if let Some(term) = filter.search.as_deref().filter(|s| !s.trim().is_empty()) {
            condition = condition.add(
                Condition::any()
                    .add(contains_ci(entity::student::Column::Name, term))
                    .add(
                        Expr::col((entity::enrollment::Entity, entity::enrollment::Column::Nis))
                            .cast_as(Alias::new("text"))
                            .like(format!("%{term}%")),
                    )
                    .add(contains_ci(entity::class::Column::Name, term)),
            );
        }
        if let Some(class_id) = filter.class_id {
            condition = condition.add(entity::enrollment::Column::ClassId.eq(class_id));
        }
        if let Some(period_id) = filter.year_period_id {
            condition = condition.add(entity::enrollment::Column::YearPeriodId.eq(period_id));
        }

        let query = entity::prelude::Enrollment::find()
            .join(JoinType::InnerJoin, entity::enrollment::Relation::Student.def())
            .join(JoinType::InnerJoin, entity::enrollment::Relation::Class.def())
            .join(
                JoinType::InnerJoin,
                entity::enrollment::Relation::YearPeriod.def(),
            )
            .filter(condition)
            .order_by_asc(entity::student::Column::Name)
            .select_only()
            .column_as(entity::enrollment::Column::Nis, "nis")
            .column_as(entity::student::Column::Name, "name")
            .column_as(entity::student::Column::Point, "point")
            .column_as(entity::enrollment::Column::ClassId, "class_id")
            .column_as(entity::class::Column::Name, "class_name")
            .column_as(entity::enrollment::Column::YearPeriodId, "year_period_id")
            .column_as(entity::year_period::Column::DisplayName, "year_period")
            .column_as(entity::student::Column::CreatedAt, "created_at")
            .into_model::<StudentListItemDto>();

        paginate(self.db, query, params).await
    }

    /// Gets one student joined with their most recent enrollment.
    pub async fn detail(&self, nis: i64) -> Result<Option<StudentListItemDto>, DbErr> {
        let Some(student) = self.find_by_nis(nis).await? else {
            return Ok(None);
        };

        let enrollment = self.latest_enrollment(nis).await?;
        let (class, period) = match &enrollment {
            Some(enrollment) => {
                let class = entity::prelude::Class::find_by_id(enrollment.class_id)
                    .one(self.db)
                    .await?;
                let period = entity::prelude::YearPeriod::find_by_id(enrollment.year_period_id)
                    .one(self.db)
                    .await?;
                (class, period)
            }
            None => (None, None),
        };

        Ok(Some(StudentListItemDto {
            nis: student.nis,
            name: student.name,
            point: student.point,
            class_id: enrollment.as_ref().map(|e| e.class_id),
            class_name: class.map(|c| c.name),
            year_period_id: enrollment.as_ref().map(|e| e.year_period_id),
            year_period: period.map(|p| p.display_name),
            created_at: student.created_at,
        }))
    }

    /// Inserts a student row.
    pub async fn create(
        &self,
        nis: i64,
        name: String,
    ) -> Result<entity::student::Model, DbErr> {
        let now = chrono::Utc::now();
        entity::student::ActiveModel {
            nis: ActiveValue::Set(nis),
            name: ActiveValue::Set(name),
            point: ActiveValue::Set(0),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await
    }

    /// Updates a student's name.
    pub async fn update_name(
        &self,
        student: entity::student::Model,
        name: String,
    ) -> Result<entity::student::Model, DbErr> {
        let mut active: entity::student::ActiveModel = student.into();
        active.name = ActiveValue::Set(name);
        active.updated_at = ActiveValue::Set(chrono::Utc::now());
        active.update(self.db).await
    }

    /// Overwrites a student's denormalized point total.
    pub async fn set_point(
        &self,
        student: entity::student::Model,
        point: i32,
    ) -> Result<entity::student::Model, DbErr> {
        let mut active: entity::student::ActiveModel = student.into();
        active.point = ActiveValue::Set(point);
        active.updated_at = ActiveValue::Set(chrono::Utc::now());
        active.update(self.db).await
    }

    /// Deletes a student; enrollments and violations cascade.
    pub async fn delete(&self, nis: i64) -> Result<(), DbErr> {
        entity::prelude::Student::delete_by_id(nis)
            .exec(self.db)
            .await?;

        Ok(())
    }

    /// Gets the student's most recent enrollment, newest year period first.
    pub async fn latest_enrollment(
        &self,
        nis: i64,
    ) -> Result<Option<entity::enrollment::Model>, DbErr> {
        entity::prelude::Enrollment::find()
            .filter(entity::enrollment::Column::Nis.eq(nis))
            .order_by_desc(entity::enrollment::Column::YearPeriodId)
            .one(self.db)
            .await
    }

    /// Gets the student's enrollment for one year period, if any.
    pub async fn enrollment_for_period(
        &self,
        nis: i64,
        year_period_id: i32,
    ) -> Result<Option<entity::enrollment::Model>, DbErr> {
        entity::prelude::Enrollment::find()
            .filter(entity::enrollment::Column::Nis.eq(nis))
            .filter(entity::enrollment::Column::YearPeriodId.eq(year_period_id))
            .one(self.db)
            .await
    }

    /// Inserts an enrollment row.
    pub async fn create_enrollment(
        &self,
        nis: i64,
        class_id: i32,
        year_period_id: i32,
    ) -> Result<entity::enrollment::Model, DbErr> {
        entity::enrollment::ActiveModel {
            nis: ActiveValue::Set(nis),
            class_id: ActiveValue::Set(class_id),
            year_period_id: ActiveValue::Set(year_period_id),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Re-points an existing enrollment at a different class.
    pub async fn move_enrollment(
        &self,
        enrollment: entity::enrollment::Model,
        class_id: i32,
    ) -> Result<entity::enrollment::Model, DbErr> {
        let mut active: entity::enrollment::ActiveModel = enrollment.into();
        active.class_id = ActiveValue::Set(class_id);
        active.update(self.db).await
    }
}
