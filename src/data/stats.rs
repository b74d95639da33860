use chrono::{DateTime, Utc};
use sea_orm::{
    ConnectionTrait, DbErr, EntityTrait, FromQueryResult, JoinType, PaginatorTrait, QueryOrder,
    QuerySelect, RelationTrait,
};

/// One violation joined with the fields the dashboard aggregates over.
#[derive(Debug, Clone, FromQueryResult)]
pub struct StatsViolationRow {
    pub point: i32,
    pub category_name: String,
    pub implemented: bool,
    pub created_at: DateTime<Utc>,
}

pub struct StatsRepository<'a, C> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> StatsRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn count_students(&self) -> Result<u64, DbErr> {
        entity::prelude::Student::find().count(self.db).await
    }

    pub async fn count_classes(&self) -> Result<u64, DbErr> {
        entity::prelude::Class::find().count(self.db).await
    }

    /// Gets every violation with its type point and category name. The
    /// dashboard aggregates (counts, average, per-category, per-month) are
    /// computed from this single result set.
    pub async fn violation_rows(&self) -> Result<Vec<StatsViolationRow>, DbErr> {
        entity::prelude::Violation::find()
            .join(
                JoinType::InnerJoin,
                entity::violation::Relation::ViolationType.def(),
            )
            .join(
                JoinType::InnerJoin,
                entity::violation_type::Relation::ViolationCategory.def(),
            )
            .select_only()
            .column_as(entity::violation_type::Column::Point, "point")
            .column_as(entity::violation_category::Column::Name, "category_name")
            .column_as(entity::violation::Column::Implemented, "implemented")
            .column_as(entity::violation::Column::CreatedAt, "created_at")
            .into_model::<StatsViolationRow>()
            .all(self.db)
            .await
    }

    /// Gets the `limit` students with the highest point totals.
    pub async fn top_students(&self, limit: u64) -> Result<Vec<entity::student::Model>, DbErr> {
        entity::prelude::Student::find()
            .order_by_desc(entity::student::Column::Point)
            .limit(limit)
            .all(self.db)
            .await
    }
}
