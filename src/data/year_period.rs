use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder,
};

use crate::model::page::{Page, PageParams};

use super::paginate::paginate;

pub struct YearPeriodRepository<'a, C> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> YearPeriodRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Gets paginated year periods, newest first.
    pub async fn list(
        &self,
        params: &PageParams,
    ) -> Result<Page<entity::year_period::Model>, DbErr> {
        let query = entity::prelude::YearPeriod::find()
            .order_by_desc(entity::year_period::Column::StartYear);

        paginate(self.db, query, params).await
    }

    pub async fn find_by_id(
        &self,
        id: i32,
    ) -> Result<Option<entity::year_period::Model>, DbErr> {
        entity::prelude::YearPeriod::find_by_id(id).one(self.db).await
    }

    pub async fn find_by_start_year(
        &self,
        start_year: i32,
    ) -> Result<Option<entity::year_period::Model>, DbErr> {
        entity::prelude::YearPeriod::find()
            .filter(entity::year_period::Column::StartYear.eq(start_year))
            .one(self.db)
            .await
    }

    /// Gets the most recent year period, if any exists.
    pub async fn latest(&self) -> Result<Option<entity::year_period::Model>, DbErr> {
        entity::prelude::YearPeriod::find()
            .order_by_desc(entity::year_period::Column::StartYear)
            .one(self.db)
            .await
    }

    pub async fn create(
        &self,
        start_year: i32,
        end_year: i32,
        display_name: String,
    ) -> Result<entity::year_period::Model, DbErr> {
        entity::year_period::ActiveModel {
            start_year: ActiveValue::Set(start_year),
            end_year: ActiveValue::Set(end_year),
            display_name: ActiveValue::Set(display_name),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    pub async fn delete(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::YearPeriod::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(())
    }
}
