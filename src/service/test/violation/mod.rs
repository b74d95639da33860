use crate::error::AppError;
use crate::model::violation::{CreateViolationDto, UpdateViolationDto};
use crate::service::violation::ViolationService;
use sea_orm::{DatabaseConnection, DbErr};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod ledger;
mod update;

/// Reads back the student's stored point total.
async fn stored_points(db: &DatabaseConnection, nis: i64) -> Result<i32, DbErr> {
    use sea_orm::EntityTrait;

    Ok(entity::prelude::Student::find_by_id(nis)
        .one(db)
        .await?
        .map(|s| s.point)
        .unwrap_or_default())
}
