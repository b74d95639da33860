use sea_orm_migration::{prelude::*, schema::*};

use crate::m20260815_000006_create_violation_category_table::ViolationCategory;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ViolationType::Table)
                    .if_not_exists()
                    .col(pk_auto(ViolationType::Id))
                    .col(string(ViolationType::Name))
                    .col(integer(ViolationType::Point))
                    .col(string(ViolationType::Punishment))
                    .col(integer(ViolationType::CategoryId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_violation_type_category")
                            .from(ViolationType::Table, ViolationType::CategoryId)
                            .to(ViolationCategory::Table, ViolationCategory::Id),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ViolationType::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum ViolationType {
    #[sea_orm(iden = "violation_types")]
    Table,
    Id,
    Name,
    Point,
    Punishment,
    CategoryId,
}
