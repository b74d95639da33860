use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(YearPeriod::Table)
                    .if_not_exists()
                    .col(pk_auto(YearPeriod::Id))
                    .col(integer(YearPeriod::StartYear))
                    .col(integer(YearPeriod::EndYear))
                    .col(string(YearPeriod::DisplayName))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(YearPeriod::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum YearPeriod {
    #[sea_orm(iden = "year_periods")]
    Table,
    Id,
    StartYear,
    EndYear,
    DisplayName,
}
