use sea_orm_migration::{prelude::*, schema::*};

use crate::{
    m20260815_000002_create_student_table::Student, m20260815_000003_create_class_table::Class,
    m20260815_000004_create_year_period_table::YearPeriod,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Enrollment::Table)
                    .if_not_exists()
                    .col(pk_auto(Enrollment::Id))
                    .col(big_integer(Enrollment::Nis))
                    .col(integer(Enrollment::ClassId))
                    .col(integer(Enrollment::YearPeriodId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_enrollment_student")
                            .from(Enrollment::Table, Enrollment::Nis)
                            .to(Student::Table, Student::Nis)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_enrollment_class")
                            .from(Enrollment::Table, Enrollment::ClassId)
                            .to(Class::Table, Class::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_enrollment_year_period")
                            .from(Enrollment::Table, Enrollment::YearPeriodId)
                            .to(YearPeriod::Table, YearPeriod::Id),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Enrollment::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Enrollment {
    #[sea_orm(iden = "enrollments")]
    Table,
    Id,
    Nis,
    ClassId,
    YearPeriodId,
}
