use sea_orm_migration::{prelude::*, schema::*};

use crate::{
    m20260815_000001_create_user_table::User, m20260815_000002_create_student_table::Student,
    m20260815_000005_create_enrollment_table::Enrollment,
    m20260815_000007_create_violation_type_table::ViolationType,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Violation::Table)
                    .if_not_exists()
                    .col(pk_auto(Violation::Id))
                    .col(big_integer(Violation::Nis))
                    .col(integer(Violation::EnrollmentId))
                    .col(integer(Violation::TypeId))
                    .col(integer(Violation::TeacherId))
                    .col(boolean(Violation::Implemented).default(false))
                    .col(timestamp_with_time_zone(Violation::CreatedAt))
                    .col(timestamp_with_time_zone(Violation::UpdatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_violation_student")
                            .from(Violation::Table, Violation::Nis)
                            .to(Student::Table, Student::Nis)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_violation_enrollment")
                            .from(Violation::Table, Violation::EnrollmentId)
                            .to(Enrollment::Table, Enrollment::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_violation_type")
                            .from(Violation::Table, Violation::TypeId)
                            .to(ViolationType::Table, ViolationType::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_violation_teacher")
                            .from(Violation::Table, Violation::TeacherId)
                            .to(User::Table, User::Id),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Violation::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Violation {
    #[sea_orm(iden = "violations")]
    Table,
    Id,
    Nis,
    EnrollmentId,
    TypeId,
    TeacherId,
    Implemented,
    CreatedAt,
    UpdatedAt,
}
