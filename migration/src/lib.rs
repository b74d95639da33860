pub use sea_orm_migration::prelude::*;

mod m20260815_000001_create_user_table;
mod m20260815_000002_create_student_table;
mod m20260815_000003_create_class_table;
mod m20260815_000004_create_year_period_table;
mod m20260815_000005_create_enrollment_table;
mod m20260815_000006_create_violation_category_table;
mod m20260815_000007_create_violation_type_table;
mod m20260815_000008_create_violation_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260815_000001_create_user_table::Migration),
            Box::new(m20260815_000002_create_student_table::Migration),
            Box::new(m20260815_000003_create_class_table::Migration),
            Box::new(m20260815_000004_create_year_period_table::Migration),
            Box::new(m20260815_000005_create_enrollment_table::Migration),
            Box::new(m20260815_000006_create_violation_category_table::Migration),
            Box::new(m20260815_000007_create_violation_type_table::Migration),
            Box::new(m20260815_000008_create_violation_table::Migration),
        ]
    }
}
