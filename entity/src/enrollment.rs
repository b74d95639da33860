use sea_orm::entity::prelude::*;

/// Links a student to a class within a year period.
///
/// One enrollment per (student, year period) is expected; promotion
/// re-points or creates the enrollment for the target period.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "enrollments")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub nis: i64,
    pub class_id: i32,
    pub year_period_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::student::Entity",
        from = "Column::Nis",
        to = "super::student::Column::Nis"
    )]
    Student,
    #[sea_orm(
        belongs_to = "super::class::Entity",
        from = "Column::ClassId",
        to = "super::class::Column::Id"
    )]
    Class,
    #[sea_orm(
        belongs_to = "super::year_period::Entity",
        from = "Column::YearPeriodId",
        to = "super::year_period::Column::Id"
    )]
    YearPeriod,
    #[sea_orm(has_many = "super::violation::Entity")]
    Violation,
}

impl Related<super::student::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Student.def()
    }
}

impl Related<super::class::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Class.def()
    }
}

impl Related<super::year_period::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::YearPeriod.def()
    }
}

impl Related<super::violation::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Violation.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
