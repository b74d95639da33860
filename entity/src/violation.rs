use sea_orm::entity::prelude::*;

/// A record of a student committing a violation type, attributed to the
/// recording teacher. `implemented` tracks whether the punishment has been
/// carried out.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "violations")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub nis: i64,
    pub enrollment_id: i32,
    pub type_id: i32,
    pub teacher_id: i32,
    pub implemented: bool,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
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
        belongs_to = "super::enrollment::Entity",
        from = "Column::EnrollmentId",
        to = "super::enrollment::Column::Id"
    )]
    Enrollment,
    #[sea_orm(
        belongs_to = "super::violation_type::Entity",
        from = "Column::TypeId",
        to = "super::violation_type::Column::Id"
    )]
    ViolationType,
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::TeacherId",
        to = "super::user::Column::Id"
    )]
    User,
}

impl Related<super::student::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Student.def()
    }
}

impl Related<super::enrollment::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Enrollment.def()
    }
}

impl Related<super::violation_type::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ViolationType.def()
    }
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
