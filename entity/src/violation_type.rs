use sea_orm::entity::prelude::*;

/// A named infraction carrying a fixed point penalty and a punishment
/// description.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "violation_types")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub point: i32,
    pub punishment: String,
    pub category_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::violation_category::Entity",
        from = "Column::CategoryId",
        to = "super::violation_category::Column::Id"
    )]
    ViolationCategory,
    #[sea_orm(has_many = "super::violation::Entity")]
    Violation,
}

impl Related<super::violation_category::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ViolationCategory.def()
    }
}

impl Related<super::violation::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Violation.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
