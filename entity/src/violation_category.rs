use sea_orm::entity::prelude::*;

/// Groups violation types, e.g. "Discipline" or "Appearance".
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "violation_categories")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::violation_type::Entity")]
    ViolationType,
}

impl Related<super::violation_type::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ViolationType.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
