use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CreateViolationCategoryDto {
    pub name: String,
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct UpdateViolationCategoryDto {
    pub name: String,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ViolationCategoryDto {
    pub id: i32,
    pub name: String,
}

impl From<entity::violation_category::Model> for ViolationCategoryDto {
    fn from(category: entity::violation_category::Model) -> Self {
        Self {
            id: category.id,
            name: category.name,
        }
    }
}

/// Category with its violation types, used by the category list endpoint.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct CategoryWithTypesDto {
    pub id: i32,
    pub name: String,
    pub types: Vec<crate::model::violation_type::ViolationTypeDto>,
}
