use sea_orm::FromQueryResult;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::util::parse::lenient_i32;

#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
pub struct ViolationTypeFilter {
    /// Case-insensitive substring match on type name.
    pub search: Option<String>,
    #[serde(default, rename = "categoryId", deserialize_with = "lenient_i32")]
    pub category_id: Option<i32>,
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CreateViolationTypeDto {
    pub name: String,
    pub point: i32,
    pub punishment: String,
    pub category_id: i32,
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct UpdateViolationTypeDto {
    pub name: String,
    pub point: i32,
    pub punishment: String,
    pub category_id: i32,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ViolationTypeDto {
    pub id: i32,
    pub name: String,
    pub point: i32,
    pub punishment: String,
    pub category_id: i32,
}

impl From<entity::violation_type::Model> for ViolationTypeDto {
    fn from(kind: entity::violation_type::Model) -> Self {
        Self {
            id: kind.id,
            name: kind.name,
            point: kind.point,
            punishment: kind.punishment,
            category_id: kind.category_id,
        }
    }
}

/// Type joined with its category name, for list and detail responses.
#[derive(Debug, Clone, PartialEq, Serialize, FromQueryResult, ToSchema)]
pub struct ViolationTypeListItemDto {
    pub id: i32,
    pub name: String,
    pub point: i32,
    pub punishment: String,
    pub category_id: i32,
    pub category_name: String,
}
