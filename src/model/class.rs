use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
pub struct ClassFilter {
    /// Case-insensitive substring match on class name.
    pub search: Option<String>,
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CreateClassDto {
    pub name: String,
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct UpdateClassDto {
    pub name: String,
}

/// One row of a bulk class import payload.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct ImportClassRow {
    pub name: String,
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct ImportClassesDto {
    pub rows: Vec<ImportClassRow>,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ClassDto {
    pub id: i32,
    pub name: String,
}

impl From<entity::class::Model> for ClassDto {
    fn from(class: entity::class::Model) -> Self {
        Self {
            id: class.id,
            name: class.name,
        }
    }
}
