use sea_orm::DatabaseConnection;

use crate::{
    data::violation_category::ViolationCategoryRepository,
    error::AppError,
    model::violation_category::{
        CategoryWithTypesDto, CreateViolationCategoryDto, UpdateViolationCategoryDto,
        ViolationCategoryDto,
    },
};

pub struct ViolationCategoryService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ViolationCategoryService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets every category with its violation types.
    pub async fn list(&self) -> Result<Vec<CategoryWithTypesDto>, AppError> {
        let categories = ViolationCategoryRepository::new(self.db)
            .all_with_types()
            .await?;

        Ok(categories
            .into_iter()
            .map(|(category, types)| CategoryWithTypesDto {
                id: category.id,
                name: category.name,
                types: types.into_iter().map(Into::into).collect(),
            })
            .collect())
    }

    pub async fn get_by_id(&self, id: i32) -> Result<ViolationCategoryDto, AppError> {
        ViolationCategoryRepository::new(self.db)
            .find_by_id(id)
            .await?
            .map(Into::into)
            .ok_or_else(|| AppError::NotFound("Violation category not found".to_string()))
    }

    pub async fn create(
        &self,
        dto: CreateViolationCategoryDto,
    ) -> Result<ViolationCategoryDto, AppError> {
        let name = dto.name.trim().to_string();
        if name.is_empty() {
            return Err(AppError::Validation("Name must not be empty".to_string()));
        }

        Ok(ViolationCategoryRepository::new(self.db)
            .create(name)
            .await?
            .into())
    }

    pub async fn update(
        &self,
        id: i32,
        dto: UpdateViolationCategoryDto,
    ) -> Result<ViolationCategoryDto, AppError> {
        let name = dto.name.trim().to_string();
        if name.is_empty() {
            return Err(AppError::Validation("Name must not be empty".to_string()));
        }

        let categories = ViolationCategoryRepository::new(self.db);
        let category = categories
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Violation category not found".to_string()))?;

        Ok(categories.update(category, name).await?.into())
    }

    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let categories = ViolationCategoryRepository::new(self.db);
        categories
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Violation category not found".to_string()))?;

        categories.delete(id).await?;

        Ok(())
    }
}
