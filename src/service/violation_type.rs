use sea_orm::DatabaseConnection;

use crate::{
    data::{
        violation_category::ViolationCategoryRepository, violation_type::ViolationTypeRepository,
    },
    error::AppError,
    model::{
        page::{Page, PageParams},
        violation_type::{
            CreateViolationTypeDto, UpdateViolationTypeDto, ViolationTypeFilter,
            ViolationTypeListItemDto,
        },
    },
};

pub struct ViolationTypeService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ViolationTypeService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn list(
        &self,
        filter: &ViolationTypeFilter,
        params: &PageParams,
    ) -> Result<Page<ViolationTypeListItemDto>, AppError> {
        Ok(ViolationTypeRepository::new(self.db)
            .list(filter, params)
            .await?)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<ViolationTypeListItemDto, AppError> {
        ViolationTypeRepository::new(self.db)
            .detail(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Violation type not found".to_string()))
    }

    pub async fn create(
        &self,
        dto: CreateViolationTypeDto,
    ) -> Result<ViolationTypeListItemDto, AppError> {
        let name = dto.name.trim().to_string();
        if name.is_empty() {
            return Err(AppError::Validation("Name must not be empty".to_string()));
        }
        if dto.point < 0 {
            return Err(AppError::Validation("Point must not be negative".to_string()));
        }

        ViolationCategoryRepository::new(self.db)
            .find_by_id(dto.category_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Violation category not found".to_string()))?;

        let types = ViolationTypeRepository::new(self.db);
        if types.find_by_name(&name).await?.is_some() {
            return Err(AppError::Conflict(
                "Violation type already exists".to_string(),
            ));
        }

        let created = types
            .create(name, dto.point, dto.punishment, dto.category_id)
            .await?;

        self.get_by_id(created.id).await
    }

    pub async fn update(
        &self,
        id: i32,
        dto: UpdateViolationTypeDto,
    ) -> Result<ViolationTypeListItemDto, AppError> {
        let name = dto.name.trim().to_string();
        if name.is_empty() {
            return Err(AppError::Validation("Name must not be empty".to_string()));
        }
        if dto.point < 0 {
            return Err(AppError::Validation("Point must not be negative".to_string()));
        }

        ViolationCategoryRepository::new(self.db)
            .find_by_id(dto.category_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Violation category not found".to_string()))?;

        let types = ViolationTypeRepository::new(self.db);
        let kind = types
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Violation type not found".to_string()))?;

        if let Some(existing) = types.find_by_name(&name).await? {
            if existing.id != id {
                return Err(AppError::Conflict(
                    "Violation type already exists".to_string(),
                ));
            }
        }

        types
            .update(kind, name, dto.point, dto.punishment, dto.category_id)
            .await?;

        self.get_by_id(id).await
    }

    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let types = ViolationTypeRepository::new(self.db);
        types
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Violation type not found".to_string()))?;

        types.delete(id).await?;

        Ok(())
    }
}
