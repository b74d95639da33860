use sea_orm::DatabaseConnection;

use crate::{
    data::class::ClassRepository,
    error::AppError,
    model::{
        class::{ClassDto, ClassFilter, CreateClassDto, ImportClassesDto, UpdateClassDto},
        page::{Page, PageParams},
        student::{ImportReportDto, SkippedRowDto},
    },
};

pub struct ClassService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ClassService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn list(
        &self,
        filter: &ClassFilter,
        params: &PageParams,
    ) -> Result<Page<ClassDto>, AppError> {
        let page = ClassRepository::new(self.db).list(filter, params).await?;

        Ok(Page {
            records: page.records.into_iter().map(Into::into).collect(),
            meta: page.meta,
        })
    }

    pub async fn get_by_id(&self, id: i32) -> Result<ClassDto, AppError> {
        ClassRepository::new(self.db)
            .find_by_id(id)
            .await?
            .map(Into::into)
            .ok_or_else(|| AppError::NotFound("Class not found".to_string()))
    }

    /// Creates a class. Names are unique, ignoring case.
    pub async fn create(&self, dto: CreateClassDto) -> Result<ClassDto, AppError> {
        let name = dto.name.trim().to_string();
        if name.is_empty() {
            return Err(AppError::Validation("Name must not be empty".to_string()));
        }

        let classes = ClassRepository::new(self.db);
        if classes.find_by_name(&name).await?.is_some() {
            return Err(AppError::Conflict("Class name already exists".to_string()));
        }

        Ok(classes.create(name).await?.into())
    }

    pub async fn update(&self, id: i32, dto: UpdateClassDto) -> Result<ClassDto, AppError> {
        let name = dto.name.trim().to_string();
        if name.is_empty() {
            return Err(AppError::Validation("Name must not be empty".to_string()));
        }

        let classes = ClassRepository::new(self.db);
        let class = classes
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Class not found".to_string()))?;

        if let Some(existing) = classes.find_by_name(&name).await? {
            if existing.id != id {
                return Err(AppError::Conflict("Class name already exists".to_string()));
            }
        }

        Ok(classes.update(class, name).await?.into())
    }

    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let classes = ClassRepository::new(self.db);
        classes
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Class not found".to_string()))?;

        classes.delete(id).await?;

        Ok(())
    }

    /// Bulk-imports classes. Rows with empty or already-taken names are
    /// skipped with a reason, the rest are inserted.
    pub async fn import(&self, dto: ImportClassesDto) -> Result<ImportReportDto, AppError> {
        let classes = ClassRepository::new(self.db);

        let mut imported = 0;
        let mut skipped = Vec::new();
        for (index, row) in dto.rows.into_iter().enumerate() {
            let row_number = index + 1;
            let name = row.name.trim().to_string();

            if name.is_empty() {
                skipped.push(SkippedRowDto {
                    row: row_number,
                    reason: "Missing name".to_string(),
                });
                continue;
            }
            if classes.find_by_name(&name).await?.is_some() {
                skipped.push(SkippedRowDto {
                    row: row_number,
                    reason: "Class name already exists".to_string(),
                });
                continue;
            }

            classes.create(name).await?;
            imported += 1;
        }

        Ok(ImportReportDto { imported, skipped })
    }
}
