use sea_orm::DatabaseConnection;

use crate::{
    data::{
        class::ClassRepository, student::StudentRepository, year_period::YearPeriodRepository,
    },
    error::AppError,
    model::{
        page::{Page, PageParams},
        student::{
            CreateStudentDto, ImportReportDto, ImportStudentsDto, PromoteStudentsDto,
            SkippedRowDto, StudentFilter, StudentListItemDto, UpdateStudentDto,
        },
    },
};

pub struct StudentService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> StudentService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets paginated students with their enrollment details.
    pub async fn list(
        &self,
        filter: &StudentFilter,
        params: &PageParams,
    ) -> Result<Page<StudentListItemDto>, AppError> {
        Ok(StudentRepository::new(self.db).list(filter, params).await?)
    }

    /// Gets one student with their most recent enrollment.
    pub async fn get_by_nis(&self, nis: i64) -> Result<StudentListItemDto, AppError> {
        StudentRepository::new(self.db)
            .detail(nis)
            .await?
            .ok_or_else(|| AppError::NotFound("Student not found".to_string()))
    }

    /// Registers a student together with their initial enrollment.
    ///
    /// A duplicate NIS is rejected before anything is written, so a
    /// conflict leaves no partial rows behind.
    pub async fn create(&self, dto: CreateStudentDto) -> Result<StudentListItemDto, AppError> {
        if dto.name.trim().is_empty() {
            return Err(AppError::Validation("Name must not be empty".to_string()));
        }

        let students = StudentRepository::new(self.db);
        if students.exists(dto.nis).await? {
            return Err(AppError::Conflict("NIS already registered".to_string()));
        }

        ClassRepository::new(self.db)
            .find_by_id(dto.class_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Class not found".to_string()))?;
        YearPeriodRepository::new(self.db)
            .find_by_id(dto.year_period_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Year period not found".to_string()))?;

        let student = students.create(dto.nis, dto.name.trim().to_string()).await?;
        students
            .create_enrollment(student.nis, dto.class_id, dto.year_period_id)
            .await?;

        self.get_by_nis(student.nis).await
    }

    /// Updates a student's profile and their enrollment for the given
    /// year period.
    pub async fn update(
        &self,
        nis: i64,
        dto: UpdateStudentDto,
    ) -> Result<StudentListItemDto, AppError> {
        if dto.name.trim().is_empty() {
            return Err(AppError::Validation("Name must not be empty".to_string()));
        }

        let students = StudentRepository::new(self.db);
        let student = students
            .find_by_nis(nis)
            .await?
            .ok_or_else(|| AppError::NotFound("Student not found".to_string()))?;

        ClassRepository::new(self.db)
            .find_by_id(dto.class_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Class not found".to_string()))?;
        YearPeriodRepository::new(self.db)
            .find_by_id(dto.year_period_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Year period not found".to_string()))?;

        students
            .update_name(student, dto.name.trim().to_string())
            .await?;

        match students.enrollment_for_period(nis, dto.year_period_id).await? {
            Some(enrollment) => {
                students.move_enrollment(enrollment, dto.class_id).await?;
            }
            None => {
                students
                    .create_enrollment(nis, dto.class_id, dto.year_period_id)
                    .await?;
            }
        }

        self.get_by_nis(nis).await
    }

    /// Deletes a student; their enrollments and violations cascade.
    pub async fn delete(&self, nis: i64) -> Result<(), AppError> {
        let students = StudentRepository::new(self.db);
        if !students.exists(nis).await? {
            return Err(AppError::NotFound("Student not found".to_string()));
        }

        students.delete(nis).await?;

        Ok(())
    }

    /// Moves the listed students into the target class for the target
    /// year period. An existing enrollment for that period is re-pointed
    /// rather than duplicated. Returns the number of students moved;
    /// unknown NIS values are skipped.
    pub async fn promote(&self, dto: PromoteStudentsDto) -> Result<usize, AppError> {
        ClassRepository::new(self.db)
            .find_by_id(dto.class_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Class not found".to_string()))?;
        YearPeriodRepository::new(self.db)
            .find_by_id(dto.year_period_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Year period not found".to_string()))?;

        let students = StudentRepository::new(self.db);
        let mut promoted = 0;
        for nis in dto.nis_list {
            if !students.exists(nis).await? {
                continue;
            }

            match students.enrollment_for_period(nis, dto.year_period_id).await? {
                Some(enrollment) => {
                    students.move_enrollment(enrollment, dto.class_id).await?;
                }
                None => {
                    students
                        .create_enrollment(nis, dto.class_id, dto.year_period_id)
                        .await?;
                }
            }
            promoted += 1;
        }

        Ok(promoted)
    }

    /// Bulk-imports students. Class labels resolve case-insensitively to
    /// existing classes; enrollments land in the most recent year period.
    /// Bad rows are skipped with a reason, the rest are inserted.
    pub async fn import(&self, dto: ImportStudentsDto) -> Result<ImportReportDto, AppError> {
        let period = YearPeriodRepository::new(self.db)
            .latest()
            .await?
            .ok_or_else(|| AppError::Validation("No year period configured".to_string()))?;

        let students = StudentRepository::new(self.db);
        let classes = ClassRepository::new(self.db);

        let mut imported = 0;
        let mut skipped = Vec::new();
        for (index, row) in dto.rows.into_iter().enumerate() {
            let row_number = index + 1;

            if row.nis <= 0 {
                skipped.push(SkippedRowDto {
                    row: row_number,
                    reason: "Invalid NIS".to_string(),
                });
                continue;
            }
            if row.name.trim().is_empty() {
                skipped.push(SkippedRowDto {
                    row: row_number,
                    reason: "Missing name".to_string(),
                });
                continue;
            }
            if students.exists(row.nis).await? {
                skipped.push(SkippedRowDto {
                    row: row_number,
                    reason: "NIS already registered".to_string(),
                });
                continue;
            }

            let Some(class) = classes.find_by_name(row.class.trim()).await? else {
                skipped.push(SkippedRowDto {
                    row: row_number,
                    reason: format!("Unknown class '{}'", row.class.trim()),
                });
                continue;
            };

            let student = students.create(row.nis, row.name.trim().to_string()).await?;
            students
                .create_enrollment(student.nis, class.id, period.id)
                .await?;
            imported += 1;
        }

        Ok(ImportReportDto { imported, skipped })
    }
}
