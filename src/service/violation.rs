use chrono::Utc;
use sea_orm::{ConnectionTrait, DatabaseConnection, TransactionTrait};

use crate::{
    data::{
        class::ClassRepository, student::StudentRepository, user::UserRepository,
        violation::ViolationRepository, violation_category::ViolationCategoryRepository,
        violation_type::ViolationTypeRepository,
    },
    error::AppError,
    model::{
        page::{Page, PageParams},
        violation::{
            CreateViolationDto, FilterFormDto, LedgerResultDto, UpdateViolationDto,
            ViolationFilter, ViolationListItemDto,
        },
    },
};

/// The point ledger.
///
/// Every mutation here keeps `student.point` equal to the sum of the
/// violation type points over the student's current violations. When
/// `use_transactions` is set (the default), each mutation's reads and
/// writes run inside a single database transaction so a mid-sequence
/// failure cannot leave the total drifted from the rows.
pub struct ViolationService<'a> {
    db: &'a DatabaseConnection,
    use_transactions: bool,
}

impl<'a> ViolationService<'a> {
    pub fn new(db: &'a DatabaseConnection, use_transactions: bool) -> Self {
        Self {
            db,
            use_transactions,
        }
    }

    /// Gets paginated violations in the joined projection, applying the
    /// structured filter. The time window is anchored to the request clock.
    pub async fn list(
        &self,
        filter: &ViolationFilter,
        params: &PageParams,
    ) -> Result<Page<ViolationListItemDto>, AppError> {
        let from_date = filter.time_preset().and_then(|p| p.from_date(Utc::now()));
        let repo = ViolationRepository::new(self.db);

        Ok(repo.list(filter, from_date, params).await?)
    }

    /// Gets every matching violation for export, unpaginated.
    pub async fn export(
        &self,
        filter: &ViolationFilter,
    ) -> Result<Vec<ViolationListItemDto>, AppError> {
        let from_date = filter.time_preset().and_then(|p| p.from_date(Utc::now()));
        let repo = ViolationRepository::new(self.db);

        Ok(repo.export(filter, from_date).await?)
    }

    /// Gets one violation in the joined projection.
    pub async fn get_by_id(&self, id: i32) -> Result<ViolationListItemDto, AppError> {
        ViolationRepository::new(self.db)
            .detail(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Violation not found".to_string()))
    }

    /// Gets the option lists for the violation filter form.
    pub async fn filter_form(&self) -> Result<FilterFormDto, AppError> {
        let classes = ClassRepository::new(self.db).all().await?;
        let categories = ViolationCategoryRepository::new(self.db).all().await?;
        let teachers = UserRepository::new(self.db).all().await?;

        Ok(FilterFormDto {
            classes: classes.into_iter().map(Into::into).collect(),
            categories: categories.into_iter().map(Into::into).collect(),
            teachers: teachers.into_iter().map(Into::into).collect(),
        })
    }

    /// Records a violation and adds its type's points to the student.
    pub async fn create(
        &self,
        dto: CreateViolationDto,
        teacher_id: i32,
    ) -> Result<LedgerResultDto, AppError> {
        if self.use_transactions {
            let txn = self.db.begin().await?;
            match Self::create_in(&txn, dto, teacher_id).await {
                Ok(result) => {
                    txn.commit().await?;
                    Ok(result)
                }
                Err(err) => {
                    txn.rollback().await?;
                    Err(err)
                }
            }
        } else {
            Self::create_in(self.db, dto, teacher_id).await
        }
    }

    /// Re-points a violation at a different type, moving the student's
    /// total from the old type's points to the new type's.
    pub async fn update(
        &self,
        id: i32,
        dto: UpdateViolationDto,
    ) -> Result<LedgerResultDto, AppError> {
        if self.use_transactions {
            let txn = self.db.begin().await?;
            match Self::update_in(&txn, id, dto).await {
                Ok(result) => {
                    txn.commit().await?;
                    Ok(result)
                }
                Err(err) => {
                    txn.rollback().await?;
                    Err(err)
                }
            }
        } else {
            Self::update_in(self.db, id, dto).await
        }
    }

    /// Removes a violation and subtracts its type's points.
    pub async fn delete(&self, id: i32) -> Result<LedgerResultDto, AppError> {
        if self.use_transactions {
            let txn = self.db.begin().await?;
            match Self::delete_in(&txn, id).await {
                Ok(result) => {
                    txn.commit().await?;
                    Ok(result)
                }
                Err(err) => {
                    txn.rollback().await?;
                    Err(err)
                }
            }
        } else {
            Self::delete_in(self.db, id).await
        }
    }

    /// Flips the implemented flag. No ledger effect.
    pub async fn set_implemented(
        &self,
        id: i32,
        implemented: bool,
    ) -> Result<ViolationListItemDto, AppError> {
        let repo = ViolationRepository::new(self.db);
        let violation = repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Violation not found".to_string()))?;

        repo.set_implemented(violation, implemented).await?;

        self.get_by_id(id).await
    }

    pub(crate) async fn create_in<C: ConnectionTrait>(
        db: &C,
        dto: CreateViolationDto,
        teacher_id: i32,
    ) -> Result<LedgerResultDto, AppError> {
        let students = StudentRepository::new(db);
        let student = students
            .find_by_nis(dto.nis)
            .await?
            .ok_or_else(|| AppError::NotFound("Student not found".to_string()))?;

        let kind = ViolationTypeRepository::new(db)
            .find_by_id(dto.type_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Violation type not found".to_string()))?;

        // The enrollment is resolved server-side from the NIS, never
        // trusted from the client.
        let enrollment = students
            .latest_enrollment(dto.nis)
            .await?
            .ok_or_else(|| AppError::NotFound("Student has no enrollment".to_string()))?;

        let violation = ViolationRepository::new(db)
            .create(dto.nis, enrollment.id, kind.id, teacher_id, dto.implemented)
            .await?;

        let total = student.point + kind.point;
        students.set_point(student, total).await?;

        Ok(LedgerResultDto {
            violation_id: violation.id,
            nis: dto.nis,
            total_points: total,
        })
    }

    pub(crate) async fn update_in<C: ConnectionTrait>(
        db: &C,
        id: i32,
        dto: UpdateViolationDto,
    ) -> Result<LedgerResultDto, AppError> {
        let violations = ViolationRepository::new(db);
        let violation = violations
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Violation not found".to_string()))?;

        let types = ViolationTypeRepository::new(db);
        let old_kind = types
            .find_by_id(violation.type_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Violation type not found".to_string()))?;
        let new_kind = types
            .find_by_id(dto.type_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Violation type not found".to_string()))?;

        let students = StudentRepository::new(db);
        let student = students
            .find_by_nis(violation.nis)
            .await?
            .ok_or_else(|| AppError::NotFound("Student not found".to_string()))?;

        let nis = violation.nis;
        violations
            .update(violation, new_kind.id, dto.implemented)
            .await?;

        let total = student.point - old_kind.point + new_kind.point;
        students.set_point(student, total).await?;

        Ok(LedgerResultDto {
            violation_id: id,
            nis,
            total_points: total,
        })
    }

    pub(crate) async fn delete_in<C: ConnectionTrait>(
        db: &C,
        id: i32,
    ) -> Result<LedgerResultDto, AppError> {
        let violations = ViolationRepository::new(db);
        let violation = violations
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Violation not found".to_string()))?;

        let kind = ViolationTypeRepository::new(db)
            .find_by_id(violation.type_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Violation type not found".to_string()))?;

        let students = StudentRepository::new(db);
        let student = students
            .find_by_nis(violation.nis)
            .await?
            .ok_or_else(|| AppError::NotFound("Student not found".to_string()))?;

        let nis = violation.nis;
        violations.delete(violation.id).await?;

        let total = student.point - kind.point;
        students.set_point(student, total).await?;

        Ok(LedgerResultDto {
            violation_id: id,
            nis,
            total_points: total,
        })
    }
}
