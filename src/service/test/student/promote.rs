use super::*;

/// Tests promoting students into a new year period.
///
/// Expected: Ok(2) with a fresh enrollment per student for the new period
#[tokio::test]
async fn promote_creates_enrollments_for_new_period() -> Result<(), AppError> {
    let test = TestBuilder::new().with_roster_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let old_class = factory::class::create_class_with_name(db, "X IPA 1").await?;
    let new_class = factory::class::create_class_with_name(db, "XI IPA 1").await?;
    let old_period = factory::year_period::create_year_period_for(db, 2025).await?;
    let new_period = factory::year_period::create_year_period_for(db, 2026).await?;

    let first = factory::create_student(db).await?;
    let second = factory::create_student(db).await?;
    factory::create_enrollment(db, first.nis, old_class.id, old_period.id).await?;
    factory::create_enrollment(db, second.nis, old_class.id, old_period.id).await?;

    let service = StudentService::new(db);
    let promoted = service
        .promote(PromoteStudentsDto {
            nis_list: vec![first.nis, second.nis],
            class_id: new_class.id,
            year_period_id: new_period.id,
        })
        .await?;

    assert_eq!(promoted, 2);

    use sea_orm::{ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter};
    let in_new_period = entity::prelude::Enrollment::find()
        .filter(entity::enrollment::Column::YearPeriodId.eq(new_period.id))
        .count(db)
        .await?;
    assert_eq!(in_new_period, 2);

    Ok(())
}

/// Tests promoting a student that already has an enrollment for the
/// target period.
///
/// Expected: Ok(1) with the enrollment re-pointed, not duplicated
#[tokio::test]
async fn promote_repoints_existing_enrollment() -> Result<(), AppError> {
    let test = TestBuilder::new().with_roster_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let old_class = factory::class::create_class_with_name(db, "X IPA 1").await?;
    let new_class = factory::class::create_class_with_name(db, "X IPA 2").await?;
    let period = factory::create_year_period(db).await?;
    let student = factory::create_student(db).await?;
    let enrollment =
        factory::create_enrollment(db, student.nis, old_class.id, period.id).await?;

    let service = StudentService::new(db);
    let promoted = service
        .promote(PromoteStudentsDto {
            nis_list: vec![student.nis],
            class_id: new_class.id,
            year_period_id: period.id,
        })
        .await?;

    assert_eq!(promoted, 1);

    use sea_orm::{EntityTrait, PaginatorTrait};
    assert_eq!(entity::prelude::Enrollment::find().count(db).await?, 1);
    let moved = entity::prelude::Enrollment::find_by_id(enrollment.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(moved.class_id, new_class.id);

    Ok(())
}

/// Tests that unknown NIS values are skipped and the rest are promoted.
///
/// Expected: Ok(1)
#[tokio::test]
async fn promote_skips_unknown_students() -> Result<(), AppError> {
    let test = TestBuilder::new().with_roster_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let class = factory::create_class(db).await?;
    let period = factory::create_year_period(db).await?;
    let student = factory::create_student(db).await?;

    let service = StudentService::new(db);
    let promoted = service
        .promote(PromoteStudentsDto {
            nis_list: vec![student.nis, 40404040],
            class_id: class.id,
            year_period_id: period.id,
        })
        .await?;

    assert_eq!(promoted, 1);

    Ok(())
}

/// Tests promoting into a class that does not exist.
///
/// Expected: Err(NotFound)
#[tokio::test]
async fn promote_into_unknown_class_fails() -> Result<(), AppError> {
    let test = TestBuilder::new().with_roster_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let period = factory::create_year_period(db).await?;
    let student = factory::create_student(db).await?;

    let service = StudentService::new(db);
    let result = service
        .promote(PromoteStudentsDto {
            nis_list: vec![student.nis],
            class_id: 999,
            year_period_id: period.id,
        })
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
