use super::*;

/// Tests recording a violation through the ledger.
///
/// Expected: Ok with the student's total raised by the type's points
#[tokio::test]
async fn create_adds_type_points_to_student() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_violation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let teacher = factory::create_user(db).await?;
    let student = factory::create_student(db).await?;
    let class = factory::create_class(db).await?;
    let period = factory::create_year_period(db).await?;
    factory::create_enrollment(db, student.nis, class.id, period.id).await?;
    let category = factory::create_violation_category(db).await?;
    let kind = factory::violation_type::ViolationTypeFactory::new(db, category.id)
        .point(10)
        .build()
        .await?;

    let service = ViolationService::new(db, true);
    let result = service
        .create(
            CreateViolationDto {
                nis: student.nis,
                type_id: kind.id,
                implemented: false,
            },
            teacher.id,
        )
        .await?;

    assert_eq!(result.nis, student.nis);
    assert_eq!(result.total_points, 10);
    assert_eq!(stored_points(db, student.nis).await?, 10);

    Ok(())
}

/// Tests recording a violation for a NIS that does not exist.
///
/// Expected: Err(NotFound) with no violation row written
#[tokio::test]
async fn create_for_unknown_student_writes_nothing() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_violation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let teacher = factory::create_user(db).await?;
    let category = factory::create_violation_category(db).await?;
    let kind = factory::create_violation_type(db, category.id).await?;

    let service = ViolationService::new(db, true);
    let result = service
        .create(
            CreateViolationDto {
                nis: 40404040,
                type_id: kind.id,
                implemented: false,
            },
            teacher.id,
        )
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    use sea_orm::{EntityTrait, PaginatorTrait};
    let count = entity::prelude::Violation::find().count(db).await?;
    assert_eq!(count, 0);

    Ok(())
}

/// Tests recording a violation with an unknown type.
///
/// Expected: Err(NotFound) and the student's total untouched
#[tokio::test]
async fn create_with_unknown_type_leaves_points_alone() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_violation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let teacher = factory::create_user(db).await?;
    let student = factory::create_student(db).await?;
    let class = factory::create_class(db).await?;
    let period = factory::create_year_period(db).await?;
    factory::create_enrollment(db, student.nis, class.id, period.id).await?;

    let service = ViolationService::new(db, true);
    let result = service
        .create(
            CreateViolationDto {
                nis: student.nis,
                type_id: 999,
                implemented: false,
            },
            teacher.id,
        )
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));
    assert_eq!(stored_points(db, student.nis).await?, 0);

    Ok(())
}

/// Tests that the enrollment is resolved from the NIS, choosing the most
/// recent one.
///
/// Expected: Ok with the violation attached to the newest enrollment
#[tokio::test]
async fn create_attaches_latest_enrollment() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_violation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let teacher = factory::create_user(db).await?;
    let student = factory::create_student(db).await?;
    let class = factory::create_class(db).await?;
    let old_period = factory::year_period::create_year_period_for(db, 2025).await?;
    let new_period = factory::year_period::create_year_period_for(db, 2026).await?;
    factory::create_enrollment(db, student.nis, class.id, old_period.id).await?;
    let newest = factory::create_enrollment(db, student.nis, class.id, new_period.id).await?;
    let category = factory::create_violation_category(db).await?;
    let kind = factory::create_violation_type(db, category.id).await?;

    let service = ViolationService::new(db, true);
    let result = service
        .create(
            CreateViolationDto {
                nis: student.nis,
                type_id: kind.id,
                implemented: false,
            },
            teacher.id,
        )
        .await?;

    use sea_orm::EntityTrait;
    let violation = entity::prelude::Violation::find_by_id(result.violation_id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(violation.enrollment_id, newest.id);
    assert_eq!(violation.teacher_id, teacher.id);

    Ok(())
}
