use super::*;

async fn run_create_edit_delete_sequence(use_transactions: bool) -> Result<(), AppError> {
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
    let ten = factory::violation_type::ViolationTypeFactory::new(db, category.id)
        .point(10)
        .build()
        .await?;
    let five = factory::violation_type::ViolationTypeFactory::new(db, category.id)
        .point(5)
        .build()
        .await?;

    let service = ViolationService::new(db, use_transactions);

    let created = service
        .create(
            CreateViolationDto {
                nis: student.nis,
                type_id: ten.id,
                implemented: false,
            },
            teacher.id,
        )
        .await?;
    assert_eq!(created.total_points, 10);
    assert_eq!(stored_points(db, student.nis).await?, 10);

    let updated = service
        .update(
            created.violation_id,
            UpdateViolationDto {
                type_id: five.id,
                implemented: false,
            },
        )
        .await?;
    assert_eq!(updated.total_points, 5);
    assert_eq!(stored_points(db, student.nis).await?, 5);

    let deleted = service.delete(created.violation_id).await?;
    assert_eq!(deleted.total_points, 0);
    assert_eq!(stored_points(db, student.nis).await?, 0);

    Ok(())
}

/// Tests the full create, re-point, delete sequence through the ledger in
/// transactional mode.
///
/// Expected: Ok with the total tracking 10, then 5, then 0
#[tokio::test]
async fn create_edit_delete_keeps_total_consistent() -> Result<(), AppError> {
    run_create_edit_delete_sequence(true).await
}

/// Tests the same sequence with transactions disabled (the legacy
/// read-modify-write path).
///
/// Expected: Ok with identical totals
#[tokio::test]
async fn sequence_is_identical_without_transactions() -> Result<(), AppError> {
    run_create_edit_delete_sequence(false).await
}

/// Tests that several violations accumulate and drain correctly.
///
/// Expected: Ok with the total equal to the sum of type points at each step
#[tokio::test]
async fn multiple_violations_sum_type_points() -> Result<(), AppError> {
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
    let ten = factory::violation_type::ViolationTypeFactory::new(db, category.id)
        .point(10)
        .build()
        .await?;
    let three = factory::violation_type::ViolationTypeFactory::new(db, category.id)
        .point(3)
        .build()
        .await?;

    let service = ViolationService::new(db, true);

    let first = service
        .create(
            CreateViolationDto {
                nis: student.nis,
                type_id: ten.id,
                implemented: false,
            },
            teacher.id,
        )
        .await?;
    let second = service
        .create(
            CreateViolationDto {
                nis: student.nis,
                type_id: three.id,
                implemented: false,
            },
            teacher.id,
        )
        .await?;
    assert_eq!(second.total_points, 13);

    let after_delete = service.delete(first.violation_id).await?;
    assert_eq!(after_delete.total_points, 3);
    assert_eq!(stored_points(db, student.nis).await?, 3);

    Ok(())
}
