use super::*;

/// Tests deleting a violation through the ledger.
///
/// Expected: Ok with the type's points subtracted from the student
#[tokio::test]
async fn delete_subtracts_type_points() -> Result<(), AppError> {
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
    let created = service
        .create(
            CreateViolationDto {
                nis: student.nis,
                type_id: kind.id,
                implemented: false,
            },
            teacher.id,
        )
        .await?;

    let deleted = service.delete(created.violation_id).await?;

    assert_eq!(deleted.total_points, 0);
    assert_eq!(stored_points(db, student.nis).await?, 0);

    use sea_orm::EntityTrait;
    assert!(entity::prelude::Violation::find_by_id(created.violation_id)
        .one(db)
        .await?
        .is_none());

    Ok(())
}

/// Tests deleting a violation that does not exist.
///
/// Expected: Err(NotFound)
#[tokio::test]
async fn delete_unknown_violation_fails() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_violation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = ViolationService::new(db, true);
    let result = service.delete(424242).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}

/// Tests flipping the implemented flag without any point movement.
///
/// Expected: Ok with the flag set and the total unchanged
#[tokio::test]
async fn implement_does_not_touch_points() -> Result<(), AppError> {
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
    let created = service
        .create(
            CreateViolationDto {
                nis: student.nis,
                type_id: kind.id,
                implemented: false,
            },
            teacher.id,
        )
        .await?;

    let marked = service.set_implemented(created.violation_id, true).await?;
    assert!(marked.implemented);
    assert_eq!(stored_points(db, student.nis).await?, 10);

    let unmarked = service.set_implemented(created.violation_id, false).await?;
    assert!(!unmarked.implemented);
    assert_eq!(stored_points(db, student.nis).await?, 10);

    Ok(())
}
