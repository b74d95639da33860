use super::*;

/// Tests re-pointing a violation at a cheaper type.
///
/// Expected: Ok with the total moved by the point difference
#[tokio::test]
async fn update_moves_total_by_point_difference() -> Result<(), AppError> {
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
    let heavy = factory::violation_type::ViolationTypeFactory::new(db, category.id)
        .point(10)
        .build()
        .await?;
    let light = factory::violation_type::ViolationTypeFactory::new(db, category.id)
        .point(5)
        .build()
        .await?;

    let service = ViolationService::new(db, true);
    let created = service
        .create(
            CreateViolationDto {
                nis: student.nis,
                type_id: heavy.id,
                implemented: false,
            },
            teacher.id,
        )
        .await?;
    assert_eq!(created.total_points, 10);

    let updated = service
        .update(
            created.violation_id,
            UpdateViolationDto {
                type_id: light.id,
                implemented: true,
            },
        )
        .await?;

    assert_eq!(updated.total_points, 5);
    assert_eq!(stored_points(db, student.nis).await?, 5);

    Ok(())
}

/// Tests updating a violation that does not exist.
///
/// Expected: Err(NotFound)
#[tokio::test]
async fn update_unknown_violation_fails() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_violation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let category = factory::create_violation_category(db).await?;
    let kind = factory::create_violation_type(db, category.id).await?;

    let service = ViolationService::new(db, true);
    let result = service
        .update(
            424242,
            UpdateViolationDto {
                type_id: kind.id,
                implemented: false,
            },
        )
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}

/// Tests that re-pointing at an unknown type leaves the ledger alone.
///
/// Expected: Err(NotFound) with the total and the violation unchanged
#[tokio::test]
async fn update_to_unknown_type_leaves_ledger_alone() -> Result<(), AppError> {
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

    let result = service
        .update(
            created.violation_id,
            UpdateViolationDto {
                type_id: 999,
                implemented: false,
            },
        )
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));
    assert_eq!(stored_points(db, student.nis).await?, 10);

    Ok(())
}
