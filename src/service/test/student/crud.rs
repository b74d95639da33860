use super::*;

/// Tests registering a student with their initial enrollment.
///
/// Expected: Ok with the enrollment details in the returned row
#[tokio::test]
async fn create_registers_student_and_enrollment() -> Result<(), AppError> {
    let test = TestBuilder::new().with_roster_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let class = factory::class::create_class_with_name(db, "X IPA 1").await?;
    let period = factory::create_year_period(db).await?;

    let service = StudentService::new(db);
    let student = service
        .create(CreateStudentDto {
            nis: 20260001,
            name: "Budi Santoso".to_string(),
            class_id: class.id,
            year_period_id: period.id,
        })
        .await?;

    assert_eq!(student.nis, 20260001);
    assert_eq!(student.point, 0);
    assert_eq!(student.class_name.as_deref(), Some("X IPA 1"));

    Ok(())
}

/// Tests registering the same NIS twice.
///
/// Expected: Err(Conflict) with no second enrollment written
#[tokio::test]
async fn duplicate_nis_conflicts_without_side_effects() -> Result<(), AppError> {
    let test = TestBuilder::new().with_roster_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let class = factory::create_class(db).await?;
    let period = factory::create_year_period(db).await?;

    let service = StudentService::new(db);
    let dto = CreateStudentDto {
        nis: 20260001,
        name: "Budi Santoso".to_string(),
        class_id: class.id,
        year_period_id: period.id,
    };
    service.create(dto.clone()).await?;

    let result = service.create(dto).await;
    assert!(matches!(result, Err(AppError::Conflict(_))));

    use sea_orm::{EntityTrait, PaginatorTrait};
    let enrollments = entity::prelude::Enrollment::find().count(db).await?;
    assert_eq!(enrollments, 1);

    Ok(())
}

/// Tests registering a student against a class that does not exist.
///
/// Expected: Err(NotFound) with no student row written
#[tokio::test]
async fn create_with_unknown_class_fails() -> Result<(), AppError> {
    let test = TestBuilder::new().with_roster_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let period = factory::create_year_period(db).await?;

    let service = StudentService::new(db);
    let result = service
        .create(CreateStudentDto {
            nis: 20260001,
            name: "Budi Santoso".to_string(),
            class_id: 999,
            year_period_id: period.id,
        })
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    use sea_orm::{EntityTrait, PaginatorTrait};
    assert_eq!(entity::prelude::Student::find().count(db).await?, 0);

    Ok(())
}

/// Tests updating a student's name and moving their enrollment.
///
/// Expected: Ok with the new name and class reflected
#[tokio::test]
async fn update_renames_and_moves_enrollment() -> Result<(), AppError> {
    let test = TestBuilder::new().with_roster_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let class_a = factory::class::create_class_with_name(db, "Kelas A").await?;
    let class_b = factory::class::create_class_with_name(db, "Kelas B").await?;
    let period = factory::create_year_period(db).await?;
    let student = factory::create_student(db).await?;
    factory::create_enrollment(db, student.nis, class_a.id, period.id).await?;

    let service = StudentService::new(db);
    let updated = service
        .update(
            student.nis,
            UpdateStudentDto {
                name: "Renamed Student".to_string(),
                class_id: class_b.id,
                year_period_id: period.id,
            },
        )
        .await?;

    assert_eq!(updated.name, "Renamed Student");
    assert_eq!(updated.class_id, Some(class_b.id));

    use sea_orm::{EntityTrait, PaginatorTrait};
    assert_eq!(entity::prelude::Enrollment::find().count(db).await?, 1);

    Ok(())
}

/// Tests deleting a student that does not exist.
///
/// Expected: Err(NotFound)
#[tokio::test]
async fn delete_unknown_student_fails() -> Result<(), AppError> {
    let test = TestBuilder::new().with_roster_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let service = StudentService::new(db);
    let result = service.delete(40404040).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
