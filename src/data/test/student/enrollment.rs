use super::*;

/// Tests that the latest enrollment wins when a student has several.
///
/// Expected: Ok(Some) with the enrollment for the newest year period
#[tokio::test]
async fn latest_enrollment_prefers_newest_period() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_roster_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let student = factory::student::create_student(db).await?;
    let class = factory::class::create_class(db).await?;
    let old_period = factory::year_period::create_year_period_for(db, 2025).await?;
    let new_period = factory::year_period::create_year_period_for(db, 2026).await?;
    factory::enrollment::create_enrollment(db, student.nis, class.id, old_period.id).await?;
    let newest =
        factory::enrollment::create_enrollment(db, student.nis, class.id, new_period.id).await?;

    let repo = StudentRepository::new(db);
    let latest = repo.latest_enrollment(student.nis).await?.unwrap();

    assert_eq!(latest.id, newest.id);
    assert_eq!(latest.year_period_id, new_period.id);

    Ok(())
}

/// Tests re-pointing an enrollment at a different class.
///
/// Expected: Ok with the same enrollment row now referencing the new class
#[tokio::test]
async fn move_enrollment_changes_class_in_place() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_roster_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let student = factory::student::create_student(db).await?;
    let class_a = factory::class::create_class_with_name(db, "Kelas A").await?;
    let class_b = factory::class::create_class_with_name(db, "Kelas B").await?;
    let period = factory::year_period::create_year_period(db).await?;
    let enrollment =
        factory::enrollment::create_enrollment(db, student.nis, class_a.id, period.id).await?;

    let repo = StudentRepository::new(db);
    let moved = repo.move_enrollment(enrollment.clone(), class_b.id).await?;

    assert_eq!(moved.id, enrollment.id);
    assert_eq!(moved.class_id, class_b.id);

    Ok(())
}

/// Tests fetching the enrollment for one specific year period.
///
/// Expected: Ok(Some) for the enrolled period, Ok(None) for another
#[tokio::test]
async fn enrollment_for_period_matches_exactly() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_roster_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let student = factory::student::create_student(db).await?;
    let class = factory::class::create_class(db).await?;
    let enrolled = factory::year_period::create_year_period_for(db, 2025).await?;
    let other = factory::year_period::create_year_period_for(db, 2026).await?;
    factory::enrollment::create_enrollment(db, student.nis, class.id, enrolled.id).await?;

    let repo = StudentRepository::new(db);
    assert!(repo
        .enrollment_for_period(student.nis, enrolled.id)
        .await?
        .is_some());
    assert!(repo
        .enrollment_for_period(student.nis, other.id)
        .await?
        .is_none());

    Ok(())
}
