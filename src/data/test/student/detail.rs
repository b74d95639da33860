use super::*;

/// Tests fetching one student with their enrollment joined in.
///
/// Expected: Ok(Some) with class and period labels filled in
#[tokio::test]
async fn returns_student_with_latest_enrollment() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_roster_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let student = factory::student::create_student(db).await?;
    let class = factory::class::create_class_with_name(db, "XI IPS 2").await?;
    let period = factory::year_period::create_year_period_for(db, 2026).await?;
    factory::enrollment::create_enrollment(db, student.nis, class.id, period.id).await?;

    let repo = StudentRepository::new(db);
    let detail = repo.detail(student.nis).await?.unwrap();

    assert_eq!(detail.nis, student.nis);
    assert_eq!(detail.class_name.as_deref(), Some("XI IPS 2"));
    assert_eq!(detail.year_period_id, Some(period.id));

    Ok(())
}

/// Tests that a student without any enrollment still resolves.
///
/// Expected: Ok(Some) with the enrollment fields empty
#[tokio::test]
async fn unenrolled_student_has_empty_enrollment_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_roster_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let student = factory::student::create_student(db).await?;

    let repo = StudentRepository::new(db);
    let detail = repo.detail(student.nis).await?.unwrap();

    assert_eq!(detail.nis, student.nis);
    assert!(detail.class_id.is_none());
    assert!(detail.year_period.is_none());

    Ok(())
}

/// Tests looking up a NIS that was never registered.
///
/// Expected: Ok(None)
#[tokio::test]
async fn unknown_nis_returns_none() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_roster_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = StudentRepository::new(db);
    assert!(repo.detail(40404040).await?.is_none());

    Ok(())
}
