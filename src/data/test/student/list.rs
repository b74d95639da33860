use super::*;

/// Tests listing students joined with their class and year period.
///
/// Expected: Ok with the joined row carrying class and period labels
#[tokio::test]
async fn lists_students_with_enrollment_details() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_roster_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let student = factory::student::StudentFactory::new(db)
        .name("Budi Santoso")
        .point(15)
        .build()
        .await?;
    let class = factory::class::create_class_with_name(db, "X IPA 1").await?;
    let period = factory::year_period::create_year_period_for(db, 2026).await?;
    factory::enrollment::create_enrollment(db, student.nis, class.id, period.id).await?;

    let repo = StudentRepository::new(db);
    let page = repo
        .list(&StudentFilter::default(), &PageParams::default())
        .await?;

    assert_eq!(page.meta.total, 1);
    let row = &page.records[0];
    assert_eq!(row.nis, student.nis);
    assert_eq!(row.name, "Budi Santoso");
    assert_eq!(row.point, 15);
    assert_eq!(row.class_name.as_deref(), Some("X IPA 1"));
    assert_eq!(row.year_period.as_deref(), Some("Tahun Ajaran 2026/2027"));

    Ok(())
}

/// Tests searching students by name and by NIS digits.
///
/// Expected: Ok with only the matching student in each case
#[tokio::test]
async fn search_matches_name_or_nis() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_roster_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let class = factory::class::create_class(db).await?;
    let period = factory::year_period::create_year_period(db).await?;

    let budi = factory::student::StudentFactory::new(db)
        .nis(20260001)
        .name("Budi Santoso")
        .build()
        .await?;
    let siti = factory::student::StudentFactory::new(db)
        .nis(20269999)
        .name("Siti Rahma")
        .build()
        .await?;
    factory::enrollment::create_enrollment(db, budi.nis, class.id, period.id).await?;
    factory::enrollment::create_enrollment(db, siti.nis, class.id, period.id).await?;

    let repo = StudentRepository::new(db);

    let by_name = repo
        .list(
            &StudentFilter {
                search: Some("budi".to_string()),
                ..Default::default()
            },
            &PageParams::default(),
        )
        .await?;
    assert_eq!(by_name.meta.total, 1);
    assert_eq!(by_name.records[0].nis, budi.nis);

    let by_nis = repo
        .list(
            &StudentFilter {
                search: Some("9999".to_string()),
                ..Default::default()
            },
            &PageParams::default(),
        )
        .await?;
    assert_eq!(by_nis.meta.total, 1);
    assert_eq!(by_nis.records[0].nis, siti.nis);

    Ok(())
}

/// Tests narrowing the list by class and by year period.
///
/// Expected: Ok with only students enrolled in the filtered class
#[tokio::test]
async fn filters_by_class_and_period() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_roster_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let class_a = factory::class::create_class_with_name(db, "Kelas A").await?;
    let class_b = factory::class::create_class_with_name(db, "Kelas B").await?;
    let period = factory::year_period::create_year_period(db).await?;

    let in_a = factory::student::create_student(db).await?;
    let in_b = factory::student::create_student(db).await?;
    factory::enrollment::create_enrollment(db, in_a.nis, class_a.id, period.id).await?;
    factory::enrollment::create_enrollment(db, in_b.nis, class_b.id, period.id).await?;

    let repo = StudentRepository::new(db);
    let page = repo
        .list(
            &StudentFilter {
                class_id: Some(class_a.id),
                year_period_id: Some(period.id),
                ..Default::default()
            },
            &PageParams::default(),
        )
        .await?;

    assert_eq!(page.meta.total, 1);
    assert_eq!(page.records[0].nis, in_a.nis);

    Ok(())
}

/// Tests that free-text search also matches the enrolled class's name.
///
/// Expected: Ok with only the student in the matching class
#[tokio::test]
async fn search_matches_class_name() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_roster_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let period = factory::year_period::create_year_period_for(db, 2026).await?;
    let ipa = factory::class::create_class_with_name(db, "X IPA 1").await?;
    let ips = factory::class::create_class_with_name(db, "X IPS 2").await?;

    let in_ipa = factory::student::StudentFactory::new(db)
        .name("Budi Santoso")
        .build()
        .await?;
    factory::enrollment::create_enrollment(db, in_ipa.nis, ipa.id, period.id).await?;

    let in_ips = factory::student::StudentFactory::new(db)
        .name("Siti Aminah")
        .build()
        .await?;
    factory::enrollment::create_enrollment(db, in_ips.nis, ips.id, period.id).await?;

    let repo = StudentRepository::new(db);
    let page = repo
        .list(
            &StudentFilter {
                search: Some("ipa 1".to_string()),
                ..Default::default()
            },
            &PageParams::default(),
        )
        .await?;

    assert_eq!(page.meta.total, 1);
    assert_eq!(page.records[0].name, "Budi Santoso");

    Ok(())
}
