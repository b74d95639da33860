use super::*;

/// Tests the joined list projection for a single violation.
///
/// Expected: Ok with student, class, type, category, and teacher fields
/// all resolved
#[tokio::test]
async fn lists_violations_with_joined_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_violation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let setup = factory::helpers::create_violation_with_dependencies(db).await?;

    let repo = ViolationRepository::new(db);
    let page = repo
        .list(&ViolationFilter::default(), None, &PageParams::default())
        .await?;

    assert_eq!(page.meta.total, 1);
    let row = &page.records[0];
    assert_eq!(row.id, setup.violation.id);
    assert_eq!(row.nis, setup.student.nis);
    assert_eq!(row.student_name, setup.student.name);
    assert_eq!(row.class_name.as_deref(), Some(setup.class.name.as_str()));
    assert_eq!(row.violation_name, setup.violation_type.name);
    assert_eq!(row.point, setup.violation_type.point);
    assert_eq!(row.category_name, setup.category.name);
    assert_eq!(row.teacher_name, setup.teacher.username);
    assert!(!row.implemented);

    Ok(())
}

/// Tests filtering by the implemented flag.
///
/// Expected: Ok with only unimplemented violations when status=false
#[tokio::test]
async fn filters_by_status() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_violation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let setup = factory::helpers::create_violation_with_dependencies(db).await?;

    let repo = ViolationRepository::new(db);
    let implemented = repo
        .list(
            &ViolationFilter {
                status: Some(true),
                ..Default::default()
            },
            None,
            &PageParams::default(),
        )
        .await?;
    assert_eq!(implemented.meta.total, 0);

    let unimplemented = repo
        .list(
            &ViolationFilter {
                status: Some(false),
                ..Default::default()
            },
            None,
            &PageParams::default(),
        )
        .await?;
    assert_eq!(unimplemented.meta.total, 1);
    assert_eq!(unimplemented.records[0].id, setup.violation.id);

    Ok(())
}

/// Tests the open-ended time window: a 2-day-old violation is inside a
/// 7-day anchor and outside a today anchor.
///
/// Expected: Ok with the violation included and excluded respectively
#[tokio::test]
async fn from_date_bounds_created_at_from_below() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_violation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let setup = factory::helpers::create_violation_with_dependencies(db).await?;
    factory::violation::create_violation_at(
        db,
        setup.student.nis,
        setup.enrollment.id,
        setup.violation_type.id,
        setup.teacher.id,
        Utc::now() - Duration::days(2),
    )
    .await?;

    let repo = ViolationRepository::new(db);
    let week = repo
        .list(
            &ViolationFilter::default(),
            Some(Utc::now() - Duration::days(7)),
            &PageParams::default(),
        )
        .await?;
    assert_eq!(week.meta.total, 2);

    let today = repo
        .list(
            &ViolationFilter::default(),
            Some(Utc::now() - Duration::hours(1)),
            &PageParams::default(),
        )
        .await?;
    assert_eq!(today.meta.total, 1);

    Ok(())
}

/// Tests filtering by the violation type's category.
///
/// Expected: Ok with only violations of types in the filtered category
#[tokio::test]
async fn filters_by_category() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_violation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let setup = factory::helpers::create_violation_with_dependencies(db).await?;
    let other_category = factory::violation_category::create_violation_category(db).await?;
    let other_type = factory::violation_type::create_violation_type(db, other_category.id).await?;
    factory::violation::create_violation(
        db,
        setup.student.nis,
        setup.enrollment.id,
        other_type.id,
        setup.teacher.id,
    )
    .await?;

    let repo = ViolationRepository::new(db);
    let page = repo
        .list(
            &ViolationFilter {
                category_id: Some(setup.category.id),
                ..Default::default()
            },
            None,
            &PageParams::default(),
        )
        .await?;

    assert_eq!(page.meta.total, 1);
    assert_eq!(page.records[0].id, setup.violation.id);

    Ok(())
}

/// Tests that the export query returns every match, ignoring paging.
///
/// Expected: Ok with all rows even though a pageSize of 1 would cap a list
#[tokio::test]
async fn export_is_unpaginated() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_violation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let setup = factory::helpers::create_violation_with_dependencies(db).await?;
    for _ in 0..14 {
        factory::violation::create_violation(
            db,
            setup.student.nis,
            setup.enrollment.id,
            setup.violation_type.id,
            setup.teacher.id,
        )
        .await?;
    }

    let repo = ViolationRepository::new(db);
    let all = repo.export(&ViolationFilter::default(), None).await?;

    assert_eq!(all.len(), 15);

    Ok(())
}

/// Tests that free-text search also reaches the joined class, type, and
/// teacher columns, not just the student.
///
/// Expected: Ok with the violation found under each of the four terms
#[tokio::test]
async fn search_matches_class_type_and_teacher_names() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_violation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let teacher = factory::user::UserFactory::new(db)
        .username("pak-ahmad")
        .build()
        .await?;
    let student = factory::student::StudentFactory::new(db)
        .name("Budi Santoso")
        .build()
        .await?;
    let class = factory::class::create_class_with_name(db, "XII Bahasa 1").await?;
    let period = factory::year_period::create_year_period_for(db, 2026).await?;
    let enrollment =
        factory::enrollment::create_enrollment(db, student.nis, class.id, period.id).await?;
    let category = factory::violation_category::create_violation_category(db).await?;
    let kind = factory::violation_type::ViolationTypeFactory::new(db, category.id)
        .name("Membolos")
        .build()
        .await?;
    factory::violation::create_violation(db, student.nis, enrollment.id, kind.id, teacher.id)
        .await?;

    let repo = ViolationRepository::new(db);
    for term in ["budi", "bahasa 1", "membolos", "ahmad"] {
        let page = repo
            .list(
                &ViolationFilter {
                    search: Some(term.to_string()),
                    ..Default::default()
                },
                None,
                &PageParams::default(),
            )
            .await?;
        assert_eq!(page.meta.total, 1, "search term {term:?} should match");
    }

    let page = repo
        .list(
            &ViolationFilter {
                search: Some("tidak ada".to_string()),
                ..Default::default()
            },
            None,
            &PageParams::default(),
        )
        .await?;
    assert_eq!(page.meta.total, 0);

    Ok(())
}
