use super::*;

/// Tests fetching one violation in the joined projection.
///
/// Expected: Ok(Some) with the matching id
#[tokio::test]
async fn returns_joined_violation() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_violation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let setup = factory::helpers::create_violation_with_dependencies(db).await?;

    let repo = ViolationRepository::new(db);
    let detail = repo.detail(setup.violation.id).await?.unwrap();

    assert_eq!(detail.id, setup.violation.id);
    assert_eq!(detail.student_name, setup.student.name);

    Ok(())
}

/// Tests looking up a violation id that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn unknown_id_returns_none() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_violation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ViolationRepository::new(db);
    assert!(repo.detail(424242).await?.is_none());

    Ok(())
}

/// Tests flipping the implemented flag in place.
///
/// Expected: Ok with only the flag changed
#[tokio::test]
async fn set_implemented_flips_flag_only() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_violation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let setup = factory::helpers::create_violation_with_dependencies(db).await?;

    let repo = ViolationRepository::new(db);
    let updated = repo.set_implemented(setup.violation.clone(), true).await?;

    assert!(updated.implemented);
    assert_eq!(updated.type_id, setup.violation.type_id);
    assert_eq!(updated.nis, setup.violation.nis);

    Ok(())
}
