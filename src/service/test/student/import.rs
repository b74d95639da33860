use super::*;

/// Tests importing a mix of good and bad rows.
///
/// Expected: Ok with good rows inserted and bad rows reported with reasons
#[tokio::test]
async fn import_inserts_good_rows_and_reports_bad_ones() -> Result<(), AppError> {
    let test = TestBuilder::new().with_roster_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::class::create_class_with_name(db, "X IPA 1").await?;
    factory::create_year_period(db).await?;
    let existing = factory::create_student(db).await?;

    let service = StudentService::new(db);
    let report = service
        .import(ImportStudentsDto {
            rows: vec![
                ImportStudentRow {
                    nis: 20260001,
                    name: "Budi Santoso".to_string(),
                    class: "x ipa 1".to_string(),
                },
                ImportStudentRow {
                    nis: existing.nis,
                    name: "Duplicate".to_string(),
                    class: "X IPA 1".to_string(),
                },
                ImportStudentRow {
                    nis: 20260002,
                    name: "Siti Rahma".to_string(),
                    class: "Unknown Class".to_string(),
                },
                ImportStudentRow {
                    nis: 20260003,
                    name: "   ".to_string(),
                    class: "X IPA 1".to_string(),
                },
            ],
        })
        .await?;

    assert_eq!(report.imported, 1);
    assert_eq!(report.skipped.len(), 3);
    let skipped_rows: Vec<_> = report.skipped.iter().map(|s| s.row).collect();
    assert_eq!(skipped_rows, vec![2, 3, 4]);

    let imported = StudentService::new(db).get_by_nis(20260001).await?;
    assert_eq!(imported.class_name.as_deref(), Some("X IPA 1"));

    Ok(())
}

/// Tests importing when no year period exists yet.
///
/// Expected: Err(Validation)
#[tokio::test]
async fn import_without_year_period_fails() -> Result<(), AppError> {
    let test = TestBuilder::new().with_roster_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::class::create_class_with_name(db, "X IPA 1").await?;

    let service = StudentService::new(db);
    let result = service
        .import(ImportStudentsDto {
            rows: vec![ImportStudentRow {
                nis: 20260001,
                name: "Budi Santoso".to_string(),
                class: "X IPA 1".to_string(),
            }],
        })
        .await;

    assert!(matches!(result, Err(AppError::Validation(_))));

    Ok(())
}

/// Tests that an empty import is a no-op rather than an error.
///
/// Expected: Ok with zero imported and zero skipped
#[tokio::test]
async fn empty_import_is_a_noop() -> Result<(), AppError> {
    let test = TestBuilder::new().with_roster_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_year_period(db).await?;

    let service = StudentService::new(db);
    let report = service.import(ImportStudentsDto { rows: vec![] }).await?;

    assert_eq!(report.imported, 0);
    assert!(report.skipped.is_empty());

    Ok(())
}
