use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

use crate::data::class::ClassRepository;
use crate::model::{class::ClassFilter, page::PageParams};

/// Tests that the search filter matches class names regardless of case.
///
/// Expected: Ok with both "Kelas A" and "KELAS B" matched by "kelas"
#[tokio::test]
async fn search_is_case_insensitive() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Class)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::class::create_class_with_name(db, "Kelas A").await?;
    factory::class::create_class_with_name(db, "KELAS B").await?;
    factory::class::create_class_with_name(db, "X IPA 1").await?;

    let repo = ClassRepository::new(db);
    let filter = ClassFilter {
        search: Some("kelas".to_string()),
    };
    let page = repo.list(&filter, &PageParams::default()).await?;

    assert_eq!(page.meta.total, 2);
    let names: Vec<_> = page.records.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["KELAS B", "Kelas A"]);

    Ok(())
}

/// Tests the case-insensitive exact name lookup used by import and
/// duplicate checks.
///
/// Expected: Ok with the class found under a differently-cased name
#[tokio::test]
async fn find_by_name_ignores_case() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Class)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let class = factory::class::create_class_with_name(db, "X IPA 1").await?;

    let repo = ClassRepository::new(db);
    let found = repo.find_by_name("x ipa 1").await?;
    assert_eq!(found.map(|c| c.id), Some(class.id));

    let missing = repo.find_by_name("XI IPS 2").await?;
    assert!(missing.is_none());

    Ok(())
}

/// Tests that a blank search string is ignored rather than matching
/// nothing.
///
/// Expected: Ok with every class returned
#[tokio::test]
async fn blank_search_returns_everything() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Class)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::class::create_class_with_name(db, "Kelas A").await?;
    factory::class::create_class_with_name(db, "Kelas B").await?;

    let repo = ClassRepository::new(db);
    let filter = ClassFilter {
        search: Some("   ".to_string()),
    };
    let page = repo.list(&filter, &PageParams::default()).await?;

    assert_eq!(page.meta.total, 2);

    Ok(())
}
