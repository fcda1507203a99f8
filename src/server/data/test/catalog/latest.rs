use super::*;

/// Tests that the latest record skips a newer soft-deleted one.
///
/// Expected: Ok(Some) with the newest live version
#[tokio::test]
async fn returns_newest_live_record() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::AppVersion)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let now = Utc::now();
    factory::app_version::AppVersionFactory::new(db)
        .version("1.0.0")
        .created_at(now - Duration::days(3))
        .build()
        .await?;
    factory::app_version::AppVersionFactory::new(db)
        .version("1.1.0")
        .created_at(now - Duration::days(1))
        .build()
        .await?;
    factory::app_version::AppVersionFactory::new(db)
        .version("2.0.0")
        .created_at(now)
        .deleted()
        .build()
        .await?;

    let latest = CatalogRepository::<AppVersion>::new(db).latest().await?;

    assert_eq!(latest.map(|v| v.version), Some("1.1.0".to_string()));

    Ok(())
}

/// Tests the latest record of an empty table.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_when_empty() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::AppVersion)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    assert!(CatalogRepository::<AppVersion>::new(db)
        .latest()
        .await?
        .is_none());

    Ok(())
}
