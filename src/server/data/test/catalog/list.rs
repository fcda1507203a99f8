use super::*;

/// Tests listing records newest first without deleted rows.
///
/// Expected: Ok with live versions ordered by created_at descending
#[tokio::test]
async fn lists_live_records_newest_first() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::AppVersion)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let now = Utc::now();
    let older = factory::app_version::AppVersionFactory::new(db)
        .created_at(now - Duration::days(2))
        .build()
        .await?;
    let newer = factory::app_version::AppVersionFactory::new(db)
        .created_at(now - Duration::days(1))
        .build()
        .await?;
    factory::app_version::AppVersionFactory::new(db)
        .created_at(now)
        .deleted()
        .build()
        .await?;

    let versions = CatalogRepository::<AppVersion>::new(db).list().await?;
    let ids: Vec<&str> = versions.iter().map(|v| v.id.as_str()).collect();

    assert_eq!(ids, vec![newer.id.as_str(), older.id.as_str()]);

    Ok(())
}

/// Tests listing an empty table.
///
/// Expected: Ok with an empty vector
#[tokio::test]
async fn lists_nothing_when_empty() -> Result<(), AppError> {
    let test = TestBuilder::new().with_table(entity::prelude::User).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let users = CatalogRepository::<User>::new(db).list().await?;

    assert!(users.is_empty());

    Ok(())
}
