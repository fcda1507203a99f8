use super::*;
use chrono::{Duration, Utc};

/// Tests fetching the latest app version.
///
/// Expected: Ok(Some) with the most recently created version
#[tokio::test]
async fn returns_most_recent_version() -> Result<(), AppError> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let now = Utc::now();
    factory::app_version::AppVersionFactory::new(db)
        .version("1.0.0")
        .created_at(now - Duration::hours(5))
        .build()
        .await?;
    factory::app_version::AppVersionFactory::new(db)
        .version("1.1.0")
        .created_at(now)
        .build()
        .await?;

    let latest = CatalogService::<AppVersion>::new(db).latest().await?;

    assert_eq!(latest.map(|v| v.version).as_deref(), Some("1.1.0"));

    Ok(())
}

/// Tests the latest version when none exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_without_versions() -> Result<(), AppError> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    assert!(CatalogService::<AppVersion>::new(db)
        .latest()
        .await?
        .is_none());

    Ok(())
}
