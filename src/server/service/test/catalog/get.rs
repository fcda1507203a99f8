use super::*;

/// Tests getting a live location.
///
/// Expected: Ok with the stored address
#[tokio::test]
async fn gets_live_record() -> Result<(), AppError> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let location = factory::location::LocationFactory::new(db)
        .address("12 Harbour Road")
        .build()
        .await?;

    let found = CatalogService::<Location>::new(db).get(&location.id).await?;

    assert_eq!(found.address.as_deref(), Some("12 Harbour Road"));

    Ok(())
}

/// Tests getting a soft-deleted location.
///
/// Expected: Err(NotFound(Location))
#[tokio::test]
async fn deleted_record_is_not_found() -> Result<(), AppError> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let location = factory::location::LocationFactory::new(db)
        .deleted()
        .build()
        .await?;

    let result = CatalogService::<Location>::new(db).get(&location.id).await;

    assert!(matches!(result, Err(AppError::NotFound(Resource::Location))));

    Ok(())
}

/// Tests that listing leaves out soft-deleted rows.
///
/// Expected: Ok with only the live location
#[tokio::test]
async fn list_excludes_deleted_records() -> Result<(), AppError> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let live = factory::create_location(db).await?;
    factory::location::LocationFactory::new(db)
        .deleted()
        .build()
        .await?;

    let locations = CatalogService::<Location>::new(db).list().await?;

    assert_eq!(locations.len(), 1);
    assert_eq!(locations[0].id, live.id);

    Ok(())
}
