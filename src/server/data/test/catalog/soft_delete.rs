use super::*;

/// Tests soft-deleting a live location.
///
/// Verifies that the row remains with `deleted` set and the deleting actor recorded.
///
/// Expected: Ok(true)
#[tokio::test]
async fn soft_deletes_live_record() -> Result<(), AppError> {
    let test = TestBuilder::new().with_table(entity::prelude::Location).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let location = factory::create_location(db).await?;

    let deleted = CatalogRepository::<Location>::new(db)
        .soft_delete(&location.id, &Audit::now("9"))
        .await?;

    assert!(deleted);
    let stored = entity::prelude::Location::find_by_id(location.id.clone())
        .one(db)
        .await?
        .unwrap();
    assert!(stored.deleted);
    assert_eq!(stored.updated_by, "9");

    Ok(())
}

/// Tests deleting a record twice.
///
/// Expected: Ok(false) on the second call
#[tokio::test]
async fn second_delete_reports_missing() -> Result<(), AppError> {
    let test = TestBuilder::new().with_table(entity::prelude::Location).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let location = factory::create_location(db).await?;
    let repo = CatalogRepository::<Location>::new(db);

    assert!(repo.soft_delete(&location.id, &Audit::anonymous()).await?);
    assert!(!repo.soft_delete(&location.id, &Audit::anonymous()).await?);

    Ok(())
}
