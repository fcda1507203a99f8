use super::*;

/// Tests deleting a transporter twice.
///
/// Expected: Ok on the first call and Err(NotFound) on the second
#[tokio::test]
async fn second_delete_is_not_found() -> Result<(), AppError> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let transporter = factory::create_transporter(db).await?;
    let service = CatalogService::<Transporter>::new(db);

    service.delete(&transporter.id, &Audit::now("2")).await?;
    let again = service.delete(&transporter.id, &Audit::now("2")).await;

    assert!(matches!(
        again,
        Err(AppError::NotFound(Resource::Transporter))
    ));
    assert!(matches!(
        service.get(&transporter.id).await,
        Err(AppError::NotFound(_))
    ));

    Ok(())
}
