use super::*;

/// Tests a partial update touching only the address.
///
/// Expected: Ok with the name kept and the address replaced
#[tokio::test]
async fn keeps_omitted_fields() -> Result<(), AppError> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let location = factory::location::LocationFactory::new(db)
        .name("Warehouse 4")
        .build()
        .await?;

    let updated = CatalogService::<Location>::new(db)
        .update(
            &location.id,
            LocationPatch {
                address: Some("Dock Street".to_string()),
                ..Default::default()
            },
            &Audit::now("3"),
        )
        .await?;

    assert_eq!(updated.name, "Warehouse 4");
    assert_eq!(updated.address.as_deref(), Some("Dock Street"));
    assert_eq!(updated.updated_by, "3");

    Ok(())
}

/// Tests that a blank required field is treated as not supplied.
///
/// Expected: Ok with the user's name unchanged and the status applied
#[tokio::test]
async fn blank_name_keeps_stored_name() -> Result<(), AppError> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::UserFactory::new(db)
        .name("Meera")
        .build()
        .await?;

    let updated = CatalogService::<User>::new(db)
        .update(
            &user.id,
            UserPatch {
                name: Some("  ".to_string()),
                account_status: Some("inactive".to_string()),
                ..Default::default()
            },
            &Audit::anonymous(),
        )
        .await?;

    assert_eq!(updated.name, "Meera");
    assert_eq!(updated.account_status, "inactive");

    Ok(())
}

/// Tests updating an id that does not exist.
///
/// Expected: Err(NotFound(Transporter))
#[tokio::test]
async fn unknown_id_is_not_found() -> Result<(), AppError> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = CatalogService::<Transporter>::new(db)
        .update(
            "missing",
            TransporterPatch {
                name: Some("Ghost".to_string()),
            },
            &Audit::anonymous(),
        )
        .await;

    assert!(matches!(
        result,
        Err(AppError::NotFound(Resource::Transporter))
    ));

    Ok(())
}

/// Tests renaming a transporter onto a live transporter's name.
///
/// Expected: Err(Duplicate(Transporter))
#[tokio::test]
async fn rename_collision_is_duplicate() -> Result<(), AppError> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::transporter::create_transporter_named(db, "Taken").await?;
    let other = factory::create_transporter(db).await?;

    let result = CatalogService::<Transporter>::new(db)
        .update(
            &other.id,
            TransporterPatch {
                name: Some("Taken".to_string()),
            },
            &Audit::anonymous(),
        )
        .await;

    assert!(matches!(
        result,
        Err(AppError::Duplicate(Resource::Transporter))
    ));

    Ok(())
}
