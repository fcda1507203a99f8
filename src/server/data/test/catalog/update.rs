use super::*;

/// Tests writing a patched transporter back.
///
/// Verifies that the new name and update audit columns are stored while the creation
/// audit columns are preserved.
///
/// Expected: Ok with updated fields
#[tokio::test]
async fn updates_record() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Transporter)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let model = factory::create_transporter(db).await?;
    let repo = CatalogRepository::<Transporter>::new(db);
    let current = repo.find_by_id(&model.id).await?.unwrap();

    let patched = current.apply(
        TransporterPatch {
            name: Some("Renamed Logistics".to_string()),
        },
        &Audit::now("44"),
    );
    let updated = repo.update(patched).await?.unwrap();

    assert_eq!(updated.name, "Renamed Logistics");
    assert_eq!(updated.updated_by, "44");
    assert_eq!(updated.created_by, model.created_by);

    Ok(())
}

/// Tests renaming a transporter to a name another live transporter holds.
///
/// Expected: Err mapped to `Duplicate`
#[tokio::test]
async fn rename_onto_live_name_is_duplicate() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Transporter)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::transporter::create_transporter_named(db, "Taken").await?;
    let model = factory::create_transporter(db).await?;
    let repo = CatalogRepository::<Transporter>::new(db);
    let current = repo.find_by_id(&model.id).await?.unwrap();

    let result = repo
        .update(current.apply(
            TransporterPatch {
                name: Some("Taken".to_string()),
            },
            &Audit::anonymous(),
        ))
        .await
        .map_err(AppError::from_write(Transporter::RESOURCE));

    assert!(matches!(result, Err(AppError::Duplicate(_))));

    Ok(())
}

/// Tests writing back a record that was soft-deleted after it was loaded.
///
/// Verifies that the stale write neither applies nor clears the soft-delete flag.
///
/// Expected: Ok(None) and the record stays deleted
#[tokio::test]
async fn update_after_soft_delete_keeps_record_deleted() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Transporter)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let model = factory::create_transporter(db).await?;
    let repo = CatalogRepository::<Transporter>::new(db);
    let current = repo.find_by_id(&model.id).await?.unwrap();

    repo.soft_delete(&model.id, &Audit::now("9")).await?;
    let result = repo
        .update(current.apply(
            TransporterPatch {
                name: Some("Revived".to_string()),
            },
            &Audit::now("44"),
        ))
        .await?;

    assert!(result.is_none());
    assert!(repo.find_by_id(&model.id).await?.is_none());

    let stored = entity::prelude::Transporter::find_by_id(model.id.clone())
        .one(db)
        .await?
        .unwrap();
    assert!(stored.deleted);
    assert_eq!(stored.name, model.name);

    Ok(())
}
