use super::*;

/// Tests inserting a new transporter.
///
/// Verifies that the record is stored live with the creating actor in both audit columns.
///
/// Expected: Ok with the transporter stored
#[tokio::test]
async fn inserts_transporter() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Transporter)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CatalogRepository::<Transporter>::new(db);
    let record = Transporter::create(
        "transporter-a".to_string(),
        CreateTransporterParams {
            name: "Acme Haulage".to_string(),
        },
        &Audit::now("12"),
    );
    let inserted = repo.insert(record).await?;

    assert_eq!(inserted.name, "Acme Haulage");
    assert_eq!(inserted.created_by, "12");
    assert_eq!(inserted.updated_by, "12");

    let stored = entity::prelude::Transporter::find_by_id("transporter-a")
        .one(db)
        .await?
        .unwrap();
    assert!(!stored.deleted);

    Ok(())
}

/// Tests inserting a location whose name a live location already holds.
///
/// Expected: Err that `AppError::from_write` maps to `Duplicate`
#[tokio::test]
async fn duplicate_live_name_is_unique_violation() -> Result<(), AppError> {
    let test = TestBuilder::new().with_table(entity::prelude::Location).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::location::LocationFactory::new(db)
        .name("Depot")
        .build()
        .await?;

    let record = Location::create(
        "location-dup".to_string(),
        CreateLocationParams {
            name: "Depot".to_string(),
            latitude: None,
            longitude: None,
            address: None,
        },
        &Audit::anonymous(),
    );
    let result = CatalogRepository::<Location>::new(db)
        .insert(record)
        .await
        .map_err(AppError::from_write(Location::RESOURCE));

    assert!(matches!(result, Err(AppError::Duplicate(_))));

    Ok(())
}

/// Tests that a natural key held only by a soft-deleted row can be reused.
///
/// Expected: Ok with the new user stored
#[tokio::test]
async fn reuses_key_of_deleted_row() -> Result<(), AppError> {
    let test = TestBuilder::new().with_table(entity::prelude::User).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let old = factory::user::UserFactory::new(db)
        .mobile_number("9000000001")
        .build()
        .await?;
    CatalogRepository::<User>::new(db)
        .soft_delete(&old.id, &Audit::now("1"))
        .await?;

    let record = User::create(
        "user-new".to_string(),
        CreateUserParams {
            name: "Ravi".to_string(),
            mobile_number: "9000000001".to_string(),
            user_role: "driver".to_string(),
        },
        &Audit::now("1"),
    );
    let inserted = CatalogRepository::<User>::new(db).insert(record).await?;

    assert_eq!(inserted.mobile_number, "9000000001");
    assert_eq!(inserted.account_status, "active");

    Ok(())
}
