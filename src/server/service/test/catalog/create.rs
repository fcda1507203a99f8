use super::*;

/// Tests creating a transporter.
///
/// Expected: Ok with a generated id and the caller as creator
#[tokio::test]
async fn creates_with_generated_id() -> Result<(), AppError> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let service = CatalogService::<Transporter>::new(db);
    let first = service
        .create(
            CreateTransporterParams {
                name: "Acme".to_string(),
            },
            &Audit::now("5"),
        )
        .await?;
    let second = service
        .create(
            CreateTransporterParams {
                name: "Bolt".to_string(),
            },
            &Audit::now("5"),
        )
        .await?;

    assert_ne!(first.id, second.id);
    assert_eq!(first.created_by, "5");

    Ok(())
}

/// Tests creating a user with a mobile number a live user already has.
///
/// Expected: Err(Duplicate(User))
#[tokio::test]
async fn rejects_duplicate_mobile_number() -> Result<(), AppError> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::UserFactory::new(db)
        .mobile_number("9876543210")
        .build()
        .await?;

    let result = CatalogService::<User>::new(db)
        .create(
            CreateUserParams {
                name: "Second".to_string(),
                mobile_number: "9876543210".to_string(),
                user_role: "driver".to_string(),
            },
            &Audit::anonymous(),
        )
        .await;

    assert!(matches!(result, Err(AppError::Duplicate(Resource::User))));

    Ok(())
}

/// Tests creating an app version whose version string is taken.
///
/// Expected: Err(Duplicate(AppVersion))
#[tokio::test]
async fn rejects_duplicate_version() -> Result<(), AppError> {
    let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::app_version::AppVersionFactory::new(db)
        .version("3.2.1")
        .build()
        .await?;

    let result = CatalogService::<AppVersion>::new(db)
        .create(
            CreateAppVersionParams {
                title: "Hotfix".to_string(),
                version: "3.2.1".to_string(),
                description: None,
                additional_info: None,
            },
            &Audit::anonymous(),
        )
        .await;

    assert!(matches!(
        result,
        Err(AppError::Duplicate(Resource::AppVersion))
    ));

    Ok(())
}
