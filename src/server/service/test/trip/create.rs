use super::*;

/// Tests creating a trip without images.
///
/// Verifies the new trip starts pending, is picked up now by the caller and carries
/// empty image URLs.
///
/// Expected: Ok with a pending trip
#[tokio::test]
async fn creates_pending_trip() -> Result<(), AppError> {
    let test = TestBuilder::new().with_trip_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let storage = MemoryStorage::new();

    let params = create_params(db, "SL-1").await?;
    let before = Utc::now();
    let view = TripService::new(db, &storage)
        .create(params, &Audit::now("17"))
        .await?;

    assert_eq!(view.trip.status, TripStatus::Pending);
    assert_eq!(view.trip.pick_by, "17");
    assert!(view.trip.pickup_date >= before - Duration::seconds(1));
    assert!(view.trip.pickup_date <= Utc::now());
    assert!(view.trip.product_bill_image.is_empty());
    assert!(view.transporter_name.is_some());
    assert_eq!(storage.len(), 0);

    Ok(())
}

/// Tests that two creates get distinct ids.
///
/// Expected: Ok with different ids
#[tokio::test]
async fn assigns_fresh_ids() -> Result<(), AppError> {
    let test = TestBuilder::new().with_trip_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let storage = MemoryStorage::new();
    let service = TripService::new(db, &storage);

    let first = service
        .create(create_params(db, "SL-A").await?, &Audit::anonymous())
        .await?;
    let second = service
        .create(create_params(db, "SL-B").await?, &Audit::anonymous())
        .await?;

    assert_ne!(first.trip.id, second.trip.id);
    assert_eq!(first.trip.pick_by, "-1");

    Ok(())
}

/// Tests uploading both proof images on create.
///
/// Expected: Ok with URLs under the slno-derived keys
#[tokio::test]
async fn uploads_images_under_slno_keys() -> Result<(), AppError> {
    let test = TestBuilder::new().with_trip_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let storage = MemoryStorage::new();

    let params = CreateTripParams {
        product_bill_image: Some(PNG.to_string()),
        pickup_product_location_image: Some(PNG.to_string()),
        ..create_params(db, "SL-7").await?
    };
    let view = TripService::new(db, &storage)
        .create(params, &Audit::anonymous())
        .await?;

    assert_eq!(
        view.trip.product_bill_image,
        "memory://objects/trip_SL-7-product-bill-image.png"
    );
    assert_eq!(
        view.trip.pickup_product_location_image,
        "memory://objects/trip_SL-7-product-location-image.png"
    );
    assert_eq!(storage.len(), 2);

    Ok(())
}

/// Tests that a failing upload stores an empty URL instead of failing the create.
///
/// Expected: Ok with an empty bill image URL
#[tokio::test]
async fn failed_upload_stores_empty_url() -> Result<(), AppError> {
    let test = TestBuilder::new().with_trip_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let storage = MemoryStorage::rejecting();

    let params = CreateTripParams {
        product_bill_image: Some(PNG.to_string()),
        ..create_params(db, "SL-8").await?
    };
    let view = TripService::new(db, &storage)
        .create(params, &Audit::anonymous())
        .await?;

    assert!(view.trip.product_bill_image.is_empty());

    Ok(())
}

/// Tests creating a trip whose slno a live trip already holds.
///
/// Verifies the duplicate is rejected whatever the other fields are and that no image
/// is uploaded for the rejected request.
///
/// Expected: Err(Duplicate(Trip))
#[tokio::test]
async fn rejects_duplicate_slno() -> Result<(), AppError> {
    let test = TestBuilder::new().with_trip_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let storage = MemoryStorage::new();

    let (location, transporter, _) = create_trip_with_dependencies(db).await?;
    TripFactory::new(db, &location.id, &transporter.id)
        .slno("SL-DUP")
        .build()
        .await?;

    let params = CreateTripParams {
        product_type: "glass".to_string(),
        product_bill_image: Some(PNG.to_string()),
        ..create_params(db, "SL-DUP").await?
    };
    let result = TripService::new(db, &storage)
        .create(params, &Audit::anonymous())
        .await;

    assert!(matches!(result, Err(AppError::Duplicate(Resource::Trip))));
    assert_eq!(storage.len(), 0);

    Ok(())
}

/// Tests reusing the slno of a soft-deleted trip.
///
/// Expected: Ok with the new trip created
#[tokio::test]
async fn reuses_slno_of_deleted_trip() -> Result<(), AppError> {
    let test = TestBuilder::new().with_trip_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let storage = MemoryStorage::new();

    let (location, transporter, _) = create_trip_with_dependencies(db).await?;
    TripFactory::new(db, &location.id, &transporter.id)
        .slno("SL-OLD")
        .deleted()
        .build()
        .await?;

    let view = TripService::new(db, &storage)
        .create(create_params(db, "SL-OLD").await?, &Audit::anonymous())
        .await?;

    assert_eq!(view.trip.slno, "SL-OLD");

    Ok(())
}
