use super::*;

/// Tests completing a pending trip with a drop image.
///
/// Expected: Ok with status completed and the caller recorded as drop actor
#[tokio::test]
async fn completes_pending_trip() -> Result<(), AppError> {
    let test = TestBuilder::new().with_trip_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let storage = MemoryStorage::new();

    let (_, _, trip) = create_trip_with_dependencies(db).await?;

    let view = TripService::new(db, &storage)
        .complete(
            &trip.slno,
            CompleteTripParams {
                drop_product_location_image: Some(PNG.to_string()),
            },
            &Audit::now("21"),
        )
        .await?;

    assert_eq!(view.trip.status, TripStatus::Completed);
    assert_eq!(view.trip.drop_by.as_deref(), Some("21"));
    assert!(view.trip.drop_date.is_some());
    assert_eq!(
        view.trip.drop_product_location_image,
        Some(format!(
            "memory://objects/trip-drop-{}-product-location-image.png",
            trip.slno
        ))
    );

    Ok(())
}

/// Tests completing the same trip twice.
///
/// Verifies the second call succeeds, overwrites the drop actor and keeps the drop
/// image when no new one is sent.
///
/// Expected: Ok both times
#[tokio::test]
async fn repeated_completion_overwrites_drop_fields() -> Result<(), AppError> {
    let test = TestBuilder::new().with_trip_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let storage = MemoryStorage::new();
    let service = TripService::new(db, &storage);

    let (_, _, trip) = create_trip_with_dependencies(db).await?;

    let first = service
        .complete(
            &trip.slno,
            CompleteTripParams {
                drop_product_location_image: Some(PNG.to_string()),
            },
            &Audit::now("1"),
        )
        .await?;
    let second = service
        .complete(&trip.slno, CompleteTripParams::default(), &Audit::now("2"))
        .await?;

    assert_eq!(second.trip.status, TripStatus::Completed);
    assert_eq!(second.trip.drop_by.as_deref(), Some("2"));
    assert_eq!(
        second.trip.drop_product_location_image,
        first.trip.drop_product_location_image
    );

    Ok(())
}

/// Tests completing an unknown slno.
///
/// Expected: Err(NotFound(Trip))
#[tokio::test]
async fn unknown_slno_is_not_found() -> Result<(), AppError> {
    let test = TestBuilder::new().with_trip_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let storage = MemoryStorage::new();

    let result = TripService::new(db, &storage)
        .complete("SL-NONE", CompleteTripParams::default(), &Audit::anonymous())
        .await;

    assert!(matches!(result, Err(AppError::NotFound(Resource::Trip))));

    Ok(())
}
