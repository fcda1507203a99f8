use super::*;

/// Tests fetching a trip view by slno.
///
/// Verifies that pickup, drop and transporter names are resolved.
///
/// Expected: Ok(Some) with all names attached
#[tokio::test]
async fn resolves_names_by_slno() -> Result<(), AppError> {
    let test = TestBuilder::new().with_trip_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let pickup = factory::location::LocationFactory::new(db)
        .name("North Yard")
        .build()
        .await?;
    let drop = factory::location::LocationFactory::new(db)
        .name("South Dock")
        .build()
        .await?;
    let transporter = factory::transporter::create_transporter_named(db, "Acme").await?;
    TripFactory::new(db, &pickup.id, &transporter.id)
        .slno("SL-100")
        .drop_location(&drop.id)
        .build()
        .await?;

    let view = TripRepository::new(db)
        .find_view_by_slno("SL-100")
        .await?
        .unwrap();

    assert_eq!(view.trip.slno, "SL-100");
    assert_eq!(view.pickup_location_name.as_deref(), Some("North Yard"));
    assert_eq!(view.drop_location_name.as_deref(), Some("South Dock"));
    assert_eq!(view.transporter_name.as_deref(), Some("Acme"));

    Ok(())
}

/// Tests a trip without a drop location.
///
/// Expected: Ok(Some) with no drop location name
#[tokio::test]
async fn trip_without_drop_has_no_drop_name() -> Result<(), AppError> {
    let test = TestBuilder::new().with_trip_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (location, _, trip) = create_trip_with_dependencies(db).await?;

    let view = TripRepository::new(db)
        .find_view_by_id(&trip.id)
        .await?
        .unwrap();

    assert_eq!(view.pickup_location_name, Some(location.name));
    assert!(view.drop_location_name.is_none());

    Ok(())
}

/// Tests that names of soft-deleted catalog rows are still resolved.
///
/// Expected: Ok(Some) with the deleted transporter's name
#[tokio::test]
async fn resolves_deleted_transporter_name() -> Result<(), AppError> {
    let test = TestBuilder::new().with_trip_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let location = factory::create_location(db).await?;
    let transporter = factory::transporter::TransporterFactory::new(db)
        .name("Retired Carrier")
        .deleted()
        .build()
        .await?;
    let trip = factory::create_trip(db, &location.id, &transporter.id).await?;

    let view = TripRepository::new(db)
        .find_view_by_id(&trip.id)
        .await?
        .unwrap();

    assert_eq!(view.transporter_name.as_deref(), Some("Retired Carrier"));

    Ok(())
}

/// Tests that soft-deleted trips are not found.
///
/// Expected: Ok(None) by id and by slno
#[tokio::test]
async fn hides_deleted_trip() -> Result<(), AppError> {
    let test = TestBuilder::new().with_trip_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let location = factory::create_location(db).await?;
    let transporter = factory::create_transporter(db).await?;
    let trip = TripFactory::new(db, &location.id, &transporter.id)
        .deleted()
        .build()
        .await?;

    let repo = TripRepository::new(db);

    assert!(repo.find_view_by_id(&trip.id).await?.is_none());
    assert!(repo.find_view_by_slno(&trip.slno).await?.is_none());

    Ok(())
}
