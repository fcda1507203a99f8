use super::*;

/// Tests listing all live trips, newest pickup first.
///
/// Expected: Ok with deleted trips excluded and pickup_date descending
#[tokio::test]
async fn lists_live_trips_newest_pickup_first() -> Result<(), AppError> {
    let test = TestBuilder::new().with_trip_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let location = factory::create_location(db).await?;
    let transporter = factory::create_transporter(db).await?;
    let now = Utc::now();
    let older = TripFactory::new(db, &location.id, &transporter.id)
        .pickup_date(now - Duration::days(2))
        .build()
        .await?;
    let newer = TripFactory::new(db, &location.id, &transporter.id)
        .pickup_date(now - Duration::days(1))
        .build()
        .await?;
    TripFactory::new(db, &location.id, &transporter.id)
        .pickup_date(now)
        .deleted()
        .build()
        .await?;

    let views = TripRepository::new(db)
        .list_views(&TripFilter::default())
        .await?;
    let ids: Vec<&str> = views.iter().map(|v| v.trip.id.as_str()).collect();

    assert_eq!(ids, vec![newer.id.as_str(), older.id.as_str()]);
    assert!(views
        .iter()
        .all(|v| v.transporter_name.as_deref() == Some(transporter.name.as_str())));

    Ok(())
}

/// Tests filtering by status.
///
/// Expected: Ok with only completed trips
#[tokio::test]
async fn filters_by_status() -> Result<(), AppError> {
    let test = TestBuilder::new().with_trip_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let location = factory::create_location(db).await?;
    let transporter = factory::create_transporter(db).await?;
    factory::create_trip(db, &location.id, &transporter.id).await?;
    let completed = TripFactory::new(db, &location.id, &transporter.id)
        .completed()
        .build()
        .await?;

    let views = TripRepository::new(db)
        .list_views(&TripFilter {
            status: Some(TripStatus::Completed),
            ..Default::default()
        })
        .await?;

    assert_eq!(views.len(), 1);
    assert_eq!(views[0].trip.id, completed.id);

    Ok(())
}

/// Tests filtering by an inclusive pickup date window combined with slno.
///
/// Expected: Ok with the single trip inside the window holding the slno
#[tokio::test]
async fn filters_by_pickup_window_and_slno() -> Result<(), AppError> {
    let test = TestBuilder::new().with_trip_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let location = factory::create_location(db).await?;
    let transporter = factory::create_transporter(db).await?;
    let now = Utc::now();
    let inside = TripFactory::new(db, &location.id, &transporter.id)
        .slno("SL-WINDOW")
        .pickup_date(now - Duration::days(5))
        .build()
        .await?;
    TripFactory::new(db, &location.id, &transporter.id)
        .pickup_date(now - Duration::days(5))
        .build()
        .await?;
    TripFactory::new(db, &location.id, &transporter.id)
        .pickup_date(now - Duration::days(30))
        .build()
        .await?;

    let repo = TripRepository::new(db);
    let window = TripFilter {
        pickup_from: Some(now - Duration::days(10)),
        pickup_to: Some(now - Duration::days(4)),
        ..Default::default()
    };

    assert_eq!(repo.list_views(&window).await?.len(), 2);

    let views = repo
        .list_views(&TripFilter {
            slno: Some("SL-WINDOW".to_string()),
            ..window
        })
        .await?;

    assert_eq!(views.len(), 1);
    assert_eq!(views[0].trip.id, inside.id);

    Ok(())
}
