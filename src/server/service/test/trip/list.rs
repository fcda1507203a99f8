use super::*;

/// Tests status filtering, including the `all` wildcard.
///
/// Expected: `all` lists every trip and `pending` only pending ones
#[tokio::test]
async fn filters_by_status() -> Result<(), AppError> {
    let test = TestBuilder::new().with_trip_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let storage = MemoryStorage::new();
    let service = TripService::new(db, &storage);

    let (location, transporter, pending) = create_trip_with_dependencies(db).await?;
    TripFactory::new(db, &location.id, &transporter.id)
        .completed()
        .build()
        .await?;

    let all = service
        .list(&TripFilter::from_dto(crate::model::trip::TripFilterDto {
            status: Some("all".to_string()),
            ..Default::default()
        })?)
        .await?;
    assert_eq!(all.len(), 2);

    let only_pending = service
        .list(&TripFilter {
            status: Some(TripStatus::Pending),
            ..Default::default()
        })
        .await?;
    assert_eq!(only_pending.len(), 1);
    assert_eq!(only_pending[0].trip.id, pending.id);

    Ok(())
}

/// Tests an inclusive pickup date range.
///
/// Expected: Ok with trips on both boundary days and none outside
#[tokio::test]
async fn filters_by_inclusive_date_range() -> Result<(), AppError> {
    let test = TestBuilder::new().with_trip_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let storage = MemoryStorage::new();

    let location = factory::create_location(db).await?;
    let transporter = factory::create_transporter(db).await?;
    for (day, hour) in [(1, 0), (3, 23), (4, 12)] {
        TripFactory::new(db, &location.id, &transporter.id)
            .pickup_date(
                chrono::NaiveDate::from_ymd_opt(2024, 5, day)
                    .and_then(|d| d.and_hms_opt(hour, 0, 0))
                    .unwrap()
                    .and_utc(),
            )
            .build()
            .await?;
    }

    let filter = TripFilter::from_dto(crate::model::trip::TripFilterDto {
        pickup_start_date: Some("2024-05-01".to_string()),
        pickup_end_date: Some("2024-05-03".to_string()),
        ..Default::default()
    })?;
    let trips = TripService::new(db, &storage).list(&filter).await?;

    assert_eq!(trips.len(), 2);
    assert!(trips[0].trip.pickup_date > trips[1].trip.pickup_date);

    Ok(())
}

/// Tests exporting the filtered listing.
///
/// Expected: Ok with a header row plus one row per live trip on `Sheet1`
#[tokio::test]
async fn exports_listing_as_spreadsheet() -> Result<(), AppError> {
    let test = TestBuilder::new().with_trip_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let storage = MemoryStorage::new();

    let (location, transporter, trip) = create_trip_with_dependencies(db).await?;
    TripFactory::new(db, &location.id, &transporter.id)
        .pickup_date(Utc::now() - Duration::days(1))
        .deleted()
        .build()
        .await?;

    let workbook = TripService::new(db, &storage)
        .export(&TripFilter::default())
        .await?;
    assert!(workbook.starts_with(b"PK"));

    let rows = export::read_sheet(workbook);

    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0][..3], ["SlNo", "Vehicle No", "Status"]);
    assert_eq!(rows[1][0], trip.slno);
    assert_eq!(rows[1][5], transporter.name);

    Ok(())
}
