//! Trip factory for creating test trip entities.
//!
//! Trips reference a pickup location and a transporter by id. The factory takes those
//! ids up front; use `helpers::create_trip_with_dependencies` when the referenced rows
//! do not exist yet.

use crate::factory::helpers::{next_id, FACTORY_ACTOR};
use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test trips with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let trip = TripFactory::new(&db, &location.id, &transporter.id)
///     .slno("SL-001")
///     .pickup_date(yesterday)
///     .build()
///     .await?;
/// ```
pub struct TripFactory<'a> {
    db: &'a DatabaseConnection,
    id: String,
    slno: String,
    vehicle_no: String,
    status: String,
    pickup_location: String,
    transporter_id: String,
    product_type: String,
    product_weight: f64,
    pickup_date: DateTime<Utc>,
    drop_location: Option<String>,
    drop_date: Option<DateTime<Utc>>,
    drop_by: Option<String>,
    deleted: bool,
}

impl<'a> TripFactory<'a> {
    /// Creates a new TripFactory with default values.
    ///
    /// Defaults:
    /// - id: `"trip-{n}"`
    /// - slno: `"SL-{n}"`
    /// - status: `"pending"`
    /// - product_weight: `100.0`
    /// - pickup_date: now
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `pickup_location` - Id of an existing location
    /// - `transporter_id` - Id of an existing transporter
    pub fn new(
        db: &'a DatabaseConnection,
        pickup_location: impl Into<String>,
        transporter_id: impl Into<String>,
    ) -> Self {
        let n = next_id();
        Self {
            db,
            id: format!("trip-{}", n),
            slno: format!("SL-{}", n),
            vehicle_no: format!("KA-01-{:04}", n),
            status: "pending".to_string(),
            pickup_location: pickup_location.into(),
            transporter_id: transporter_id.into(),
            product_type: "cement".to_string(),
            product_weight: 100.0,
            pickup_date: Utc::now(),
            drop_location: None,
            drop_date: None,
            drop_by: None,
            deleted: false,
        }
    }

    pub fn slno(mut self, slno: impl Into<String>) -> Self {
        self.slno = slno.into();
        self
    }

    pub fn vehicle_no(mut self, vehicle_no: impl Into<String>) -> Self {
        self.vehicle_no = vehicle_no.into();
        self
    }

    pub fn product_weight(mut self, product_weight: f64) -> Self {
        self.product_weight = product_weight;
        self
    }

    pub fn pickup_date(mut self, pickup_date: DateTime<Utc>) -> Self {
        self.pickup_date = pickup_date;
        self
    }

    pub fn drop_location(mut self, drop_location: impl Into<String>) -> Self {
        self.drop_location = Some(drop_location.into());
        self
    }

    /// Marks the trip as delivered by `FACTORY_ACTOR` at the current time.
    pub fn completed(mut self) -> Self {
        self.status = "completed".to_string();
        self.drop_date = Some(Utc::now());
        self.drop_by = Some(FACTORY_ACTOR.to_string());
        self
    }

    /// Marks the trip as soft-deleted.
    pub fn deleted(mut self) -> Self {
        self.deleted = true;
        self
    }

    /// Builds and inserts the trip entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::trip::Model)` - Created trip entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::trip::Model, DbErr> {
        let now = Utc::now();
        entity::trip::ActiveModel {
            id: ActiveValue::Set(self.id),
            slno: ActiveValue::Set(self.slno),
            vehicle_no: ActiveValue::Set(self.vehicle_no),
            status: ActiveValue::Set(self.status),
            pickup_location: ActiveValue::Set(self.pickup_location),
            transporter_id: ActiveValue::Set(self.transporter_id),
            product_type: ActiveValue::Set(self.product_type),
            product_weight: ActiveValue::Set(self.product_weight),
            product_bill_image: ActiveValue::Set(String::new()),
            pickup_product_location_image: ActiveValue::Set(String::new()),
            pickup_date: ActiveValue::Set(self.pickup_date),
            pick_by: ActiveValue::Set(FACTORY_ACTOR.to_string()),
            drop_location: ActiveValue::Set(self.drop_location),
            drop_product_location_image: ActiveValue::Set(None),
            drop_date: ActiveValue::Set(self.drop_date),
            drop_by: ActiveValue::Set(self.drop_by),
            created_at: ActiveValue::Set(now),
            updated_by: ActiveValue::Set(FACTORY_ACTOR.to_string()),
            updated_at: ActiveValue::Set(now),
            deleted: ActiveValue::Set(self.deleted),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a pending trip with default values.
///
/// # Arguments
/// - `db` - Database connection
/// - `pickup_location` - Id of an existing location
/// - `transporter_id` - Id of an existing transporter
pub async fn create_trip(
    db: &DatabaseConnection,
    pickup_location: &str,
    transporter_id: &str,
) -> Result<entity::trip::Model, DbErr> {
    TripFactory::new(db, pickup_location, transporter_id)
        .build()
        .await
}
