use crate::server::{
    error::AppError,
    model::{
        audit::Audit,
        resource::Resource,
        trip::{
            CompleteTripParams, CreateTripParams, TripFilter, TripStatus, UpdateTripParams,
        },
    },
    service::{export, trip::TripService},
    storage::memory::MemoryStorage,
};
use chrono::{Duration, Utc};
use sea_orm::{DatabaseConnection, DbErr};
use test_utils::{
    builder::TestBuilder,
    factory::{self, helpers::create_trip_with_dependencies, trip::TripFactory},
};

mod complete;
mod create;
mod list;

/// Base64 for `hello`, tagged as PNG.
const PNG: &str = "data:image/png;base64,aGVsbG8=";

/// Creation parameters referencing a freshly created location and transporter.
async fn create_params(db: &DatabaseConnection, slno: &str) -> Result<CreateTripParams, DbErr> {
    let location = factory::create_location(db).await?;
    let transporter = factory::create_transporter(db).await?;

    Ok(CreateTripParams {
        slno: slno.to_string(),
        vehicle_no: "KA-05-7788".to_string(),
        pickup_location: location.id,
        transporter_id: transporter.id,
        product_type: "steel".to_string(),
        product_weight: 250.0,
        product_bill_image: None,
        pickup_product_location_image: None,
        drop_location: None,
    })
}
