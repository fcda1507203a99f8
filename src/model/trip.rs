use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::server::{
    middleware::validation::not_blank,
    model::trip::{filter_date, filter_status, trip_status},
};

/// A trip as returned to clients.
///
/// The `*Name` fields are resolved from the referenced location and transporter rows and
/// are omitted when the reference does not resolve.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TripDto {
    pub id: String,
    pub slno: String,
    pub vehicle_no: String,
    pub status: String,
    pub pickup_location: String,
    pub transporter_id: String,
    pub product_type: String,
    pub product_weight: f64,
    pub product_bill_image: String,
    pub pickup_product_location_image: String,
    pub pickup_date: DateTime<Utc>,
    pub pick_by: String,
    pub drop_location: Option<String>,
    pub drop_product_location_image: Option<String>,
    pub drop_date: Option<DateTime<Utc>>,
    pub drop_by: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_by: String,
    pub updated_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pickup_location_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub drop_location_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transporter_name: Option<String>,
}

/// Body of `POST /trip/create`.
///
/// Image fields carry base64 data URLs; when omitted the stored URL is empty.
#[derive(Debug, Clone, Deserialize, ToSchema, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateTripDto {
    #[validate(custom(function = "not_blank"))]
    pub slno: String,
    #[validate(custom(function = "not_blank"))]
    pub vehicle_no: String,
    #[validate(custom(function = "not_blank"))]
    pub pickup_location: String,
    #[validate(custom(function = "not_blank"))]
    pub transporter_id: String,
    #[validate(custom(function = "not_blank"))]
    pub product_type: String,
    pub product_weight: f64,
    #[serde(default)]
    pub product_bill_image: Option<String>,
    #[serde(default)]
    pub pickup_product_location_image: Option<String>,
    #[serde(default)]
    pub drop_location: Option<String>,
}

/// Body of `POST /trip/{id}`. Absent or null fields keep their stored value.
#[derive(Debug, Clone, Default, Deserialize, ToSchema, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTripDto {
    #[serde(default)]
    pub slno: Option<String>,
    #[serde(default)]
    pub vehicle_no: Option<String>,
    #[serde(default)]
    #[validate(custom(function = "trip_status"))]
    pub status: Option<String>,
    #[serde(default)]
    pub pickup_location: Option<String>,
    #[serde(default)]
    pub transporter_id: Option<String>,
    #[serde(default)]
    pub product_type: Option<String>,
    #[serde(default)]
    pub product_weight: Option<f64>,
    #[serde(default)]
    pub product_bill_image: Option<String>,
    #[serde(default)]
    pub pickup_product_location_image: Option<String>,
    #[serde(default)]
    pub drop_location: Option<String>,
}

/// Body of `POST /trip/update/trip-status/{slno}`.
#[derive(Debug, Clone, Default, Deserialize, ToSchema, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CompleteTripDto {
    #[serde(default)]
    pub drop_product_location_image: Option<String>,
}

/// Filters for listing and exporting trips.
///
/// Dates accept RFC 3339 timestamps or plain `YYYY-MM-DD` dates. A status of `all` or
/// an empty string disables status filtering.
#[derive(Debug, Clone, Default, Deserialize, ToSchema, IntoParams, Validate)]
#[into_params(parameter_in = Query)]
#[serde(rename_all = "camelCase")]
pub struct TripFilterDto {
    #[serde(default)]
    pub slno: Option<String>,
    #[serde(default)]
    #[validate(custom(function = "filter_status"))]
    pub status: Option<String>,
    #[serde(default)]
    #[validate(custom(function = "filter_date"))]
    pub pickup_start_date: Option<String>,
    #[serde(default)]
    #[validate(custom(function = "filter_date"))]
    pub pickup_end_date: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TripPayloadDto {
    pub trip: TripDto,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TripListPayloadDto {
    pub trips: Vec<TripDto>,
}
