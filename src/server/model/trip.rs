//! Trip domain models and operation-specific parameter types.
//!
//! Request DTOs become `*Params` here, still carrying raw image data URLs. The trip
//! service uploads those images and hands the resulting URLs to the persistence layer as
//! `NewTrip` or `TripPatch`.

use chrono::{DateTime, NaiveDate, Utc};
use entity::trip::{ActiveModel, Column, Entity, Model};
use sea_orm::ActiveValue;
use validator::ValidationError;

use crate::{
    model::trip::{CompleteTripDto, CreateTripDto, TripDto, TripFilterDto, UpdateTripDto},
    server::{
        error::{internal::InternalError, AppError},
        model::{
            audit::Audit,
            catalog::CatalogRecord,
            patch::{merge, merge_optional, merge_required_text, non_blank},
            resource::Resource,
        },
    },
};

/// Delivery state of a trip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TripStatus {
    Pending,
    Completed,
}

impl TripStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Completed => "completed",
        }
    }

    /// Parses a stored or requested status, returning `None` for anything unknown.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "pending" => Some(Self::Pending),
            "completed" => Some(Self::Completed),
            _ => None,
        }
    }
}

/// A shipment from pickup to drop.
#[derive(Debug, Clone, PartialEq)]
pub struct Trip {
    pub id: String,
    pub slno: String,
    pub vehicle_no: String,
    pub status: TripStatus,
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
}

/// A trip together with the display names of the rows it references.
#[derive(Debug, Clone, PartialEq)]
pub struct TripView {
    pub trip: Trip,
    pub pickup_location_name: Option<String>,
    pub drop_location_name: Option<String>,
    pub transporter_name: Option<String>,
}

impl TripView {
    /// Converts the view into a DTO for API responses.
    pub fn into_dto(self) -> TripDto {
        let trip = self.trip;
        TripDto {
            id: trip.id,
            slno: trip.slno,
            vehicle_no: trip.vehicle_no,
            status: trip.status.as_str().to_string(),
            pickup_location: trip.pickup_location,
            transporter_id: trip.transporter_id,
            product_type: trip.product_type,
            product_weight: trip.product_weight,
            product_bill_image: trip.product_bill_image,
            pickup_product_location_image: trip.pickup_product_location_image,
            pickup_date: trip.pickup_date,
            pick_by: trip.pick_by,
            drop_location: trip.drop_location,
            drop_product_location_image: trip.drop_product_location_image,
            drop_date: trip.drop_date,
            drop_by: trip.drop_by,
            created_at: trip.created_at,
            updated_by: trip.updated_by,
            updated_at: trip.updated_at,
            pickup_location_name: self.pickup_location_name,
            drop_location_name: self.drop_location_name,
            transporter_name: self.transporter_name,
        }
    }
}

impl Trip {
    /// Converts the trip into a DTO without resolved names.
    pub fn into_dto(self) -> TripDto {
        TripView {
            trip: self,
            pickup_location_name: None,
            drop_location_name: None,
            transporter_name: None,
        }
        .into_dto()
    }
}

/// Parameters for creating a trip, before images are uploaded.
#[derive(Debug, Clone)]
pub struct CreateTripParams {
    pub slno: String,
    pub vehicle_no: String,
    pub pickup_location: String,
    pub transporter_id: String,
    pub product_type: String,
    pub product_weight: f64,
    pub product_bill_image: Option<String>,
    pub pickup_product_location_image: Option<String>,
    pub drop_location: Option<String>,
}

impl CreateTripParams {
    pub fn from_dto(dto: CreateTripDto) -> Self {
        Self {
            slno: dto.slno.trim().to_string(),
            vehicle_no: dto.vehicle_no.trim().to_string(),
            pickup_location: dto.pickup_location.trim().to_string(),
            transporter_id: dto.transporter_id.trim().to_string(),
            product_type: dto.product_type.trim().to_string(),
            product_weight: dto.product_weight,
            product_bill_image: non_blank(dto.product_bill_image),
            pickup_product_location_image: non_blank(dto.pickup_product_location_image),
            drop_location: non_blank(dto.drop_location),
        }
    }
}

/// Parameters for a full trip update, before images are uploaded.
#[derive(Debug, Clone, Default)]
pub struct UpdateTripParams {
    pub slno: Option<String>,
    pub vehicle_no: Option<String>,
    pub status: Option<TripStatus>,
    pub pickup_location: Option<String>,
    pub transporter_id: Option<String>,
    pub product_type: Option<String>,
    pub product_weight: Option<f64>,
    pub product_bill_image: Option<String>,
    pub pickup_product_location_image: Option<String>,
    pub drop_location: Option<String>,
}

impl UpdateTripParams {
    /// Converts the DTO, rejecting unknown status values.
    ///
    /// # Returns
    /// - `Ok(UpdateTripParams)` - Converted parameters
    /// - `Err(AppError::Validation)` - `status` is neither `pending` nor `completed`
    pub fn from_dto(dto: UpdateTripDto) -> Result<Self, AppError> {
        let status = non_blank(dto.status)
            .map(|value| {
                TripStatus::parse(&value)
                    .ok_or_else(|| AppError::Validation(format!("Unknown trip status '{}'", value)))
            })
            .transpose()?;

        Ok(Self {
            slno: dto.slno,
            vehicle_no: dto.vehicle_no,
            status,
            pickup_location: dto.pickup_location,
            transporter_id: dto.transporter_id,
            product_type: dto.product_type,
            product_weight: dto.product_weight,
            product_bill_image: dto.product_bill_image,
            pickup_product_location_image: dto.pickup_product_location_image,
            drop_location: dto.drop_location,
        })
    }
}

/// Parameters for marking a trip delivered, before the drop image is uploaded.
#[derive(Debug, Clone, Default)]
pub struct CompleteTripParams {
    pub drop_product_location_image: Option<String>,
}

impl CompleteTripParams {
    pub fn from_dto(dto: CompleteTripDto) -> Self {
        Self {
            drop_product_location_image: non_blank(dto.drop_product_location_image),
        }
    }
}

/// A validated new trip with image URLs already resolved.
#[derive(Debug, Clone)]
pub struct NewTrip {
    pub slno: String,
    pub vehicle_no: String,
    pub pickup_location: String,
    pub transporter_id: String,
    pub product_type: String,
    pub product_weight: f64,
    pub product_bill_image: String,
    pub pickup_product_location_image: String,
    pub drop_location: Option<String>,
}

/// Presence-tracked trip update with image URLs already resolved.
#[derive(Debug, Clone, Default)]
pub struct TripPatch {
    pub slno: Option<String>,
    pub vehicle_no: Option<String>,
    pub status: Option<TripStatus>,
    pub pickup_location: Option<String>,
    pub transporter_id: Option<String>,
    pub product_type: Option<String>,
    pub product_weight: Option<f64>,
    pub product_bill_image: Option<String>,
    pub pickup_product_location_image: Option<String>,
    pub drop_location: Option<String>,
}

/// Drop-side columns written when a trip is delivered.
#[derive(Debug, Clone)]
pub struct TripCompletion {
    pub drop_product_location_image: Option<String>,
    pub drop_by: String,
    pub drop_date: DateTime<Utc>,
}

impl CatalogRecord for Trip {
    type Entity = Entity;
    type Model = Model;
    type ActiveModel = ActiveModel;
    type Create = NewTrip;
    type Patch = TripPatch;

    const RESOURCE: Resource = Resource::Trip;

    fn id_column() -> Column {
        Column::Id
    }

    fn natural_key_column() -> Column {
        Column::Slno
    }

    fn deleted_column() -> Column {
        Column::Deleted
    }

    fn created_at_column() -> Column {
        Column::CreatedAt
    }

    fn updated_at_column() -> Column {
        Column::UpdatedAt
    }

    fn updated_by_column() -> Column {
        Column::UpdatedBy
    }

    fn id(&self) -> &str {
        &self.id
    }

    /// Converts an entity model into a trip.
    ///
    /// # Returns
    /// - `Ok(Trip)` - Converted trip
    /// - `Err(AppError::InternalErr)` - Stored status is not a known value
    fn from_entity(model: Model) -> Result<Self, AppError> {
        let status = TripStatus::parse(&model.status)
            .ok_or_else(|| InternalError::UnknownTripStatus(model.status.clone()))?;

        Ok(Self {
            id: model.id,
            slno: model.slno,
            vehicle_no: model.vehicle_no,
            status,
            pickup_location: model.pickup_location,
            transporter_id: model.transporter_id,
            product_type: model.product_type,
            product_weight: model.product_weight,
            product_bill_image: model.product_bill_image,
            pickup_product_location_image: model.pickup_product_location_image,
            pickup_date: model.pickup_date,
            pick_by: model.pick_by,
            drop_location: model.drop_location,
            drop_product_location_image: model.drop_product_location_image,
            drop_date: model.drop_date,
            drop_by: model.drop_by,
            created_at: model.created_at,
            updated_by: model.updated_by,
            updated_at: model.updated_at,
        })
    }

    fn into_active_model(self) -> ActiveModel {
        ActiveModel {
            id: ActiveValue::Set(self.id),
            slno: ActiveValue::Set(self.slno),
            vehicle_no: ActiveValue::Set(self.vehicle_no),
            status: ActiveValue::Set(self.status.as_str().to_string()),
            pickup_location: ActiveValue::Set(self.pickup_location),
            transporter_id: ActiveValue::Set(self.transporter_id),
            product_type: ActiveValue::Set(self.product_type),
            product_weight: ActiveValue::Set(self.product_weight),
            product_bill_image: ActiveValue::Set(self.product_bill_image),
            pickup_product_location_image: ActiveValue::Set(self.pickup_product_location_image),
            pickup_date: ActiveValue::Set(self.pickup_date),
            pick_by: ActiveValue::Set(self.pick_by),
            drop_location: ActiveValue::Set(self.drop_location),
            drop_product_location_image: ActiveValue::Set(self.drop_product_location_image),
            drop_date: ActiveValue::Set(self.drop_date),
            drop_by: ActiveValue::Set(self.drop_by),
            created_at: ActiveValue::Set(self.created_at),
            updated_by: ActiveValue::Set(self.updated_by),
            updated_at: ActiveValue::Set(self.updated_at),
            deleted: ActiveValue::Set(false),
        }
    }

    /// New trips start pending, picked up by the caller now.
    fn create(id: String, input: NewTrip, audit: &Audit) -> Self {
        Self {
            id,
            slno: input.slno,
            vehicle_no: input.vehicle_no,
            status: TripStatus::Pending,
            pickup_location: input.pickup_location,
            transporter_id: input.transporter_id,
            product_type: input.product_type,
            product_weight: input.product_weight,
            product_bill_image: input.product_bill_image,
            pickup_product_location_image: input.pickup_product_location_image,
            pickup_date: audit.at,
            pick_by: audit.actor.clone(),
            drop_location: input.drop_location,
            drop_product_location_image: None,
            drop_date: None,
            drop_by: None,
            created_at: audit.at,
            updated_by: audit.actor.clone(),
            updated_at: audit.at,
        }
    }

    fn apply(self, patch: TripPatch, audit: &Audit) -> Self {
        Self {
            slno: merge_required_text(self.slno, patch.slno),
            vehicle_no: merge_required_text(self.vehicle_no, patch.vehicle_no),
            status: merge(self.status, patch.status),
            pickup_location: merge_required_text(self.pickup_location, patch.pickup_location),
            transporter_id: merge_required_text(self.transporter_id, patch.transporter_id),
            product_type: merge_required_text(self.product_type, patch.product_type),
            product_weight: merge(self.product_weight, patch.product_weight),
            product_bill_image: merge(self.product_bill_image, patch.product_bill_image),
            pickup_product_location_image: merge(
                self.pickup_product_location_image,
                patch.pickup_product_location_image,
            ),
            drop_location: merge_optional(self.drop_location, patch.drop_location),
            updated_by: audit.actor.clone(),
            updated_at: audit.at,
            ..self
        }
    }
}

/// Conjunctive filter for listing and exporting trips.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TripFilter {
    pub slno: Option<String>,
    pub status: Option<TripStatus>,
    pub pickup_from: Option<DateTime<Utc>>,
    pub pickup_to: Option<DateTime<Utc>>,
}

impl TripFilter {
    /// Converts the DTO, parsing date bounds and status.
    ///
    /// A status of `all` or an empty string disables status filtering. Dates may be RFC
    /// 3339 timestamps or `YYYY-MM-DD`; a plain end date includes that whole day.
    ///
    /// # Returns
    /// - `Ok(TripFilter)` - Parsed filter
    /// - `Err(AppError::Validation)` - Unknown status or unparseable date
    pub fn from_dto(dto: TripFilterDto) -> Result<Self, AppError> {
        let status = match non_blank(dto.status) {
            None => None,
            Some(value) if value.eq_ignore_ascii_case("all") => None,
            Some(value) => Some(TripStatus::parse(&value).ok_or_else(|| {
                AppError::Validation(format!("Unknown trip status '{}'", value))
            })?),
        };

        Ok(Self {
            slno: non_blank(dto.slno),
            status,
            pickup_from: parse_bound("pickupStartDate", dto.pickup_start_date, false)?,
            pickup_to: parse_bound("pickupEndDate", dto.pickup_end_date, true)?,
        })
    }
}

fn parse_bound(
    field: &str,
    value: Option<String>,
    end_of_day: bool,
) -> Result<Option<DateTime<Utc>>, AppError> {
    let Some(value) = non_blank(value) else {
        return Ok(None);
    };

    parse_date(&value, end_of_day)
        .map(Some)
        .ok_or_else(|| AppError::Validation(format!("{} must be a date, got '{}'", field, value)))
}

/// Parses an RFC 3339 timestamp or a `YYYY-MM-DD` date.
///
/// A plain date becomes midnight, or the last instant of the day when `end_of_day` is set.
fn parse_date(value: &str, end_of_day: bool) -> Option<DateTime<Utc>> {
    let value = value.trim();

    if let Ok(timestamp) = DateTime::parse_from_rfc3339(value) {
        return Some(timestamp.with_timezone(&Utc));
    }

    let date = NaiveDate::parse_from_str(value, "%Y-%m-%d").ok()?;
    let time = if end_of_day {
        date.and_hms_nano_opt(23, 59, 59, 999_999_999)
    } else {
        date.and_hms_opt(0, 0, 0)
    };

    time.map(|t| t.and_utc())
}

fn rule_failed(code: &'static str, message: String) -> ValidationError {
    ValidationError::new(code).with_message(message.into())
}

/// Validation rule for an update's `status`: blank, `pending` or `completed`.
pub fn trip_status(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() || TripStatus::parse(value).is_some() {
        return Ok(());
    }

    Err(rule_failed(
        "trip_status",
        format!("must be 'pending' or 'completed', got '{}'", value),
    ))
}

/// Validation rule for a filter `status`, which additionally accepts `all`.
pub fn filter_status(value: &str) -> Result<(), ValidationError> {
    if value.eq_ignore_ascii_case("all") {
        return Ok(());
    }

    trip_status(value)
}

/// Validation rule for filter date bounds.
pub fn filter_date(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() || parse_date(value, false).is_some() {
        return Ok(());
    }

    Err(rule_failed(
        "date",
        format!("must be an RFC 3339 timestamp or YYYY-MM-DD, got '{}'", value),
    ))
}
