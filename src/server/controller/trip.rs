use axum::{
    extract::{Path, Query, State},
    http::header,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use chrono::Utc;

use crate::{
    model::{
        api::{ApiResponseDto, ErrorDto, MessageDto},
        trip::{
            CompleteTripDto, CreateTripDto, TripFilterDto, TripListPayloadDto, TripPayloadDto,
            UpdateTripDto,
        },
    },
    server::{
        controller::ok,
        error::{Action, During, Operation, OperationError},
        middleware::{
            auth::MaybeCaller,
            validation::{JsonOrDefault, ValidatedJson},
        },
        model::{
            resource::Resource,
            trip::{CompleteTripParams, CreateTripParams, TripFilter, UpdateTripParams},
        },
        service::{export, trip::TripService},
        state::AppState,
    },
};

/// Tag for grouping trip endpoints in OpenAPI documentation
pub static TRIP_TAG: &str = "trip";

const CREATE: Operation = Operation::new(Action::Create, Resource::Trip);
const FETCH: Operation = Operation::new(Action::Fetch, Resource::Trip);
const FETCH_ALL: Operation = Operation::new(Action::FetchAll, Resource::Trip);
const UPDATE: Operation = Operation::new(Action::Update, Resource::Trip);
const DELETE: Operation = Operation::new(Action::Delete, Resource::Trip);
const DOWNLOAD: Operation = Operation::new(Action::Download, Resource::Trip);

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/create", post(create_trip))
        .route("/list", get(list_trips))
        .route("/download", get(download_trips))
        .route("/id/{id}", get(get_trip_by_id))
        .route("/{key}", get(get_trip_by_slno).post(update_trip))
        .route("/update/trip-status/{slno}", post(update_trip_status))
        .route("/delete/{id}", post(delete_trip))
}

/// Create a trip.
///
/// Uploads any proof images and records a pending trip picked up now. A bearer token is
/// optional; without one the trip is attributed to the anonymous actor `-1`.
///
/// # Returns
/// - `200 OK` - Created trip
/// - `400 Bad Request` - Invalid body or `DUPLICATE_SLNO`
/// - `403 Forbidden` - A token was sent but is invalid
/// - `500 Internal Server Error` - `CREATE_TRIP_ERROR`
#[utoipa::path(
    post,
    path = "/trip/create",
    tag = TRIP_TAG,
    request_body = CreateTripDto,
    responses(
        (status = 200, description = "Trip created", body = ApiResponseDto<TripPayloadDto>),
        (status = 400, description = "Invalid body or duplicate slno", body = ErrorDto),
        (status = 403, description = "Invalid token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_trip(
    State(state): State<AppState>,
    caller: MaybeCaller,
    ValidatedJson(payload): ValidatedJson<CreateTripDto>,
) -> Result<Json<ApiResponseDto<TripPayloadDto>>, OperationError> {
    let service = TripService::new(&state.db, state.storage.as_ref());

    let view = service
        .create(CreateTripParams::from_dto(payload), &caller.audit())
        .await
        .during(CREATE)?;

    Ok(ok(TripPayloadDto {
        trip: view.into_dto(),
    }))
}

/// List trips.
///
/// The optional JSON body filters by exact slno, status (`all` for every status) and an
/// inclusive pickup date range. Results are ordered by pickup date, newest first.
#[utoipa::path(
    get,
    path = "/trip/list",
    tag = TRIP_TAG,
    request_body(content = TripFilterDto, description = "Optional filter"),
    responses(
        (status = 200, description = "Matching trips", body = ApiResponseDto<TripListPayloadDto>),
        (status = 400, description = "Invalid filter", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_trips(
    State(state): State<AppState>,
    _caller: MaybeCaller,
    JsonOrDefault(filter): JsonOrDefault<TripFilterDto>,
) -> Result<Json<ApiResponseDto<TripListPayloadDto>>, OperationError> {
    let filter = TripFilter::from_dto(filter).during(FETCH_ALL)?;

    let trips = TripService::new(&state.db, state.storage.as_ref())
        .list(&filter)
        .await
        .during(FETCH_ALL)?;

    Ok(ok(TripListPayloadDto {
        trips: trips.into_iter().map(|view| view.into_dto()).collect(),
    }))
}

/// Get a live trip by slno.
#[utoipa::path(
    get,
    path = "/trip/{slno}",
    tag = TRIP_TAG,
    params(("slno" = String, Path, description = "Trip serial number")),
    responses(
        (status = 200, description = "Trip found", body = ApiResponseDto<TripPayloadDto>),
        (status = 404, description = "TRIP_NOT_FOUND", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_trip_by_slno(
    State(state): State<AppState>,
    Path(slno): Path<String>,
) -> Result<Json<ApiResponseDto<TripPayloadDto>>, OperationError> {
    let view = TripService::new(&state.db, state.storage.as_ref())
        .get_by_slno(&slno)
        .await
        .during(FETCH)?;

    Ok(ok(TripPayloadDto {
        trip: view.into_dto(),
    }))
}

/// Get a live trip by id.
#[utoipa::path(
    get,
    path = "/trip/id/{id}",
    tag = TRIP_TAG,
    params(("id" = String, Path, description = "Trip id")),
    responses(
        (status = 200, description = "Trip found", body = ApiResponseDto<TripPayloadDto>),
        (status = 404, description = "TRIP_NOT_FOUND", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_trip_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponseDto<TripPayloadDto>>, OperationError> {
    let view = TripService::new(&state.db, state.storage.as_ref())
        .get_by_id(&id)
        .await
        .during(FETCH)?;

    Ok(ok(TripPayloadDto {
        trip: view.into_dto(),
    }))
}

/// Update a trip by id.
///
/// Omitted or null fields keep their stored values. Blank text for required fields is
/// ignored. Image fields holding a base64 data URL are uploaded and replace the stored
/// URL.
///
/// # Returns
/// - `200 OK` - Updated trip
/// - `400 Bad Request` - Invalid body, unknown status or `DUPLICATE_SLNO`
/// - `404 Not Found` - `TRIP_NOT_FOUND`
/// - `500 Internal Server Error` - `UPDATE_TRIP_ERROR`
#[utoipa::path(
    post,
    path = "/trip/{id}",
    tag = TRIP_TAG,
    params(("id" = String, Path, description = "Trip id")),
    request_body = UpdateTripDto,
    responses(
        (status = 200, description = "Trip updated", body = ApiResponseDto<TripPayloadDto>),
        (status = 400, description = "Invalid body or duplicate slno", body = ErrorDto),
        (status = 404, description = "TRIP_NOT_FOUND", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_trip(
    State(state): State<AppState>,
    caller: MaybeCaller,
    Path(id): Path<String>,
    ValidatedJson(payload): ValidatedJson<UpdateTripDto>,
) -> Result<Json<ApiResponseDto<TripPayloadDto>>, OperationError> {
    let params = UpdateTripParams::from_dto(payload).during(UPDATE)?;

    let view = TripService::new(&state.db, state.storage.as_ref())
        .update(&id, params, &caller.audit())
        .await
        .during(UPDATE)?;

    Ok(ok(TripPayloadDto {
        trip: view.into_dto(),
    }))
}

/// Mark a trip delivered.
///
/// Sets the status to `completed` and records the caller and time of drop. Repeating
/// the call overwrites the drop fields. The body is optional.
#[utoipa::path(
    post,
    path = "/trip/update/trip-status/{slno}",
    tag = TRIP_TAG,
    params(("slno" = String, Path, description = "Trip serial number")),
    request_body(content = CompleteTripDto, description = "Optional drop image"),
    responses(
        (status = 200, description = "Trip completed", body = ApiResponseDto<TripPayloadDto>),
        (status = 404, description = "TRIP_NOT_FOUND", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_trip_status(
    State(state): State<AppState>,
    caller: MaybeCaller,
    Path(slno): Path<String>,
    JsonOrDefault(payload): JsonOrDefault<CompleteTripDto>,
) -> Result<Json<ApiResponseDto<TripPayloadDto>>, OperationError> {
    let view = TripService::new(&state.db, state.storage.as_ref())
        .complete(&slno, CompleteTripParams::from_dto(payload), &caller.audit())
        .await
        .during(UPDATE)?;

    Ok(ok(TripPayloadDto {
        trip: view.into_dto(),
    }))
}

/// Soft-delete a trip by id.
#[utoipa::path(
    post,
    path = "/trip/delete/{id}",
    tag = TRIP_TAG,
    params(("id" = String, Path, description = "Trip id")),
    responses(
        (status = 200, description = "Trip deleted", body = ApiResponseDto<MessageDto>),
        (status = 404, description = "TRIP_NOT_FOUND", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_trip(
    State(state): State<AppState>,
    caller: MaybeCaller,
    Path(id): Path<String>,
) -> Result<Json<ApiResponseDto<MessageDto>>, OperationError> {
    TripService::new(&state.db, state.storage.as_ref())
        .delete(&id, &caller.audit())
        .await
        .during(DELETE)?;

    Ok(ok(MessageDto {
        message: format!("{} deleted successfully", Resource::Trip.label()),
    }))
}

/// Download trips as an xlsx workbook.
///
/// Accepts the same filter as the listing, taken from the query string.
#[utoipa::path(
    get,
    path = "/trip/download",
    tag = TRIP_TAG,
    params(TripFilterDto),
    responses(
        (status = 200, description = "xlsx attachment", content_type = "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet", body = Vec<u8>),
        (status = 400, description = "Invalid filter", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn download_trips(
    State(state): State<AppState>,
    Query(filter): Query<TripFilterDto>,
) -> Result<Response, OperationError> {
    let filter = TripFilter::from_dto(filter).during(DOWNLOAD)?;

    let workbook = TripService::new(&state.db, state.storage.as_ref())
        .export(&filter)
        .await
        .during(DOWNLOAD)?;

    let disposition = format!(
        "attachment; filename=\"{}\"",
        export::file_name(Utc::now())
    );

    Ok((
        [
            (header::CONTENT_TYPE, export::CONTENT_TYPE.to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        workbook,
    )
        .into_response())
}
