//! Generic CRUD handlers for transporters, users, locations and app versions.
//!
//! Every route requires an authenticated caller. Payloads are keyed by the resource's
//! singular or plural name, e.g. `{"transporter": {...}}` or `{"users": [...]}`.

use axum::{
    extract::{Path, State},
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use serde_json::{Map, Value};

use crate::{
    model::api::{ApiResponseDto, MessageDto},
    server::{
        controller::ok,
        error::{Action, AppError, During, Operation, OperationError},
        middleware::{auth::Caller, validation::ValidatedJson},
        model::{
            app_version::AppVersion,
            catalog::{CatalogRecord, CatalogResource},
        },
        service::catalog::CatalogService,
        state::AppState,
    },
};

type Keyed = Json<ApiResponseDto<Map<String, Value>>>;

/// Routes for one catalog resource, to be nested under its prefix.
pub fn routes<R: CatalogResource>() -> Router<AppState> {
    Router::new()
        .route("/create", post(create_record::<R>))
        .route("/list", get(list_records::<R>))
        .route("/{id}", get(get_record::<R>).post(update_record::<R>))
        .route("/delete/{id}", post(delete_record::<R>))
}

/// App version routes, adding `GET /latest` to the generic set.
pub fn app_version_routes() -> Router<AppState> {
    Router::new()
        .route("/latest", get(latest_app_version))
        .merge(routes::<AppVersion>())
}

fn keyed<T: Serialize>(key: &str, value: T) -> Result<Map<String, Value>, AppError> {
    let mut payload = Map::new();
    payload.insert(key.to_string(), serde_json::to_value(value)?);

    Ok(payload)
}

pub async fn create_record<R: CatalogResource>(
    State(state): State<AppState>,
    caller: Caller,
    ValidatedJson(payload): ValidatedJson<R::CreateDto>,
) -> Result<Keyed, OperationError> {
    let op = Operation::new(Action::Create, R::RESOURCE);

    let record = CatalogService::<R>::new(&state.db)
        .create(R::create_from_dto(payload), &caller.audit())
        .await
        .during(op)?;

    Ok(ok(keyed(R::SINGULAR, record.into_dto()).during(op)?))
}

pub async fn list_records<R: CatalogResource>(
    State(state): State<AppState>,
    _caller: Caller,
) -> Result<Keyed, OperationError> {
    let op = Operation::new(Action::FetchAll, R::RESOURCE);

    let records = CatalogService::<R>::new(&state.db).list().await.during(op)?;
    let dtos: Vec<R::Dto> = records.into_iter().map(R::into_dto).collect();

    Ok(ok(keyed(R::PLURAL, dtos).during(op)?))
}

pub async fn get_record<R: CatalogResource>(
    State(state): State<AppState>,
    _caller: Caller,
    Path(id): Path<String>,
) -> Result<Keyed, OperationError> {
    let op = Operation::new(Action::Fetch, R::RESOURCE);

    let record = CatalogService::<R>::new(&state.db)
        .get(&id)
        .await
        .during(op)?;

    Ok(ok(keyed(R::SINGULAR, record.into_dto()).during(op)?))
}

/// Applies a partial update; fields omitted from the body keep their stored values.
pub async fn update_record<R: CatalogResource>(
    State(state): State<AppState>,
    caller: Caller,
    Path(id): Path<String>,
    ValidatedJson(payload): ValidatedJson<R::UpdateDto>,
) -> Result<Keyed, OperationError> {
    let op = Operation::new(Action::Update, R::RESOURCE);

    let record = CatalogService::<R>::new(&state.db)
        .update(&id, R::patch_from_dto(payload), &caller.audit())
        .await
        .during(op)?;

    Ok(ok(keyed(R::SINGULAR, record.into_dto()).during(op)?))
}

pub async fn delete_record<R: CatalogResource>(
    State(state): State<AppState>,
    caller: Caller,
    Path(id): Path<String>,
) -> Result<Json<ApiResponseDto<MessageDto>>, OperationError> {
    let op = Operation::new(Action::Delete, R::RESOURCE);

    CatalogService::<R>::new(&state.db)
        .delete(&id, &caller.audit())
        .await
        .during(op)?;

    Ok(ok(MessageDto {
        message: format!("{} deleted successfully", R::RESOURCE.label()),
    }))
}

/// Returns the most recently created app version, or `null` when there is none.
pub async fn latest_app_version(
    State(state): State<AppState>,
    _caller: Caller,
) -> Result<Keyed, OperationError> {
    let op = Operation::new(Action::FetchLatest, AppVersion::RESOURCE);

    let latest = CatalogService::<AppVersion>::new(&state.db)
        .latest()
        .await
        .during(op)?;

    Ok(ok(
        keyed(AppVersion::SINGULAR, latest.map(AppVersion::into_dto)).during(op)?
    ))
}
