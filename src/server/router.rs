//! Route table, middleware stack and OpenAPI document.

use std::{any::Any, path::Path};

use axum::{
    http::StatusCode,
    middleware::from_fn_with_state,
    response::Response,
    routing::get,
    Router,
};
use tower_http::{
    catch_panic::CatchPanicLayer, cors::CorsLayer, services::ServeDir, trace::TraceLayer,
};
use utoipa::{
    openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
    Modify, OpenApi,
};
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    model::{
        api::{ErrorDataDto, ErrorDto, MessageDto},
        app_version::{AppVersionDto, CreateAppVersionDto, UpdateAppVersionDto},
        location::{CreateLocationDto, LocationDto, UpdateLocationDto},
        transporter::{CreateTransporterDto, TransporterDto, UpdateTransporterDto},
        trip::{
            CompleteTripDto, CreateTripDto, TripDto, TripFilterDto, TripListPayloadDto,
            TripPayloadDto, UpdateTripDto,
        },
        user::{CreateUserDto, UpdateUserDto, UserDto},
    },
    server::{
        controller::{catalog, health, trip},
        error::error_response,
        middleware::exchange::observe_exchange,
        model::{location::Location, transporter::Transporter, user::User},
        state::AppState,
    },
};

/// Registers the bearer token scheme.
struct BearerAddon;

impl Modify for BearerAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi
            .components
            .get_or_insert_with(utoipa::openapi::Components::default);

        components.add_security_scheme(
            "bearer",
            SecurityScheme::Http(
                HttpBuilder::new()
                    .scheme(HttpAuthScheme::Bearer)
                    .bearer_format("JWT")
                    .build(),
            ),
        );
    }
}

/// OpenAPI document served by Swagger UI at `/api/docs`.
///
/// Catalog routes are generic over the record type and are not listed as paths; their
/// request and response schemas are registered so clients can still generate types.
#[derive(OpenApi)]
#[openapi(
    modifiers(&BearerAddon),
    info(
        title = "Tripboard API",
        description = "Trip tracking with transporter, user, location and app version catalogs."
    ),
    paths(
        health::health,
        trip::create_trip,
        trip::list_trips,
        trip::get_trip_by_slno,
        trip::get_trip_by_id,
        trip::update_trip,
        trip::update_trip_status,
        trip::delete_trip,
        trip::download_trips,
    ),
    components(schemas(
        ErrorDto,
        ErrorDataDto,
        MessageDto,
        TripDto,
        CreateTripDto,
        UpdateTripDto,
        CompleteTripDto,
        TripFilterDto,
        TripPayloadDto,
        TripListPayloadDto,
        TransporterDto,
        CreateTransporterDto,
        UpdateTransporterDto,
        UserDto,
        CreateUserDto,
        UpdateUserDto,
        LocationDto,
        CreateLocationDto,
        UpdateLocationDto,
        AppVersionDto,
        CreateAppVersionDto,
        UpdateAppVersionDto,
    )),
    security(("bearer" = [])),
    tags(
        (name = "trip", description = "Trip lifecycle and export"),
        (name = "health", description = "Liveness check")
    )
)]
pub struct ApiDoc;

/// API routes, still expecting the application state.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health))
        .nest("/trip", trip::routes())
        .nest("/transporter", catalog::routes::<Transporter>())
        .nest("/user", catalog::routes::<User>())
        .nest("/location", catalog::routes::<Location>())
        .nest("/app-version", catalog::app_version_routes())
}

/// Builds the complete application.
///
/// # Arguments
/// - `state` - Shared application state
/// - `cors` - CORS policy
/// - `uploads` - Directory served under `/uploads`
pub fn app(state: AppState, cors: CorsLayer, uploads: impl AsRef<Path>) -> Router {
    router()
        .nest_service("/uploads", ServeDir::new(uploads))
        .merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", ApiDoc::openapi()))
        .layer(CatchPanicLayer::custom(panic_response))
        .layer(from_fn_with_state(state.clone(), observe_exchange))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

fn panic_response(panic: Box<dyn Any + Send + 'static>) -> Response {
    let detail = panic
        .downcast_ref::<String>()
        .cloned()
        .or_else(|| panic.downcast_ref::<&str>().map(|s| s.to_string()))
        .unwrap_or_default();

    tracing::error!("Handler panicked: {}", detail);

    error_response(
        StatusCode::INTERNAL_SERVER_ERROR,
        "UNKNOWN_ERROR",
        "Unknown error occurred",
        detail,
    )
}
