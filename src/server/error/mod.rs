//! Error types and HTTP response handling.
//!
//! This module provides the application's error hierarchy and conversion logic for
//! transforming errors into the error envelope. `AppError` is the top-level error type
//! that wraps domain-specific errors. Controllers attach the [`Operation`] they were
//! performing, producing an [`OperationError`] whose 500 responses carry an
//! operation-specific error code such as `CREATE_TRIP_ERROR`.

pub mod auth;
pub mod config;
pub mod internal;
pub mod storage;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use sea_orm::{DbErr, SqlErr};
use thiserror::Error;
use validator::ValidationErrors;

use crate::{
    model::api::{ErrorDataDto, ErrorDto},
    server::{
        error::{auth::AuthError, config::ConfigError, internal::InternalError, storage::StorageError},
        model::resource::Resource,
    },
};

/// Top-level application error type.
///
/// Client-caused failures (`NotFound`, `Duplicate`, `Validation`, `AuthErr`) render with
/// their own status and error code. Every other variant is an internal failure and renders
/// as 500.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Authentication error.
    ///
    /// Delegates to `AuthError::into_response()` for 401/403 mapping.
    #[error(transparent)]
    AuthErr(#[from] AuthError),

    /// Object storage failure that was not degraded by the caller.
    #[error(transparent)]
    StorageErr(#[from] StorageError),

    /// Unexpected internal state.
    #[error(transparent)]
    InternalErr(#[from] InternalError),

    /// Database operation error from SeaORM.
    #[error(transparent)]
    DbErr(#[from] DbErr),

    /// JSON serialization error while shaping a response payload.
    #[error(transparent)]
    SerializationErr(#[from] serde_json::Error),

    /// Spreadsheet writer error while building an export.
    #[error(transparent)]
    XlsxErr(#[from] rust_xlsxwriter::XlsxError),

    /// I/O error, e.g. binding the listener at startup.
    #[error(transparent)]
    IoErr(#[from] std::io::Error),

    /// Requested record is absent or soft-deleted.
    ///
    /// Results in 404 with `<ENTITY>_NOT_FOUND`.
    #[error("{} not found", .0.label())]
    NotFound(Resource),

    /// Another live record already holds the natural key.
    ///
    /// Results in 400 with the resource's `DUPLICATE_*` code.
    #[error("{}", .0.duplicate_message())]
    Duplicate(Resource),

    /// Request body or parameters failed validation.
    ///
    /// Results in 400 with `VALIDATION_ERROR`.
    ///
    /// # Fields
    /// - Description of what was invalid
    #[error("{0}")]
    Validation(String),
}

impl AppError {
    /// Maps a failed insert or update to `Duplicate` when it violated a unique index.
    ///
    /// # Arguments
    /// - `resource` - Resource whose natural key index was hit
    ///
    /// # Returns
    /// A closure suitable for `map_err` on repository write results.
    pub fn from_write(resource: Resource) -> impl FnOnce(AppError) -> AppError {
        move |err| match err {
            AppError::DbErr(db_err) if is_unique_violation(&db_err) => {
                AppError::Duplicate(resource)
            }
            other => other,
        }
    }

    /// Whether this error renders with its own client-facing status.
    fn is_client_error(&self) -> bool {
        matches!(
            self,
            Self::AuthErr(_) | Self::NotFound(_) | Self::Duplicate(_) | Self::Validation(_)
        )
    }
}

/// Request body rules failed; renders as 400 `VALIDATION_ERROR`.
impl From<ValidationErrors> for AppError {
    fn from(errors: ValidationErrors) -> Self {
        Self::Validation(errors.to_string())
    }
}

/// Returns true when the database rejected a write because of a unique constraint.
pub fn is_unique_violation(err: &DbErr) -> bool {
    matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_)))
}

/// Builds an error envelope response.
///
/// # Arguments
/// - `status` - HTTP status, echoed in the body
/// - `code` - Machine-readable error code
/// - `message` - Human-readable summary
/// - `meta` - Diagnostic detail placed in `errorData.errorMeta`
pub fn error_response(status: StatusCode, code: &str, message: &str, meta: String) -> Response {
    (
        status,
        Json(ErrorDto {
            status: status.as_u16(),
            error_code: code.to_string(),
            error_message: message.to_string(),
            error_data: ErrorDataDto { error_meta: meta },
        }),
    )
        .into_response()
}

/// Converts application errors into HTTP responses.
///
/// Used where no operation context exists, e.g. extractor rejections. Internal failures
/// render as `UNKNOWN_ERROR`.
///
/// # Returns
/// - 400 Bad Request - For `Duplicate` and `Validation`
/// - 404 Not Found - For `NotFound`
/// - 401/403 - For `AuthErr`, delegated to `AuthError::into_response()`
/// - 500 Internal Server Error - For all other error types
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            Self::AuthErr(err) => err.into_response(),
            Self::NotFound(resource) => error_response(
                StatusCode::NOT_FOUND,
                &resource.not_found_code(),
                &format!("{} not found", resource.label()),
                format!("{} not found", resource.label()),
            ),
            Self::Duplicate(resource) => error_response(
                StatusCode::BAD_REQUEST,
                resource.duplicate_code(),
                resource.duplicate_message(),
                resource.duplicate_message().to_string(),
            ),
            Self::Validation(detail) => error_response(
                StatusCode::BAD_REQUEST,
                "VALIDATION_ERROR",
                "Invalid request",
                detail,
            ),
            err => {
                tracing::error!("Unhandled error: {}", err);

                error_response(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "UNKNOWN_ERROR",
                    "Unknown error occurred",
                    err.to_string(),
                )
            }
        }
    }
}

/// What a controller was doing when an error happened.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Create,
    Fetch,
    FetchAll,
    FetchLatest,
    Update,
    Delete,
    Download,
}

/// An action applied to a resource, naming the 500 error code and message.
///
/// # Example
///
/// ```rust,ignore
/// let op = Operation::new(Action::Create, Resource::Trip);
/// assert_eq!(op.code(), "CREATE_TRIP_ERROR");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Operation {
    pub action: Action,
    pub resource: Resource,
}

impl Operation {
    pub const fn new(action: Action, resource: Resource) -> Self {
        Self { action, resource }
    }

    /// Error code used when the operation fails internally.
    pub fn code(&self) -> String {
        let entity = self.resource.code_name();
        match self.action {
            Action::Create => format!("CREATE_{}_ERROR", entity),
            Action::Fetch => format!("FETCH_{}_ERROR", entity),
            Action::FetchAll => format!("FETCH_{}S_ERROR", entity),
            Action::FetchLatest => format!("FETCH_LATEST_{}_ERROR", entity),
            Action::Update => format!("UPDATE_{}_ERROR", entity),
            Action::Delete => format!("DELETE_{}_ERROR", entity),
            Action::Download => format!("DOWNLOAD_{}S_ERROR", entity),
        }
    }

    /// Human-readable message used when the operation fails internally.
    pub fn message(&self) -> String {
        let noun = self.resource.noun();
        match self.action {
            Action::Create => format!("Error creating {}", noun),
            Action::Fetch => format!("Error fetching {}", noun),
            Action::FetchAll => format!("Error fetching {}s", noun),
            Action::FetchLatest => format!("Error fetching latest {}", noun),
            Action::Update => format!("Error updating {}", noun),
            Action::Delete => format!("Error deleting {}", noun),
            Action::Download => format!("Error downloading {}s", noun),
        }
    }
}

/// An `AppError` tagged with the operation that produced it.
#[derive(Debug)]
pub struct OperationError {
    pub operation: Operation,
    pub source: AppError,
}

/// Renders client errors as-is and internal failures with the operation's error code.
impl IntoResponse for OperationError {
    fn into_response(self) -> Response {
        if self.source.is_client_error() {
            return self.source.into_response();
        }

        let code = self.operation.code();
        tracing::error!("{} failed: {}", code, self.source);

        error_response(
            StatusCode::INTERNAL_SERVER_ERROR,
            &code,
            &self.operation.message(),
            self.source.to_string(),
        )
    }
}

/// Attaches an [`Operation`] to a failed result.
pub trait During<T> {
    fn during(self, operation: Operation) -> Result<T, OperationError>;
}

impl<T> During<T> for Result<T, AppError> {
    fn during(self, operation: Operation) -> Result<T, OperationError> {
        self.map_err(|source| OperationError { operation, source })
    }
}
