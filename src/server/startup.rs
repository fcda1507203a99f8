use std::sync::Arc;

use tower_http::cors::{Any, CorsLayer};
use tracing_subscriber::EnvFilter;

use crate::server::{
    config::Config,
    error::{config::ConfigError, AppError},
    storage::filesystem::FilesystemStorage,
};

const DEFAULT_LOG_FILTER: &str = "info,sqlx=warn";

/// Installs the global `tracing` subscriber.
///
/// Honors `RUST_LOG` and falls back to `info,sqlx=warn`.
pub fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// Connects to the Sqlite database and runs pending migrations.
///
/// Establishes a connection pool to the Sqlite database using the connection string from
/// configuration, then automatically runs all pending SeaORM migrations to ensure the database
/// schema is up-to-date. This function must complete successfully before the application can
/// access the database.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL and pool size
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<sea_orm::DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.max_connections(config.database_max_connections)
        .sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    tracing::info!("Database ready, migrations applied");

    Ok(db)
}

/// Prepares the filesystem object storage backend.
///
/// # Returns
/// - `Ok(Arc<FilesystemStorage>)` - Backend with its root directory created
/// - `Err(AppError)` - Storage directory could not be created
pub async fn setup_storage(config: &Config) -> Result<Arc<FilesystemStorage>, AppError> {
    let storage = FilesystemStorage::new(&config.storage_dir, config.storage_public_url.clone());
    storage.ensure_root().await?;

    tracing::info!(
        dir = %config.storage_dir.display(),
        public_url = %config.storage_public_url,
        "Object storage ready"
    );

    Ok(Arc::new(storage))
}

/// Builds the CORS layer from configuration.
///
/// # Returns
/// - `Ok(CorsLayer)` - Restricted to the configured origin, or open when none is set
/// - `Err(AppError)` - Configured origin is not a valid header value
pub fn cors_layer(config: &Config) -> Result<CorsLayer, AppError> {
    let layer = CorsLayer::new().allow_methods(Any).allow_headers(Any);

    match &config.cors_allowed_origin {
        Some(origin) => {
            let origin = origin.parse::<axum::http::HeaderValue>().map_err(|e| {
                ConfigError::InvalidEnvVar {
                    name: "CORS_ALLOWED_ORIGIN".to_string(),
                    reason: e.to_string(),
                }
            })?;
            Ok(layer.allow_origin(origin))
        }
        None => Ok(layer.allow_origin(Any)),
    }
}

/// Resolves when the process receives Ctrl-C.
pub async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }

    tracing::info!("Shutdown signal received");
}
