mod model;
mod server;

use tokio::net::TcpListener;

use crate::server::{
    config::Config, error::AppError, router, startup, state::AppState, util::token::TokenVerifier,
};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    startup::init_tracing();

    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;
    let storage = startup::setup_storage(&config).await?;
    let cors = startup::cors_layer(&config)?;

    let state = AppState::new(db, storage, TokenVerifier::new(&config.jwt_secret));
    let app = router::app(state, cors, &config.storage_dir);

    let listener = TcpListener::bind(config.bind_address).await?;
    tracing::info!("Listening on {}", config.bind_address);

    axum::serve(listener, app)
        .with_graceful_shutdown(startup::shutdown_signal())
        .await?;

    Ok(())
}
