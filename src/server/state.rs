//! Application state shared across all request handlers.
//!
//! This module defines the `AppState` struct which holds all shared resources and
//! dependencies needed by the application. The state is initialized once during startup
//! and then cloned for each request handler through Axum's state extraction.
//!
//! The state includes:
//! - Database connection pool for data persistence
//! - Object storage backend for proof images
//! - Token verifier for bearer authentication
//! - Exchange observer notified of every request/response pair

use sea_orm::DatabaseConnection;
use std::sync::Arc;

use crate::server::{
    middleware::exchange::{ExchangeObserver, TracingObserver},
    storage::ObjectStorage,
    util::token::TokenVerifier,
};

/// Application state containing shared resources and dependencies.
///
/// All fields are cheap to clone: `DatabaseConnection` is a pool handle and the rest are
/// reference-counted.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,

    /// Backend uploaded images are written to.
    pub storage: Arc<dyn ObjectStorage>,

    /// Verifies bearer tokens and yields the caller id.
    pub tokens: Arc<TokenVerifier>,

    /// Receives every request/response pair.
    ///
    /// Defaults to [`TracingObserver`]; replace with `with_observer`.
    pub observer: Arc<dyn ExchangeObserver>,
}

impl AppState {
    /// Creates a new application state with the provided dependencies.
    ///
    /// # Arguments
    /// - `db` - Database connection pool
    /// - `storage` - Object storage backend
    /// - `tokens` - Bearer token verifier
    ///
    /// # Returns
    /// - `AppState` - Initialized application state ready for use
    pub fn new(
        db: DatabaseConnection,
        storage: Arc<dyn ObjectStorage>,
        tokens: TokenVerifier,
    ) -> Self {
        Self {
            db,
            storage,
            tokens: Arc::new(tokens),
            observer: Arc::new(TracingObserver),
        }
    }

    /// Replaces the exchange observer.
    pub fn with_observer(mut self, observer: Arc<dyn ExchangeObserver>) -> Self {
        self.observer = observer;
        self
    }
}
