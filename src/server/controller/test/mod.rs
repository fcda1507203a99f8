//! HTTP tests driving the full application router.

use std::{
    sync::{Arc, Mutex},
    time::Duration,
};

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use sea_orm::DatabaseConnection;
use serde_json::{json, Value};
use test_utils::{builder::TestBuilder, factory};
use tower::ServiceExt;
use tower_http::cors::CorsLayer;

use crate::server::{
    middleware::exchange::{Exchange, ExchangeObserver},
    router,
    state::AppState,
    storage::memory::MemoryStorage,
    util::token::{Claims, TokenVerifier},
};


const SECRET: &str = "controller-test-secret";

/// Records the path and status of every completed exchange.
#[derive(Default)]
struct RecordingObserver {
    responses: Mutex<Vec<(String, u16)>>,
}

impl RecordingObserver {
    fn responses(&self) -> Vec<(String, u16)> {
        self.responses.lock().unwrap().clone()
    }
}

impl ExchangeObserver for RecordingObserver {
    fn on_request(&self, _exchange: &Exchange) {}

    fn on_response(&self, exchange: &Exchange, status: StatusCode, _elapsed: Duration) {
        self.responses
            .lock()
            .unwrap()
            .push((exchange.path.clone(), status.as_u16()));
    }
}

struct TestApp {
    router: Router,
    storage: Arc<MemoryStorage>,
    observer: Arc<RecordingObserver>,
}

impl TestApp {
    fn new(db: &DatabaseConnection) -> Self {
        let storage = Arc::new(MemoryStorage::new());
        let observer = Arc::new(RecordingObserver::default());
        let state = AppState::new(db.clone(), storage.clone(), TokenVerifier::new(SECRET))
            .with_observer(observer.clone());

        Self {
            router: router::app(state, CorsLayer::permissive(), "uploads"),
            storage,
            observer,
        }
    }

    /// Sends a request and returns the status with the body parsed as JSON.
    async fn send(&self, request: Request<Body>) -> (StatusCode, Value) {
        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();

        (status, serde_json::from_slice(&bytes).unwrap_or(Value::Null))
    }
}

fn token_for(id: &str) -> String {
    TokenVerifier::new(SECRET)
        .sign(&Claims {
            id: id.to_string(),
            exp: None,
        })
        .unwrap()
}

fn request(method: Method, uri: &str, token: Option<&str>, body: Option<Value>) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);

    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
    }

    match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}

fn post(uri: &str, token: Option<&str>, body: Value) -> Request<Body> {
    request(Method::POST, uri, token, Some(body))
}

fn get(uri: &str, token: Option<&str>) -> Request<Body> {
    request(Method::GET, uri, token, None)
}
