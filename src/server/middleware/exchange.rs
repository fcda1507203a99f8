//! Request/response exchange observation.
//!
//! Every request passes through [`observe_exchange`], which reports the request and its
//! response to the `ExchangeObserver` held in `AppState`. The default observer writes
//! structured `tracing` events; tests swap in a recording observer.

use std::time::{Duration, Instant};

use axum::{
    extract::{Request, State},
    http::{Method, StatusCode},
    middleware::Next,
    response::Response,
};

use crate::server::state::AppState;

/// One HTTP request as seen by observers.
#[derive(Debug, Clone, PartialEq)]
pub struct Exchange {
    pub method: Method,
    pub path: String,
}

/// Receives every request/response pair handled by the server.
pub trait ExchangeObserver: Send + Sync {
    fn on_request(&self, exchange: &Exchange);
    fn on_response(&self, exchange: &Exchange, status: StatusCode, elapsed: Duration);
}

/// Logs exchanges through `tracing`.
///
/// Server errors are logged at `warn`, everything else at `info`.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingObserver;

impl ExchangeObserver for TracingObserver {
    fn on_request(&self, exchange: &Exchange) {
        tracing::debug!(
            method = %exchange.method,
            path = %exchange.path,
            "request received"
        );
    }

    fn on_response(&self, exchange: &Exchange, status: StatusCode, elapsed: Duration) {
        let duration_ms = elapsed.as_millis() as u64;
        if status.is_server_error() {
            tracing::warn!(
                method = %exchange.method,
                path = %exchange.path,
                status = status.as_u16(),
                duration_ms,
                "request failed"
            );
        } else {
            tracing::info!(
                method = %exchange.method,
                path = %exchange.path,
                status = status.as_u16(),
                duration_ms,
                "request completed"
            );
        }
    }
}

/// Middleware reporting each exchange to the state's observer.
pub async fn observe_exchange(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    let exchange = Exchange {
        method: request.method().clone(),
        path: request.uri().path().to_string(),
    };
    let started = Instant::now();

    state.observer.on_request(&exchange);
    let response = next.run(request).await;
    state
        .observer
        .on_response(&exchange, response.status(), started.elapsed());

    response
}
