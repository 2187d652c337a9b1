//! HTTP API server.
//!
//! Routes:
//! - `GET /` - build version, current time and orchestration flag
//! - `GET /v1/tools/lookup?domain=...` - resolve a domain and record the lookup
//! - `POST /v1/tools/validate` - check an IPv4 dotted-quad string
//! - `GET /v1/history` - the most recent lookups
//! - `GET /metrics` - Prometheus metrics
//! - `GET /health` - liveness probe, independent of the database

mod handlers;
mod middleware;
mod types;

use std::net::SocketAddr;

use axum::routing::{get, post};
use axum::Router;
use tokio::net::TcpListener;
use tokio_util::sync::CancellationToken;

use crate::error_handling::InitializationError;
use handlers::{
    health_handler, history_handler, lookup_handler, metrics_handler, root_handler,
    validate_handler,
};
pub use middleware::{access_line, access_log, catch_panic};
pub use types::{AppState, RootResponse, ValidateResponse};

/// Builds the application router with access logging and panic isolation.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(root_handler))
        .route("/v1/tools/lookup", get(lookup_handler))
        .route("/v1/tools/validate", post(validate_handler))
        .route("/v1/history", get(history_handler))
        .route("/metrics", get(metrics_handler))
        .route("/health", get(health_handler))
        .layer(axum::middleware::from_fn(catch_panic))
        .layer(axum::middleware::from_fn(access_log))
        .with_state(state)
}

/// Binds the HTTP listener.
pub async fn bind_listener(addr: SocketAddr) -> Result<TcpListener, InitializationError> {
    TcpListener::bind(addr)
        .await
        .map_err(|source| InitializationError::BindError {
            addr: addr.to_string(),
            source,
        })
}

/// Serves `router` until `shutdown` is cancelled and in-flight requests finish.
pub async fn serve(
    listener: TcpListener,
    router: Router,
    shutdown: CancellationToken,
) -> std::io::Result<()> {
    axum::serve(
        listener,
        router.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown.cancelled_owned())
    .await
}
