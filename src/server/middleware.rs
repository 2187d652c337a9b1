//! Request middleware: access logging and panic isolation.

use std::panic::AssertUnwindSafe;

use axum::{
    extract::Request,
    http::{Method, Uri},
    middleware::Next,
    response::{IntoResponse, Response},
};
use futures::FutureExt;

use crate::error_handling::ApiError;

/// Logs `METHOD URI STATUS` for every request.
///
/// The line is written once the handler has produced its response, so the
/// logged status is the one actually sent to the client.
pub async fn access_log(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let uri = request.uri().clone();

    let response = next.run(request).await;

    log::info!("{}", access_line(&method, &uri, &response));
    response
}

/// Formats the access log line for a finished response.
pub fn access_line(method: &Method, uri: &Uri, response: &Response) -> String {
    format!("{} {} {}", method, uri, response.status().as_u16())
}

/// Converts a handler panic into a 500 response.
pub async fn catch_panic(request: Request, next: Next) -> Response {
    match AssertUnwindSafe(next.run(request)).catch_unwind().await {
        Ok(response) => response,
        Err(payload) => {
            let detail = payload
                .downcast_ref::<&str>()
                .map(|s| (*s).to_string())
                .or_else(|| payload.downcast_ref::<String>().cloned())
                .unwrap_or_else(|| "unknown panic payload".to_string());
            ApiError::Internal(anyhow::anyhow!("request handler panicked: {detail}")).into_response()
        }
    }
}
