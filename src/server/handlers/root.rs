//! Service identity handler.

use axum::{extract::State, Json};

use super::super::types::{AppState, RootResponse};
use crate::config::VERSION;

/// `GET /` - build version, current epoch seconds and the Kubernetes flag.
pub async fn root_handler(State(state): State<AppState>) -> Json<RootResponse> {
    Json(RootResponse {
        version: VERSION.to_string(),
        date: chrono::Utc::now().timestamp(),
        kubernetes: state.is_kubernetes,
    })
}
