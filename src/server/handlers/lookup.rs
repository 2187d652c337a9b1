//! DNS lookup handler.

use std::net::SocketAddr;

use axum::{
    extract::{rejection::QueryRejection, ConnectInfo, Query, State},
    Json,
};
use serde::Deserialize;

use super::super::types::AppState;
use crate::error_handling::ApiError;
use crate::storage::QueryRecord;

#[derive(Debug, Deserialize)]
pub struct LookupParams {
    pub domain: Option<String>,
}

/// `GET /v1/tools/lookup?domain=...`
///
/// Resolves the domain, persists the lookup and returns the stored record.
/// The record is written before the response is sent; if the write fails the
/// whole request fails with 500 even though resolution succeeded.
pub async fn lookup_handler(
    State(state): State<AppState>,
    ConnectInfo(peer): ConnectInfo<SocketAddr>,
    params: Result<Query<LookupParams>, QueryRejection>,
) -> Result<Json<QueryRecord>, ApiError> {
    let Query(params) = params.map_err(|rejection| ApiError::Validation(rejection.body_text()))?;
    let domain = params
        .domain
        .filter(|domain| !domain.is_empty())
        .ok_or_else(|| ApiError::missing_parameter("domain"))?;

    let addresses = state.resolver.resolve(&domain).await?;

    let record = QueryRecord::new(
        domain,
        peer.ip().to_string(),
        chrono::Utc::now().timestamp(),
        addresses,
    );
    state.store.insert(&record).await?;

    log::debug!(
        "Resolved {} to {} address(es) for {}",
        record.domain,
        record.addresses.len(),
        record.client_ip
    );
    Ok(Json(record))
}
