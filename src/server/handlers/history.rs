//! Lookup history handler.

use axum::{extract::State, Json};

use super::super::types::AppState;
use crate::config::HISTORY_LIMIT;
use crate::error_handling::ApiError;
use crate::storage::QueryRecord;

/// `GET /v1/history` - up to 20 most recent lookups, newest first.
pub async fn history_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<QueryRecord>>, ApiError> {
    let records = state.store.list_recent(HISTORY_LIMIT).await?;
    Ok(Json(records))
}
