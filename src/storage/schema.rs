//! Schema bootstrap for the `queries` table.
//!
//! The table is created in the background so the listener binds (and
//! `/health` answers) even while the database is still coming up. Until the
//! table exists, requests that touch it fail with 500.

use std::time::Duration;

use log::{info, warn};
use sqlx::postgres::PgPool;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

use crate::error_handling::DatabaseError;

pub(crate) const CREATE_QUERIES_TABLE: &str = "CREATE TABLE IF NOT EXISTS queries (
    id BIGSERIAL PRIMARY KEY,
    domain TEXT NOT NULL,
    client_ip TEXT NOT NULL,
    created_at BIGINT NOT NULL,
    addresses JSONB NOT NULL
)";

/// Creates the `queries` table if it does not exist yet.
pub async fn ensure_schema(pool: &PgPool) -> Result<(), DatabaseError> {
    sqlx::query(CREATE_QUERIES_TABLE).execute(pool).await?;
    Ok(())
}

/// Keeps calling [`ensure_schema`] until it succeeds, the pool is closed or
/// `cancel` fires, waiting `retry_interval` between attempts.
pub fn spawn_schema_bootstrap(
    pool: PgPool,
    retry_interval: Duration,
    cancel: CancellationToken,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        loop {
            let attempt = tokio::select! {
                result = ensure_schema(&pool) => result,
                _ = cancel.cancelled() => return,
            };
            match attempt {
                Ok(()) => {
                    info!("Database schema ready");
                    return;
                }
                Err(DatabaseError::SqlError(sqlx::Error::PoolClosed)) => {
                    warn!("Database pool closed before the schema was prepared");
                    return;
                }
                Err(e) => {
                    warn!(
                        "Failed to prepare database schema, retrying in {}s: {e:#}",
                        retry_interval.as_secs()
                    );
                }
            }
            tokio::select! {
                _ = tokio::time::sleep(retry_interval) => {}
                _ = cancel.cancelled() => return,
            }
        }
    })
}
