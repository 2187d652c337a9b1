//! Query history store.
//!
//! All statements bind caller-supplied values as parameters; no input is ever
//! interpolated into SQL text.

use async_trait::async_trait;
use sqlx::postgres::{PgPool, PgRow};
use sqlx::types::Json;
use sqlx::Row;

use super::models::{Address, QueryRecord};
use crate::error_handling::DatabaseError;

const INSERT_QUERY: &str =
    "INSERT INTO queries (domain, client_ip, created_at, addresses) VALUES ($1, $2, $3, $4)";

// id breaks created_at ties so equal-second lookups stay newest first
const SELECT_RECENT: &str = "SELECT domain, client_ip, created_at, addresses
     FROM queries
     ORDER BY created_at DESC, id DESC
     LIMIT $1";

/// Append-only store of lookup records.
#[async_trait]
pub trait QueryStore: Send + Sync {
    /// Appends one record.
    async fn insert(&self, record: &QueryRecord) -> Result<(), DatabaseError>;

    /// Returns at most `limit` records, newest `created_at` first.
    async fn list_recent(&self, limit: i64) -> Result<Vec<QueryRecord>, DatabaseError>;

    /// Releases the underlying connections, waiting for in-flight queries.
    async fn close(&self);
}

/// [`QueryStore`] backed by PostgreSQL.
#[derive(Clone)]
pub struct PgQueryStore {
    pool: PgPool,
}

impl PgQueryStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl QueryStore for PgQueryStore {
    async fn insert(&self, record: &QueryRecord) -> Result<(), DatabaseError> {
        sqlx::query(INSERT_QUERY)
            .bind(&record.domain)
            .bind(&record.client_ip)
            .bind(record.created_at)
            .bind(Json(&record.addresses))
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    async fn list_recent(&self, limit: i64) -> Result<Vec<QueryRecord>, DatabaseError> {
        let rows = sqlx::query(SELECT_RECENT)
            .bind(limit)
            .fetch_all(&self.pool)
            .await?;
        rows.iter().map(record_from_row).collect()
    }

    async fn close(&self) {
        self.pool.close().await;
    }
}

fn record_from_row(row: &PgRow) -> Result<QueryRecord, DatabaseError> {
    let Json(addresses): Json<Vec<Address>> = row.try_get("addresses")?;
    Ok(QueryRecord {
        domain: row.try_get("domain")?,
        client_ip: row.try_get("client_ip")?,
        created_at: row.try_get("created_at")?,
        addresses,
    })
}
