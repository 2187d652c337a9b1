//! Database connection pool management.
//!
//! The pool is created once at startup and shared by every request. It
//! connects lazily: building it never touches the network, and connectivity
//! problems surface per query as [`crate::error_handling::DatabaseError`].

use log::info;
use sqlx::postgres::{PgConnectOptions, PgPool, PgPoolOptions};

use crate::config::DbConfig;

/// Builds the PostgreSQL connection pool from the given settings.
pub fn init_db_pool(config: &DbConfig) -> PgPool {
    let mut options = PgConnectOptions::new()
        .host(&config.host)
        .port(config.port)
        .username(&config.user)
        .database(&config.database);
    if let Some(password) = &config.password {
        options = options.password(password);
    }

    info!(
        "Database pool configured for {}@{}:{}/{}",
        config.user, config.host, config.port, config.database
    );

    PgPoolOptions::new().connect_lazy_with(options)
}
