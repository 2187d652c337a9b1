//! dns_toolbox library: DNS lookup and IPv4 validation HTTP API
//!
//! This library provides a small HTTP service that resolves domains to IPv4
//! addresses, records every lookup in PostgreSQL, validates dotted-quad
//! strings and exposes health and Prometheus metrics endpoints.
//!
//! # Example
//!
//! ```no_run
//! use clap::Parser;
//! use dns_toolbox::{run_server, Config};
//!
//! # #[tokio::main]
//! # async fn main() -> anyhow::Result<()> {
//! let config = Config::parse_from([
//!     "dns_toolbox",
//!     "--db-user", "app",
//!     "--db-host", "localhost",
//!     "--db-name", "tools",
//! ]);
//! run_server(config).await?;
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! This library requires a Tokio runtime. Use `#[tokio::main]` in your application
//! or ensure you're calling library functions within an async context.

mod app;
pub mod config;
pub mod dns;
pub mod error_handling;
pub mod initialization;
pub mod metrics;
pub mod server;
pub mod storage;
pub mod validation;

// Re-export public API
pub use config::{Config, LogFormat, LogLevel};
pub use dns::{DomainResolver, HickoryResolver};
pub use error_handling::{ApiError, DatabaseError, LookupError};
pub use run::run_server;
pub use server::{build_router, AppState};
pub use storage::{Address, PgQueryStore, QueryRecord, QueryStore};

// Internal run module (process startup and shutdown)
mod run {
    use std::net::SocketAddr;
    use std::sync::Arc;

    use anyhow::{Context, Result};
    use log::info;
    use tokio_util::sync::CancellationToken;

    use crate::app::{shutdown_gracefully, wait_for_shutdown_signal};
    use crate::config::{
        detect_kubernetes, Config, SCHEDULER_LAG_SAMPLE_INTERVAL, SCHEMA_RETRY_INTERVAL,
    };
    use crate::dns::{DomainResolver, HickoryResolver};
    use crate::initialization::init_resolver;
    use crate::metrics::{spawn_lag_sampler, MetricsCollector};
    use crate::server::{bind_listener, build_router, serve, AppState};
    use crate::storage::{init_db_pool, spawn_schema_bootstrap, PgQueryStore, QueryStore};

    /// Runs the HTTP service until a termination signal arrives.
    ///
    /// Startup builds the lazily connecting database pool, creates the DNS
    /// resolver and metrics collector, then binds the listener. The database is
    /// not contacted before serving: the `queries` table is created by a
    /// background task that retries until the database is reachable, so
    /// `/health` answers even while the database is down.
    ///
    /// On SIGINT (or SIGTERM on unix) the listener stops, in-flight requests
    /// and the database pool are drained within the configured shutdown
    /// timeout, and the function returns `Ok(())`.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The HTTP listener cannot be bound
    /// - The HTTP server stops before a shutdown signal is received
    pub async fn run_server(config: Config) -> Result<()> {
        let shutdown = CancellationToken::new();

        let pool = init_db_pool(&config.db());
        let schema = spawn_schema_bootstrap(
            pool.clone(),
            SCHEMA_RETRY_INTERVAL,
            shutdown.child_token(),
        );
        let store: Arc<dyn QueryStore> = Arc::new(PgQueryStore::new(pool));

        let resolver: Arc<dyn DomainResolver> = Arc::new(HickoryResolver::new(init_resolver()));

        let metrics = Arc::new(MetricsCollector::new());
        let sampler = spawn_lag_sampler(
            metrics.scheduler_lag(),
            SCHEDULER_LAG_SAMPLE_INTERVAL,
            shutdown.child_token(),
        );

        let is_kubernetes = detect_kubernetes();
        if is_kubernetes {
            info!("Running under Kubernetes");
        }
        let state = AppState::new(Arc::clone(&store), resolver, metrics, is_kubernetes);

        let addr = SocketAddr::new(config.bind_address, config.port);
        let listener = bind_listener(addr)
            .await
            .context("Failed to start HTTP server")?;
        info!("Server listening on port {}", config.port);

        let mut server = tokio::spawn(serve(listener, build_router(state), shutdown.clone()));

        tokio::select! {
            result = &mut server => {
                shutdown.cancel();
                store.close().await;
                result
                    .context("HTTP server task failed")?
                    .context("HTTP server error")?;
                anyhow::bail!("HTTP server stopped unexpectedly");
            }
            signal = wait_for_shutdown_signal() => {
                info!("Received {signal}, shutting down...");
            }
        }

        shutdown_gracefully(
            shutdown,
            server,
            vec![sampler, schema],
            store.as_ref(),
            config.shutdown_timeout(),
        )
        .await;

        info!("Shutdown complete");
        Ok(())
    }
}
