//! Configuration constants.
//!
//! This module defines the fixed operational parameters of the service.

use std::time::Duration;

/// Build version reported by the root endpoint.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default HTTP listen port (`PORT`).
pub const DEFAULT_PORT: u16 = 3000;

/// PostgreSQL port. Not configurable.
pub const DB_PORT: u16 = 5432;

/// Maximum number of records returned by `/v1/history`.
pub const HISTORY_LIMIT: i64 = 20;

/// Environment variable whose presence marks a Kubernetes deployment.
pub const KUBERNETES_MARKER_ENV: &str = "KUBERNETES_SERVICE_HOST";

/// Content type of the Prometheus text exposition format.
pub const METRICS_CONTENT_TYPE: &str = "text/plain; version=0.0.4; charset=utf-8";

/// How often the scheduler lag sampler wakes up.
pub const SCHEDULER_LAG_SAMPLE_INTERVAL: Duration = Duration::from_millis(500);

/// Default bound on connection draining and pool close during shutdown.
pub const DEFAULT_SHUTDOWN_TIMEOUT_SECS: u64 = 10;

/// Delay between attempts to create the `queries` table while the database is unreachable.
pub const SCHEMA_RETRY_INTERVAL: Duration = Duration::from_secs(5);
