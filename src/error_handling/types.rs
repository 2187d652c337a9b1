//! Error type definitions.

use log::SetLoggerError;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error")]
    LoggerError(#[from] SetLoggerError),

    /// Error binding the HTTP listener.
    #[error("Failed to bind HTTP listener to {addr}")]
    BindError {
        addr: String,
        #[source]
        source: std::io::Error,
    },
}

/// Error types for database operations.
#[derive(Error, Debug)]
pub enum DatabaseError {
    /// SQL execution, decoding or connectivity error (includes pool exhaustion).
    #[error("SQL error")]
    SqlError(#[from] sqlx::Error),
}

/// Outcome classes of a failed DNS lookup.
///
/// Resolver-internal error codes never leave the adapter; callers only see
/// one of these two kinds.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LookupError {
    /// The name does not exist (NXDOMAIN).
    #[error("Domain not found")]
    NotFound,

    /// Any other resolution failure (timeout, network, rejected input).
    #[error("DNS resolution failed: {0}")]
    Resolver(String),
}

/// Failure while rendering the metrics exposition.
#[derive(Error, Debug)]
pub enum MetricsError {
    #[error("Failed to render metrics: {0}")]
    Render(#[from] std::fmt::Error),
}
