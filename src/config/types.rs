//! Configuration types and CLI options.
//!
//! Every option can be supplied either as a command-line flag or through the
//! environment (optionally via a `.env` file loaded by the binary).

use std::net::IpAddr;
use std::time::Duration;

use clap::{Parser, ValueEnum};

use crate::config::constants::{
    DB_PORT, DEFAULT_PORT, DEFAULT_SHUTDOWN_TIMEOUT_SECS,
    KUBERNETES_MARKER_ENV,
};

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Service configuration.
///
/// # Examples
///
/// ```bash
/// DB_USER=app DB_HOST=localhost DB_NAME=tools dns_toolbox --port 8080
/// ```
#[derive(Debug, Clone, Parser)]
#[command(
    name = "dns_toolbox",
    version,
    about = "HTTP API for DNS lookups and IPv4 validation with query history."
)]
pub struct Config {
    /// HTTP listen port
    #[arg(long, env = "PORT", default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// Address to bind the HTTP listener to
    #[arg(long, env = "BIND_ADDRESS", default_value = "0.0.0.0")]
    pub bind_address: IpAddr,

    /// Database user
    #[arg(long, env = "DB_USER")]
    pub db_user: String,

    /// Database host
    #[arg(long, env = "DB_HOST")]
    pub db_host: String,

    /// Database name
    #[arg(long, env = "DB_NAME")]
    pub db_name: String,

    /// Database password
    #[arg(long, env = "DB_PASSWORD", hide_env_values = true)]
    pub db_password: Option<String>,

    /// Seconds allowed for in-flight requests and the pool to drain on shutdown
    #[arg(long, env = "SHUTDOWN_TIMEOUT_SECS", default_value_t = DEFAULT_SHUTDOWN_TIMEOUT_SECS)]
    pub shutdown_timeout_secs: u64,

    /// Log level: error|warn|info|debug|trace
    #[arg(long, env = "LOG_LEVEL", value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,

    /// Log format: plain|json
    #[arg(long, env = "LOG_FORMAT", value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,
}

impl Config {
    /// Database connection settings derived from this configuration.
    pub fn db(&self) -> DbConfig {
        DbConfig {
            user: self.db_user.clone(),
            host: self.db_host.clone(),
            database: self.db_name.clone(),
            password: self.db_password.clone(),
            port: DB_PORT,
        }
    }

    pub fn shutdown_timeout(&self) -> Duration {
        Duration::from_secs(self.shutdown_timeout_secs)
    }
}

/// PostgreSQL connection settings.
#[derive(Debug, Clone)]
pub struct DbConfig {
    pub user: String,
    pub host: String,
    pub database: String,
    pub password: Option<String>,
    pub port: u16,
}

/// Returns `true` when the process runs under Kubernetes.
///
/// Only the presence of the marker variable matters; its value is ignored.
pub fn detect_kubernetes() -> bool {
    std::env::var_os(KUBERNETES_MARKER_ENV).is_some()
}
