//! Application configuration and constants.
//!
//! This module provides:
//! - Configuration constants (history limit, DB port, timeouts)
//! - CLI/environment option types and parsing
//! - Detection of the orchestration environment

mod constants;
mod types;

// Re-export all constants
pub use constants::*;
pub use types::{detect_kubernetes, Config, DbConfig, LogFormat, LogLevel};
