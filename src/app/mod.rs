//! Process lifecycle helpers.
//!
//! This module provides termination-signal handling and the bounded
//! graceful shutdown sequence used by [`crate::run_server`].

pub mod shutdown;

// Re-export public API
pub use shutdown::{shutdown_gracefully, wait_for_shutdown_signal};
