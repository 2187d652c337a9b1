//! Error handling.
//!
//! This module provides:
//! - Error type definitions for initialization, storage, DNS and metrics
//! - The HTTP-facing [`ApiError`] taxonomy and its response mapping
//!
//! Handler failures are translated into one of three client-visible classes:
//! - **Validation**: missing or malformed client input (400)
//! - **NotFound**: the queried domain does not resolve (404)
//! - **Internal**: everything else (500, details logged server-side only)

mod api;
mod types;

// Re-export public API
pub use api::{ApiError, MessageResponse};
pub use types::{DatabaseError, InitializationError, LookupError, MetricsError};
