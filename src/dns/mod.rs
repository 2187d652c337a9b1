//! DNS resolution.
//!
//! This module provides the IPv4-only resolver adapter used by the lookup
//! endpoint. Resolution goes through `hickory-resolver` configured from the
//! system resolver settings; results are never cached.

mod resolution;

// Re-export public API
pub use resolution::{classify_resolve_error, DomainResolver, HickoryResolver};

#[cfg(test)]
mod tests;
