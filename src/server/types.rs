//! Server state and response bodies.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::dns::DomainResolver;
use crate::metrics::MetricsCollector;
use crate::storage::QueryStore;

/// Process-wide context shared by every handler.
///
/// Built once at startup; handlers never mutate it.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn QueryStore>,
    pub resolver: Arc<dyn DomainResolver>,
    pub metrics: Arc<MetricsCollector>,
    /// Whether the process runs under Kubernetes (fixed at startup)
    pub is_kubernetes: bool,
}

impl AppState {
    pub fn new(
        store: Arc<dyn QueryStore>,
        resolver: Arc<dyn DomainResolver>,
        metrics: Arc<MetricsCollector>,
        is_kubernetes: bool,
    ) -> Self {
        Self {
            store,
            resolver,
            metrics,
            is_kubernetes,
        }
    }
}

/// JSON response for `/`
#[derive(Debug, Serialize, Deserialize)]
pub struct RootResponse {
    pub version: String,
    /// Unix epoch seconds at request time
    pub date: i64,
    pub kubernetes: bool,
}

/// JSON response for `/v1/tools/validate`
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ValidateResponse {
    pub status: bool,
}
