// Shared test helpers for driving the HTTP API.
//
// This module provides in-memory stand-ins for the query store and the DNS
// resolver, plus small request/response utilities used across test files.

use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::body::{Body, Bytes};
use axum::extract::connect_info::MockConnectInfo;
use axum::http::{header, Request, StatusCode};
use axum::response::Response;
use axum::Router;
use tower::ServiceExt;

use dns_toolbox::metrics::MetricsCollector;
use dns_toolbox::{build_router, AppState, DatabaseError, DomainResolver, LookupError, QueryRecord, QueryStore};

/// Peer address every test request appears to come from.
#[allow(dead_code)] // Used by other test files
pub fn client_addr() -> SocketAddr {
    SocketAddr::from(([203, 0, 113, 7], 54321))
}

/// Append-only in-memory store with switchable failure.
#[derive(Default)]
pub struct MemoryStore {
    records: Mutex<Vec<QueryRecord>>,
    failing: AtomicBool,
}

#[allow(dead_code)] // Used by other test files
impl MemoryStore {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn failing() -> Arc<Self> {
        let store = Self::default();
        store.failing.store(true, Ordering::SeqCst);
        Arc::new(store)
    }

    pub fn len(&self) -> usize {
        self.records.lock().unwrap().len()
    }

    pub fn push(&self, record: QueryRecord) {
        self.records.lock().unwrap().push(record);
    }

    fn check(&self) -> Result<(), DatabaseError> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(DatabaseError::SqlError(sqlx::Error::PoolTimedOut));
        }
        Ok(())
    }
}

#[async_trait]
impl QueryStore for MemoryStore {
    async fn insert(&self, record: &QueryRecord) -> Result<(), DatabaseError> {
        self.check()?;
        self.push(record.clone());
        Ok(())
    }

    async fn list_recent(&self, limit: i64) -> Result<Vec<QueryRecord>, DatabaseError> {
        self.check()?;
        // Newest insert first, then a stable sort keeps that order within a second
        let mut records: Vec<QueryRecord> =
            self.records.lock().unwrap().iter().rev().cloned().collect();
        records.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        records.truncate(usize::try_from(limit).unwrap_or(0));
        Ok(records)
    }

    async fn close(&self) {}
}

/// Resolver answering from a fixed table; unknown names are NXDOMAIN.
#[derive(Default)]
pub struct ScriptedResolver {
    answers: HashMap<String, Result<Vec<String>, LookupError>>,
    calls: AtomicUsize,
}

#[allow(dead_code)] // Used by other test files
impl ScriptedResolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn answer(mut self, domain: &str, ips: &[&str]) -> Self {
        self.answers.insert(
            domain.to_string(),
            Ok(ips.iter().map(|ip| ip.to_string()).collect()),
        );
        self
    }

    pub fn fail(mut self, domain: &str, err: LookupError) -> Self {
        self.answers.insert(domain.to_string(), Err(err));
        self
    }

    pub fn build(self) -> Arc<Self> {
        Arc::new(self)
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl DomainResolver for ScriptedResolver {
    async fn resolve(&self, domain: &str) -> Result<Vec<String>, LookupError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.answers
            .get(domain)
            .cloned()
            .unwrap_or(Err(LookupError::NotFound))
    }
}

/// Builds the full router around the given collaborators.
#[allow(dead_code)] // Used by other test files
pub fn test_app(store: Arc<dyn QueryStore>, resolver: Arc<dyn DomainResolver>) -> Router {
    test_app_with(store, resolver, false)
}

#[allow(dead_code)] // Used by other test files
pub fn test_app_with(
    store: Arc<dyn QueryStore>,
    resolver: Arc<dyn DomainResolver>,
    is_kubernetes: bool,
) -> Router {
    let state = AppState::new(
        store,
        resolver,
        Arc::new(MetricsCollector::new()),
        is_kubernetes,
    );
    build_router(state).layer(MockConnectInfo(client_addr()))
}

#[allow(dead_code)] // Used by other test files
pub async fn send(app: &Router, request: Request<Body>) -> Response {
    app.clone()
        .oneshot(request)
        .await
        .expect("router should not fail")
}

#[allow(dead_code)] // Used by other test files
pub async fn get(app: &Router, uri: &str) -> Response {
    send(
        app,
        Request::builder().uri(uri).body(Body::empty()).unwrap(),
    )
    .await
}

#[allow(dead_code)] // Used by other test files
pub async fn post_json(app: &Router, uri: &str, body: &str) -> Response {
    send(
        app,
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
    )
    .await
}

#[allow(dead_code)] // Used by other test files
pub async fn body_bytes(response: Response) -> Bytes {
    axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body should be readable")
}

/// Splits a response into its status and JSON body.
#[allow(dead_code)] // Used by other test files
pub async fn json_response(response: Response) -> (StatusCode, serde_json::Value) {
    let status = response.status();
    let body = body_bytes(response).await;
    let json = serde_json::from_slice(&body)
        .unwrap_or_else(|e| panic!("body is not JSON ({e}): {}", String::from_utf8_lossy(&body)));
    (status, json)
}
