//! DNS module tests.

use super::*;
use crate::error_handling::LookupError;
use hickory_resolver::config::{ResolverConfig, ResolverOpts};
use hickory_resolver::error::{ResolveError, ResolveErrorKind};
use hickory_resolver::proto::op::{Query, ResponseCode};
use hickory_resolver::proto::rr::{Name, RecordType};
use std::sync::Arc;
use std::time::Duration;

/// Creates a test DNS resolver with short timeouts for faster test execution.
fn create_test_resolver() -> HickoryResolver {
    let mut opts = ResolverOpts::default();
    opts.timeout = Duration::from_secs(5);
    opts.attempts = 1;
    opts.ndots = 0;
    opts.cache_size = 0;
    opts.ip_strategy = hickory_resolver::config::LookupIpStrategy::Ipv4Only;

    HickoryResolver::new(Arc::new(hickory_resolver::TokioAsyncResolver::tokio(
        ResolverConfig::default(),
        opts,
    )))
}

fn no_records(response_code: ResponseCode) -> ResolveError {
    let name = Name::from_ascii("missing.example.").expect("valid test name");
    ResolveError::from(ResolveErrorKind::NoRecordsFound {
        query: Box::new(Query::query(name, RecordType::A)),
        soa: None,
        negative_ttl: None,
        response_code,
        trusted: true,
    })
}

#[test]
fn test_nxdomain_is_not_found() {
    let result = classify_resolve_error(&no_records(ResponseCode::NXDomain));
    assert_eq!(result, Err(LookupError::NotFound));
}

#[test]
fn test_nodata_is_empty_success() {
    // Name exists but has no A records
    let result = classify_resolve_error(&no_records(ResponseCode::NoError));
    assert_eq!(result, Ok(Vec::new()));
}

#[test]
fn test_servfail_is_resolver_error() {
    let result = classify_resolve_error(&no_records(ResponseCode::ServFail));
    assert!(matches!(result, Err(LookupError::Resolver(_))));
}

#[test]
fn test_other_errors_are_resolver_errors() {
    let err = ResolveError::from("request timed out");
    match classify_resolve_error(&err) {
        Err(LookupError::Resolver(msg)) => assert!(msg.contains("request timed out")),
        other => panic!("expected resolver error, got {other:?}"),
    }
}

#[tokio::test]
#[ignore] // Requires network access: cargo test -- --ignored
async fn test_resolve_example_com_returns_ipv4_only() {
    let resolver = create_test_resolver();
    let addresses = resolver
        .resolve("example.com")
        .await
        .expect("example.com should resolve");
    assert!(!addresses.is_empty());
    for ip in &addresses {
        assert!(ip.parse::<std::net::Ipv4Addr>().is_ok(), "{ip} is not IPv4");
    }
}

#[tokio::test]
#[ignore] // Requires network access: cargo test -- --ignored
async fn test_resolve_invalid_tld_is_not_found() {
    let resolver = create_test_resolver();
    let result = resolver
        .resolve("definitely-invalid.invalid-tld-xyz")
        .await;
    assert_eq!(result, Err(LookupError::NotFound));
}
