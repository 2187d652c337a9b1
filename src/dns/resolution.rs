//! IPv4 address resolution.

use std::net::IpAddr;
use std::sync::Arc;

use async_trait::async_trait;
use hickory_resolver::error::{ResolveError, ResolveErrorKind};
use hickory_resolver::proto::op::ResponseCode;
use hickory_resolver::TokioAsyncResolver;

use crate::error_handling::LookupError;

/// Resolves hostnames to IPv4 addresses.
///
/// Implementations make a single best-effort attempt per call and return the
/// addresses in the order the underlying resolver supplied them.
#[async_trait]
pub trait DomainResolver: Send + Sync {
    /// Resolves `domain` to zero or more dotted-quad IPv4 addresses.
    ///
    /// # Errors
    ///
    /// - [`LookupError::NotFound`] if the name does not exist
    /// - [`LookupError::Resolver`] for any other resolution failure
    async fn resolve(&self, domain: &str) -> Result<Vec<String>, LookupError>;
}

/// [`DomainResolver`] backed by `hickory-resolver`.
#[derive(Clone)]
pub struct HickoryResolver {
    resolver: Arc<TokioAsyncResolver>,
}

impl HickoryResolver {
    pub fn new(resolver: Arc<TokioAsyncResolver>) -> Self {
        Self { resolver }
    }
}

#[async_trait]
impl DomainResolver for HickoryResolver {
    async fn resolve(&self, domain: &str) -> Result<Vec<String>, LookupError> {
        match self.resolver.lookup_ip(domain).await {
            Ok(response) => Ok(response
                .iter()
                .filter_map(|ip| match ip {
                    IpAddr::V4(v4) => Some(v4.to_string()),
                    IpAddr::V6(_) => None,
                })
                .collect()),
            Err(e) => {
                log::debug!("DNS lookup for {domain} failed: {e}");
                classify_resolve_error(&e)
            }
        }
    }
}

/// Maps a `hickory` resolution error onto the lookup outcome taxonomy.
///
/// NXDOMAIN is the only not-found signal. A NOERROR answer without records
/// means the name exists but has no IPv4 addresses, which is reported as an
/// empty success.
pub fn classify_resolve_error(err: &ResolveError) -> Result<Vec<String>, LookupError> {
    match err.kind() {
        ResolveErrorKind::NoRecordsFound { response_code, .. }
            if *response_code == ResponseCode::NXDomain =>
        {
            Err(LookupError::NotFound)
        }
        ResolveErrorKind::NoRecordsFound { response_code, .. }
            if *response_code == ResponseCode::NoError =>
        {
            Ok(Vec::new())
        }
        _ => Err(LookupError::Resolver(err.to_string())),
    }
}
