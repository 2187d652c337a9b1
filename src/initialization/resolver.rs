//! DNS resolver initialization.

use std::sync::Arc;

use hickory_resolver::config::{LookupIpStrategy, ResolverConfig, ResolverOpts};
use hickory_resolver::TokioAsyncResolver;

/// Initializes the DNS resolver for hostname lookups.
///
/// Uses the system resolver configuration (`/etc/resolv.conf` on unix) so
/// lookups behave like the platform's own name resolution. If the system
/// configuration cannot be read, falls back to the library default
/// (Google public DNS) and logs a warning.
///
/// The resolver is restricted to IPv4, never caches answers and makes a
/// single attempt per query.
pub fn init_resolver() -> Arc<TokioAsyncResolver> {
    let (config, opts) = match hickory_resolver::system_conf::read_system_conf() {
        Ok(system) => system,
        Err(e) => {
            log::warn!("Failed to read system DNS configuration, using defaults: {e}");
            (ResolverConfig::default(), ResolverOpts::default())
        }
    };

    Arc::new(TokioAsyncResolver::tokio(config, lookup_opts(opts)))
}

fn lookup_opts(mut opts: ResolverOpts) -> ResolverOpts {
    opts.ip_strategy = LookupIpStrategy::Ipv4Only;
    opts.cache_size = 0;
    opts.attempts = 1;
    opts
}
