//! Query history records.

use serde::{Deserialize, Serialize};

/// One resolved IPv4 address.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    pub ip: String,
}

/// One resolved DNS lookup, as persisted and as returned by the API.
///
/// Records are written once and never updated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryRecord {
    /// Queried hostname, as supplied by the caller
    pub domain: String,
    /// Caller's observed network address
    pub client_ip: String,
    /// Unix epoch seconds at resolution time
    pub created_at: i64,
    /// Resolved IPv4 addresses in resolver order (possibly empty)
    pub addresses: Vec<Address>,
}

impl QueryRecord {
    pub fn new(domain: String, client_ip: String, created_at: i64, ips: Vec<String>) -> Self {
        Self {
            domain,
            client_ip,
            created_at,
            addresses: ips.into_iter().map(|ip| Address { ip }).collect(),
        }
    }
}
