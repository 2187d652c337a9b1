//! IPv4 address format validation.
//!
//! The check is purely syntactic: four dot-separated groups of one to three
//! ASCII digits. Octet ranges are not checked, so `999.999.999.999` is
//! accepted.

use std::sync::LazyLock;

use regex::Regex;

const DOTTED_QUAD_PATTERN: &str = r"^[0-9]{1,3}\.[0-9]{1,3}\.[0-9]{1,3}\.[0-9]{1,3}$";

/// Compiles a constant regex pattern, panicking on failure.
///
/// Only used for patterns known at compile time; an invalid one is a
/// programming error surfaced by the tests below.
fn compile_regex_unsafe(pattern: &str, context: &str) -> Regex {
    Regex::new(pattern).unwrap_or_else(|e| {
        panic!("Failed to compile regex pattern '{pattern}' in {context}: {e}")
    })
}

static DOTTED_QUAD: LazyLock<Regex> =
    LazyLock::new(|| compile_regex_unsafe(DOTTED_QUAD_PATTERN, "DOTTED_QUAD"));

/// Returns `true` if `candidate` has the dotted-quad shape `d{1,3}.d{1,3}.d{1,3}.d{1,3}`.
///
/// # Examples
///
/// ```
/// use dns_toolbox::validation::is_valid_ipv4;
///
/// assert!(is_valid_ipv4("192.168.1.1"));
/// assert!(is_valid_ipv4("999.999.999.999"));
/// assert!(!is_valid_ipv4("not-an-ip"));
/// ```
pub fn is_valid_ipv4(candidate: &str) -> bool {
    DOTTED_QUAD.is_match(candidate)
}
