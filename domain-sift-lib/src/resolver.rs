//! System DNS resolution for a single domain.
//!
//! This is the leaf of the whole pipeline: one address-resolution attempt
//! against the platform resolver, bounded by a timeout that is passed
//! explicitly per call. No process-wide resolver state is touched, so
//! concurrent lookups cannot interfere with each other.

use std::future::Future;
use std::io;
use std::time::Duration;

use crate::types::Domain;

/// Outcome of a single resolution attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// Resolution returned at least one address
    Resolved,

    /// The resolver authoritatively reports the name does not exist.
    /// Terminal, never retried.
    NotFound,

    /// The call did not complete within the timeout. Retryable.
    TimedOut,

    /// Any other resolver-level failure (malformed input, resolver
    /// unavailable). Treated as non-existence and not retried, but kept
    /// distinct from `NotFound` for diagnostics.
    Error(String),
}

/// A single-attempt address resolver.
///
/// The production implementation is [`DnsResolver`]; tests substitute
/// scripted resolvers to exercise the retry and concurrency layers without
/// the network.
pub trait Resolve {
    /// Perform one resolution attempt for `domain`, bounded by `timeout`.
    ///
    /// This never fails in the `Result` sense: every failure mode is one of
    /// the [`Resolution`] outcomes.
    fn resolve(
        &self,
        domain: &Domain,
        timeout: Duration,
    ) -> impl Future<Output = Resolution> + Send;
}

/// Resolver backed by the platform's getaddrinfo (A/AAAA lookup semantics).
#[derive(Debug, Clone, Copy, Default)]
pub struct DnsResolver;

impl DnsResolver {
    /// Create a new system resolver.
    pub fn new() -> Self {
        Self
    }
}

impl Resolve for DnsResolver {
    async fn resolve(&self, domain: &Domain, timeout: Duration) -> Resolution {
        // lookup_host wants a host:port pair; the port is irrelevant here
        let target = format!("{}:0", domain);

        match tokio::time::timeout(timeout, tokio::net::lookup_host(target)).await {
            Ok(Ok(mut addrs)) => {
                if addrs.next().is_some() {
                    Resolution::Resolved
                } else {
                    Resolution::NotFound
                }
            }
            Ok(Err(err)) => classify_lookup_error(err),
            Err(_) => Resolution::TimedOut,
        }
    }
}

/// Map a lookup error onto a resolution outcome.
///
/// getaddrinfo failures ("no such host" and friends) all surface as a
/// generic io::Error, so any ordinary lookup error means the name did not
/// resolve. Only malformed input is kept apart as `Error`.
fn classify_lookup_error(err: io::Error) -> Resolution {
    if err.kind() == io::ErrorKind::InvalidInput {
        Resolution::Error(err.to_string())
    } else {
        Resolution::NotFound
    }
}
