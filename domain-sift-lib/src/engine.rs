//! Bounded-concurrency fan-out of resolution checks.
//!
//! The engine turns a [`DomainSet`] into a stream of [`Verdict`]s by pushing
//! every domain through [`check_exists`] with at most `max_workers` lookups
//! in flight at once. `buffer_unordered` is what makes both invariants hold:
//! the pool is bounded because it polls no more than `max_workers` futures,
//! and every submitted domain yields exactly one verdict because each future
//! resolves to one and the stream ends only when all of them have.
//!
//! Verdicts arrive in completion order, not submission order. Callers that
//! need progress accounting count items as they drain the stream; callers
//! that just want the final answer use [`check_all`].

use futures::stream::{Stream, StreamExt};

use crate::resolver::Resolve;
use crate::retry::check_exists;
use crate::types::{CheckConfig, Domain, DomainSet, Verdict};

/// Stream one verdict per domain, at most `cfg.max_workers` in flight.
///
/// Submission follows the set's first-occurrence order; completion order is
/// unconstrained. The caller is expected to have validated `cfg` already
/// (the orchestrator does).
pub fn verdict_stream<'a, R: Resolve + Sync>(
    resolver: &'a R,
    domains: &'a DomainSet,
    cfg: &'a CheckConfig,
) -> impl Stream<Item = Verdict> + Unpin + 'a {
    futures::stream::iter(domains.iter().cloned())
        .map(move |domain| check_exists(resolver, domain, cfg))
        .buffer_unordered(cfg.max_workers)
}

/// Check the whole set and collect the domains that exist.
///
/// Returns only after every submitted domain has produced its verdict; the
/// result is a subset of the input, in no particular order.
pub async fn check_all<R: Resolve + Sync>(
    resolver: &R,
    domains: &DomainSet,
    cfg: &CheckConfig,
) -> Vec<Domain> {
    let mut existing = Vec::new();
    let mut completed = 0usize;

    let mut stream = verdict_stream(resolver, domains, cfg);
    while let Some(verdict) = stream.next().await {
        completed += 1;
        if verdict.exists {
            existing.push(verdict.domain);
        }
    }

    debug_assert_eq!(completed, domains.len(), "one verdict per domain");
    existing
}
