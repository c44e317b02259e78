//! Bounded retry around a single resolution.
//!
//! This is the error boundary of the whole system: whatever the resolver
//! does, the caller gets exactly one verdict back. Timeouts are retried a
//! fixed number of times with a short flat pause; everything else is final
//! on the first attempt.

use crate::resolver::{Resolution, Resolve};
use crate::types::{CheckConfig, Domain, Verdict};

/// Determine whether a domain exists, retrying timed-out lookups.
///
/// Attempts the resolver up to `retry_count + 1` times:
/// - `Resolved` returns an existing verdict immediately
/// - `NotFound` and `Error` return a non-existing verdict immediately,
///   without consuming retries
/// - `TimedOut` sleeps `retry_delay` and tries again; once retries are
///   exhausted the verdict is non-existing
///
/// This function never fails: all resolver outcomes, including unexpected
/// errors, fold into the boolean verdict.
pub async fn check_exists<R: Resolve>(resolver: &R, domain: Domain, cfg: &CheckConfig) -> Verdict {
    for attempt in 0..=cfg.retry_count {
        match resolver.resolve(&domain, cfg.timeout).await {
            Resolution::Resolved => {
                return Verdict {
                    domain,
                    exists: true,
                }
            }
            Resolution::NotFound => {
                return Verdict {
                    domain,
                    exists: false,
                }
            }
            Resolution::Error(message) => {
                tracing::debug!(domain = %domain, error = %message, "resolver error, treating as non-existent");
                return Verdict {
                    domain,
                    exists: false,
                };
            }
            Resolution::TimedOut => {
                if attempt < cfg.retry_count {
                    tokio::time::sleep(cfg.retry_delay).await;
                }
            }
        }
    }

    tracing::debug!(domain = %domain, attempts = cfg.retry_count + 1, "all resolution attempts timed out");
    Verdict {
        domain,
        exists: false,
    }
}
