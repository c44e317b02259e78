//! Main orchestration of a filtering run.
//!
//! `DomainChecker` composes the normalized domain set with the concurrency
//! engine and turns the verdict stream into the existing-domain list plus
//! run statistics. Persisting the result is the caller's job; the checker
//! performs no file I/O.

use std::time::Instant;

use futures::stream::Stream;

use crate::engine;
use crate::resolver::DnsResolver;
use crate::types::{CheckConfig, Domain, DomainSet, Summary, Verdict};
use crate::Result;

/// Outcome of one completed run: the surviving domains and the statistics.
///
/// `existing` is unordered; sorting (for stable output files) is left to
/// the writer.
#[derive(Debug, Clone)]
pub struct RunReport {
    /// Domains whose verdict was positive, in completion order
    pub existing: Vec<Domain>,
    /// Counts and wall-clock timing for the run
    pub summary: Summary,
}

/// Domain checker that drives filtering runs against the system resolver.
///
/// # Example
///
/// ```rust,no_run
/// use domain_sift_lib::{CheckConfig, DomainChecker, DomainSet};
/// use std::time::Duration;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let config = CheckConfig::default()
///         .with_timeout(Duration::from_secs(3))
///         .with_max_workers(100);
///     let checker = DomainChecker::with_config(config)?;
///
///     let domains = DomainSet::from_lines(["example.com", "no-such.example"]);
///     let report = checker.run(&domains).await;
///     println!("{:?}", report.summary);
///     Ok(())
/// }
/// ```
pub struct DomainChecker {
    /// Validated configuration for this checker instance
    config: CheckConfig,
    /// System resolver shared by all lookups
    resolver: DnsResolver,
}

impl DomainChecker {
    /// Create a checker with the default configuration.
    pub fn new() -> Self {
        Self {
            config: CheckConfig::default(),
            resolver: DnsResolver::new(),
        }
    }

    /// Create a checker with a custom configuration.
    ///
    /// # Errors
    ///
    /// Returns a configuration error when the timeout is zero or
    /// `max_workers` falls outside [1, 200]. Validation happens here so no
    /// resolution work can start under an invalid configuration.
    pub fn with_config(config: CheckConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            resolver: DnsResolver::new(),
        })
    }

    /// The configuration this checker runs with.
    pub fn config(&self) -> &CheckConfig {
        &self.config
    }

    /// Run the full set and aggregate verdicts into a [`RunReport`].
    ///
    /// An empty set short-circuits to a zero-valued summary without touching
    /// the engine. Otherwise the call returns only once every domain has
    /// produced its verdict.
    pub async fn run(&self, domains: &DomainSet) -> RunReport {
        if domains.is_empty() {
            return RunReport {
                existing: Vec::new(),
                summary: Summary::default(),
            };
        }

        let start = Instant::now();
        let existing = engine::check_all(&self.resolver, domains, &self.config).await;
        let summary = Summary::new(domains.len(), existing.len(), start.elapsed());

        RunReport { existing, summary }
    }

    /// Stream verdicts as they complete, for callers that report progress.
    ///
    /// Yields exactly `domains.len()` items; aggregation is left to the
    /// consumer.
    pub fn run_stream<'a>(
        &'a self,
        domains: &'a DomainSet,
    ) -> impl Stream<Item = Verdict> + Unpin + 'a {
        engine::verdict_stream(&self.resolver, domains, &self.config)
    }
}

impl Default for DomainChecker {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[tokio::test]
    async fn test_empty_set_returns_zero_summary() {
        let checker = DomainChecker::new();
        let report = checker.run(&DomainSet::new()).await;

        assert!(report.existing.is_empty());
        assert_eq!(report.summary, Summary::default());
    }

    #[test]
    fn test_with_config_rejects_invalid() {
        assert!(DomainChecker::with_config(CheckConfig::default().with_max_workers(0)).is_err());
        assert!(DomainChecker::with_config(CheckConfig::default().with_max_workers(201)).is_err());
        assert!(
            DomainChecker::with_config(CheckConfig::default().with_timeout(Duration::ZERO))
                .is_err()
        );
    }

    #[test]
    fn test_with_config_accepts_valid() {
        let config = CheckConfig::default()
            .with_max_workers(200)
            .with_retry_count(0);
        let checker = DomainChecker::with_config(config).unwrap();
        assert_eq!(checker.config().max_workers, 200);
    }
}
