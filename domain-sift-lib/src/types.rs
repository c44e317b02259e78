//! Core data types for domain filtering.
//!
//! This module defines the main data structures used throughout the library:
//! normalized domains, the deduplicated domain set, run configuration, and
//! the per-domain and per-run result types.

use serde::Serialize;
use std::collections::HashSet;
use std::time::Duration;

use crate::error::DomainSiftError;

/// A normalized candidate hostname, the unit of work.
///
/// A `Domain` is only produced by [`crate::normalize`]: lower-cased, free of
/// scheme/`www.` prefixes and path/query suffixes, at most 253 characters,
/// and containing at least one `.`. It is immutable once constructed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct Domain(String);

impl Domain {
    /// Construct a domain from an already-normalized string.
    ///
    /// Internal only: callers outside the crate go through `normalize`,
    /// which is what upholds the invariants documented on this type.
    pub(crate) fn new(normalized: String) -> Self {
        Self(normalized)
    }

    /// The domain as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume the domain, returning the underlying string.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl std::fmt::Display for Domain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Domain {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// The boolean existence outcome for one domain.
///
/// The engine produces exactly one verdict per input domain, in completion
/// order (which is unrelated to submission order).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Verdict {
    /// The domain that was checked
    pub domain: Domain,
    /// Whether the domain resolved to at least one address
    pub exists: bool,
}

/// An ordered set of unique domains, insertion order = first occurrence.
///
/// Uniqueness is enforced here, at the normalization boundary, so the
/// concurrency engine never has to think about duplicates. The number of
/// skipped duplicates is retained for observability.
#[derive(Debug, Clone, Default)]
pub struct DomainSet {
    domains: Vec<Domain>,
    seen: HashSet<Domain>,
    duplicates_skipped: usize,
}

impl DomainSet {
    /// Create an empty domain set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a domain set from raw text lines.
    ///
    /// Each line goes through [`crate::normalize`]; empty lines, comments and
    /// invalid entries are dropped silently, duplicates are counted.
    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut set = Self::new();
        for line in lines {
            if let Some(domain) = crate::normalize(line.as_ref()) {
                set.insert(domain);
            }
        }
        set
    }

    /// Insert a domain, returning `true` if it was not already present.
    pub fn insert(&mut self, domain: Domain) -> bool {
        if self.seen.contains(&domain) {
            self.duplicates_skipped += 1;
            return false;
        }
        self.seen.insert(domain.clone());
        self.domains.push(domain);
        true
    }

    /// Number of unique domains in the set.
    pub fn len(&self) -> usize {
        self.domains.len()
    }

    /// Whether the set contains no domains.
    pub fn is_empty(&self) -> bool {
        self.domains.is_empty()
    }

    /// How many duplicate entries were skipped while building the set.
    pub fn duplicates_skipped(&self) -> usize {
        self.duplicates_skipped
    }

    /// Iterate over the domains in first-occurrence order.
    pub fn iter(&self) -> std::slice::Iter<'_, Domain> {
        self.domains.iter()
    }

    /// The domains as a slice, in first-occurrence order.
    pub fn as_slice(&self) -> &[Domain] {
        &self.domains
    }
}

impl<'a> IntoIterator for &'a DomainSet {
    type Item = &'a Domain;
    type IntoIter = std::slice::Iter<'a, Domain>;

    fn into_iter(self) -> Self::IntoIter {
        self.domains.iter()
    }
}

/// Configuration for one filtering run.
///
/// Immutable for the duration of a run; [`CheckConfig::validate`] is called
/// before any resolution work begins.
#[derive(Debug, Clone)]
pub struct CheckConfig {
    /// Timeout for each individual resolution attempt
    /// Default: 5 seconds
    pub timeout: Duration,

    /// Maximum number of concurrent lookups
    /// Default: 50, Range: 1-200
    pub max_workers: usize,

    /// Number of retries after a timed-out attempt (attempts = retries + 1)
    /// Default: 2
    pub retry_count: u32,

    /// Fixed pause between a timed-out attempt and the next retry
    /// Default: 500ms (not exponential, not jittered)
    pub retry_delay: Duration,
}

impl Default for CheckConfig {
    /// Create a sensible default configuration.
    ///
    /// These defaults are conservative enough for shared resolvers while
    /// still finishing large lists in reasonable time.
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(5),
            max_workers: 50,
            retry_count: 2,
            retry_delay: Duration::from_millis(500),
        }
    }
}

impl CheckConfig {
    /// Hard upper bound on concurrent lookups.
    pub const MAX_WORKERS: usize = 200;

    /// Set the per-attempt resolution timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the worker pool size.
    pub fn with_max_workers(mut self, max_workers: usize) -> Self {
        self.max_workers = max_workers;
        self
    }

    /// Set the number of retries for timed-out lookups.
    pub fn with_retry_count(mut self, retry_count: u32) -> Self {
        self.retry_count = retry_count;
        self
    }

    /// Set the pause between retries.
    pub fn with_retry_delay(mut self, retry_delay: Duration) -> Self {
        self.retry_delay = retry_delay;
        self
    }

    /// Validate the configuration before a run.
    ///
    /// Enforces `timeout > 0` and `1 <= max_workers <= 200`.
    pub fn validate(&self) -> Result<(), DomainSiftError> {
        if self.timeout.is_zero() {
            return Err(DomainSiftError::config("timeout must be positive"));
        }
        if self.max_workers == 0 || self.max_workers > Self::MAX_WORKERS {
            return Err(DomainSiftError::config(format!(
                "max_workers must be between 1 and {}, got {}",
                Self::MAX_WORKERS,
                self.max_workers
            )));
        }
        Ok(())
    }
}

/// Statistics for one completed run.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Summary {
    /// Total domains submitted to the engine
    pub checked: usize,

    /// Domains that resolved
    pub existing: usize,

    /// Domains that did not resolve
    pub missing: usize,

    /// Wall-clock duration of the run
    #[serde(skip)] // Don't serialize Duration directly
    pub elapsed: Duration,
}

impl Summary {
    /// Build a summary from the checked/existing counts and elapsed time.
    pub fn new(checked: usize, existing: usize, elapsed: Duration) -> Self {
        Self {
            checked,
            existing,
            missing: checked - existing,
            elapsed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_validate_defaults() {
        assert!(CheckConfig::default().validate().is_ok());
    }

    #[test]
    fn test_config_validate_zero_timeout() {
        let config = CheckConfig::default().with_timeout(Duration::ZERO);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_validate_worker_bounds() {
        assert!(CheckConfig::default().with_max_workers(0).validate().is_err());
        assert!(CheckConfig::default().with_max_workers(1).validate().is_ok());
        assert!(CheckConfig::default().with_max_workers(200).validate().is_ok());
        assert!(CheckConfig::default().with_max_workers(201).validate().is_err());
    }

    #[test]
    fn test_domain_set_preserves_first_occurrence_order() {
        let set = DomainSet::from_lines(["b.com", "a.com", "B.com", "c.com", "a.com"]);
        let order: Vec<&str> = set.iter().map(|d| d.as_str()).collect();
        assert_eq!(order, vec!["b.com", "a.com", "c.com"]);
        assert_eq!(set.duplicates_skipped(), 2);
    }

    #[test]
    fn test_summary_new_computes_missing() {
        let summary = Summary::new(10, 3, Duration::from_secs(1));
        assert_eq!(summary.missing, 7);
    }
}
