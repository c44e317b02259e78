// domain-sift-lib/tests/integration.rs

//! Integration tests for domain-sift-lib exports and core behavior.

use std::time::Duration;

use domain_sift_lib::{
    check_all, normalize, verdict_stream, CheckConfig, Domain, DomainChecker, DomainSet,
    Resolution, Resolve,
};
use futures::StreamExt;

/// Resolver that answers from a fixed table; everything else is NotFound.
struct TableResolver {
    existing: Vec<&'static str>,
}

impl Resolve for TableResolver {
    async fn resolve(&self, domain: &Domain, _timeout: Duration) -> Resolution {
        if self.existing.contains(&domain.as_str()) {
            Resolution::Resolved
        } else {
            Resolution::NotFound
        }
    }
}

#[test]
fn test_library_exports_work() {
    // Public API surface used by the CLI must stay accessible
    let _ = DomainChecker::new();
    let _ = CheckConfig::default();
    let _ = normalize("example.com");
    assert!(!domain_sift_lib::VERSION.is_empty());
}

/// The headline scenario: mixed-quality input lines reduce to two unique
/// domains, of which only google.com exists.
#[tokio::test]
async fn test_mixed_input_scenario() {
    let lines = [
        "google.com",
        "WWW.Google.com",
        "",
        "# comment",
        "nonexistent-domain-abc123xyz.invalid",
    ];
    let domains = DomainSet::from_lines(lines);

    let expected: Vec<&str> = vec!["google.com", "nonexistent-domain-abc123xyz.invalid"];
    let actual: Vec<&str> = domains.iter().map(|d| d.as_str()).collect();
    assert_eq!(actual, expected);
    assert_eq!(domains.duplicates_skipped(), 1);

    let resolver = TableResolver {
        existing: vec!["google.com"],
    };
    let cfg = CheckConfig::default().with_retry_count(1);

    let existing = check_all(&resolver, &domains, &cfg).await;
    let names: Vec<&str> = existing.iter().map(|d| d.as_str()).collect();
    assert_eq!(names, vec!["google.com"]);
}

/// Count invariant observed from the outside: the stream yields exactly one
/// verdict per input domain, whatever the worker count.
#[tokio::test]
async fn test_stream_yields_one_verdict_per_domain() {
    let domains = DomainSet::from_lines((0..37).map(|i| format!("host-{}.test", i)));
    let resolver = TableResolver {
        existing: vec!["host-0.test", "host-9.test"],
    };

    for workers in [1, 4, 100] {
        let cfg = CheckConfig::default().with_max_workers(workers);
        let verdicts: Vec<_> = verdict_stream(&resolver, &domains, &cfg).collect().await;

        assert_eq!(verdicts.len(), domains.len());
        assert_eq!(verdicts.iter().filter(|v| v.exists).count(), 2);
    }
}

#[tokio::test]
async fn test_empty_set_short_circuits() {
    let checker = DomainChecker::new();
    let report = checker.run(&DomainSet::new()).await;

    assert_eq!(report.summary.checked, 0);
    assert_eq!(report.summary.existing, 0);
    assert_eq!(report.summary.missing, 0);
    assert!(report.existing.is_empty());
}

#[test]
fn test_invalid_configs_rejected_before_any_run() {
    for config in [
        CheckConfig::default().with_max_workers(0),
        CheckConfig::default().with_max_workers(201),
        CheckConfig::default().with_timeout(Duration::ZERO),
    ] {
        assert!(DomainChecker::with_config(config).is_err());
    }
}

/// Live smoke test against the system resolver, network dependent.
#[tokio::test]
#[ignore]
async fn test_live_run_filters_real_domains() {
    let domains = DomainSet::from_lines(["google.com", "nonexistent-domain-abc123xyz.invalid"]);
    let checker = DomainChecker::with_config(
        CheckConfig::default()
            .with_timeout(Duration::from_secs(5))
            .with_retry_count(1),
    )
    .unwrap();

    let report = checker.run(&domains).await;
    let names: Vec<&str> = report.existing.iter().map(|d| d.as_str()).collect();

    assert_eq!(report.summary.checked, 2);
    assert_eq!(names, vec!["google.com"]);
}
