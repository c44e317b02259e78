//! Domain normalization.
//!
//! Raw input lines come in every shape people paste into text files:
//! mixed case, `https://` prefixes, trailing paths, comments. This module
//! cleans them into the canonical [`Domain`] form before anything touches
//! the resolver.

use crate::types::Domain;

/// Hostnames are capped at 253 characters on the wire.
const MAX_DOMAIN_LEN: usize = 253;

/// Prefixes stripped from raw entries, checked in this priority order.
/// Each prefix is removed at most once, never recursively, so
/// `https://www.example.com` loses both the scheme and the `www.`.
const STRIPPED_PREFIXES: [&str; 3] = ["http://", "https://", "www."];

/// Normalize a raw line into a [`Domain`], or reject it.
///
/// Rejection is a drop, not an error: empty lines, `#` comments, over-long
/// entries and dot-less strings all return `None`.
///
/// The cleanup steps, in order:
/// 1. trim surrounding whitespace, drop empties and `#` comments
/// 2. lower-case
/// 3. strip `http://`, `https://` and `www.` prefixes, each at most once
/// 4. cut everything from the first `/` or `?` onward
/// 5. enforce length <= 253 and the presence of at least one `.`
///
/// Normalization is idempotent: feeding a normalized domain back in yields
/// the same domain.
pub fn normalize(raw: &str) -> Option<Domain> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || trimmed.starts_with('#') {
        return None;
    }

    let mut domain = trimmed.to_lowercase();

    for prefix in STRIPPED_PREFIXES {
        if let Some(rest) = domain.strip_prefix(prefix) {
            domain = rest.to_string();
        }
    }

    if let Some(cut) = domain.find(['/', '?']) {
        domain.truncate(cut);
    }

    if domain.len() > MAX_DOMAIN_LEN || !domain.contains('.') {
        tracing::debug!(entry = %trimmed, "dropping invalid domain entry");
        return None;
    }

    Some(Domain::new(domain))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn norm(raw: &str) -> Option<String> {
        normalize(raw).map(|d| d.into_string())
    }

    #[test]
    fn test_normalize_basic() {
        assert_eq!(norm("example.com"), Some("example.com".to_string()));
        assert_eq!(norm("  example.com  "), Some("example.com".to_string()));
        assert_eq!(norm("EXAMPLE.COM"), Some("example.com".to_string()));
    }

    #[test]
    fn test_normalize_rejects_empty_and_comments() {
        assert_eq!(norm(""), None);
        assert_eq!(norm("   "), None);
        assert_eq!(norm("# a comment"), None);
        assert_eq!(norm("  # indented comment"), None);
    }

    #[test]
    fn test_normalize_strips_prefixes() {
        assert_eq!(norm("http://example.com"), Some("example.com".to_string()));
        assert_eq!(norm("https://example.com"), Some("example.com".to_string()));
        assert_eq!(norm("www.example.com"), Some("example.com".to_string()));
        assert_eq!(norm("WWW.Example.com"), Some("example.com".to_string()));
    }

    #[test]
    fn test_normalize_strips_scheme_then_www() {
        assert_eq!(
            norm("https://www.example.com"),
            Some("example.com".to_string())
        );
        // Each prefix comes off at most once, never recursively
        assert_eq!(
            norm("www.www.example.com"),
            Some("www.example.com".to_string())
        );
    }

    #[test]
    fn test_normalize_strips_path_and_query() {
        assert_eq!(norm("example.com/path/to/page"), Some("example.com".to_string()));
        assert_eq!(norm("example.com?q=1"), Some("example.com".to_string()));
        assert_eq!(
            norm("https://example.com/search?q=1"),
            Some("example.com".to_string())
        );
    }

    #[test]
    fn test_normalize_rejects_dotless() {
        assert_eq!(norm("localhost"), None);
        assert_eq!(norm("example"), None);
    }

    #[test]
    fn test_normalize_rejects_overlong() {
        let long = format!("{}.com", "a".repeat(260));
        assert_eq!(norm(&long), None);

        // Exactly at the cap passes
        let label = "a".repeat(249);
        let exact = format!("{}.com", label);
        assert_eq!(exact.len(), 253);
        assert!(norm(&exact).is_some());
    }

    #[test]
    fn test_normalize_idempotent() {
        let inputs = [
            "https://WWW.Example.com/path?q=1",
            "example.com",
            "sub.domain.co.uk",
            "www.example.com",
        ];
        for raw in inputs {
            if let Some(once) = normalize(raw) {
                let twice = normalize(once.as_str()).expect("normalized domain must re-normalize");
                assert_eq!(once, twice, "normalize not idempotent for {:?}", raw);
            }
        }
    }
}
