//! # Domain Sift Library
//!
//! A bounded-concurrency engine for filtering candidate domain lists down to
//! the domains that actually resolve via DNS.
//!
//! The library takes raw text lines, normalizes them into a deduplicated
//! [`DomainSet`], fans the set out across a bounded pool of concurrent
//! resolution attempts with per-lookup timeout and retry, and aggregates the
//! verdicts into the set of existing domains plus run statistics.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use domain_sift_lib::{CheckConfig, DomainChecker, DomainSet};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let domains = DomainSet::from_lines(["example.com", "www.Example.com", "rust-lang.org"]);
//!     let checker = DomainChecker::with_config(CheckConfig::default())?;
//!
//!     let report = checker.run(&domains).await;
//!     println!(
//!         "{} of {} domains exist",
//!         report.summary.existing, report.summary.checked
//!     );
//!     Ok(())
//! }
//! ```
//!
//! ## Guarantees
//!
//! - **One verdict per domain**: every domain submitted to the engine yields
//!   exactly one [`Verdict`], even when the resolver errors out.
//! - **Bounded concurrency**: never more than `max_workers` lookups in flight.
//! - **Error folding**: per-domain resolution failures become `exists = false`
//!   verdicts; only configuration and file errors surface as [`DomainSiftError`].

// Re-export main public API types and functions
// This makes them available as domain_sift_lib::TypeName
pub use checker::{DomainChecker, RunReport};
pub use config::{load_env_config, ConfigManager, DefaultsConfig, EnvConfig, FileConfig};
pub use engine::{check_all, verdict_stream};
pub use error::DomainSiftError;
pub use normalize::normalize;
pub use resolver::{DnsResolver, Resolution, Resolve};
pub use retry::check_exists;
pub use types::{CheckConfig, Domain, DomainSet, Summary, Verdict};

// Internal modules - these are not part of the public API surface,
// everything useful is re-exported above
mod checker;
mod config;
mod engine;
mod error;
mod normalize;
mod resolver;
mod retry;
mod types;

// Type alias for convenience
pub type Result<T> = std::result::Result<T, DomainSiftError>;

// Library version and metadata
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
