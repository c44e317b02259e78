//! Terminal display logic for the domain-sift CLI.
//!
//! Progress goes to stderr so stdout stays clean for `--json`; the final
//! summary uses the `console` crate for colors. Quiet mode suppresses all
//! of this.

use console::{style, Term};
use std::path::Path;

use domain_sift_lib::{CheckConfig, Summary, Verdict};

/// Print a short header before the run starts.
pub fn print_header(total: usize, config: &CheckConfig) {
    eprintln!(
        "{} {} {}",
        style("domain-sift").bold(),
        style(format!("v{}", env!("CARGO_PKG_VERSION"))).dim(),
        style(format!(
            "— checking {} domain{}",
            total,
            if total == 1 { "" } else { "s" }
        ))
        .dim(),
    );
    eprintln!(
        "{}",
        style(format!(
            "Workers: {} | Timeout: {:.1}s | Retries: {}",
            config.max_workers,
            config.timeout.as_secs_f64(),
            config.retry_count
        ))
        .dim(),
    );
}

/// Per-verdict progress reporting.
///
/// Default mode keeps a single counter line updated in place on stderr;
/// verbose mode prints one line per verdict instead.
pub struct Progress {
    term: Term,
    total: usize,
    completed: usize,
    verbose: bool,
}

impl Progress {
    /// Start progress reporting for `total` domains.
    pub fn new(total: usize, verbose: bool) -> Self {
        Self {
            term: Term::stderr(),
            total,
            completed: 0,
            verbose,
        }
    }

    /// Record one completed verdict and refresh the display.
    pub fn update(&mut self, verdict: &Verdict) {
        self.completed += 1;

        if self.verbose {
            let status = if verdict.exists {
                style("exists").green().bold()
            } else {
                style("missing").red()
            };
            eprintln!(
                "  {} {}  {}",
                style(format!("[{}/{}]", self.completed, self.total)).dim(),
                verdict.domain,
                status,
            );
        } else if self.term.is_term() {
            let _ = self.term.clear_line();
            let _ = self.term.write_str(&format!(
                "{} [{}/{}]",
                style("Checking domains").cyan(),
                self.completed,
                self.total,
            ));
        }
    }

    /// Clear the in-place counter line once the run is done.
    pub fn finish(&self) {
        if !self.verbose && self.term.is_term() {
            let _ = self.term.clear_line();
        }
    }
}

/// Print the final summary bar with colored counts.
pub fn print_summary(summary: &Summary, output: &Path) {
    eprintln!(
        "  {}",
        style("────────────────────────────────────────────────────").dim()
    );
    eprintln!(
        "  {} domain{} in {:.2}s  {}  {}  {}  {}",
        style(summary.checked).bold(),
        if summary.checked == 1 { "" } else { "s" },
        summary.elapsed.as_secs_f64(),
        style("|").dim(),
        style(format!("{} existing", summary.existing)).green(),
        style("|").dim(),
        style(format!("{} missing", summary.missing)).red(),
    );
    eprintln!("  Output saved to: {}", output.display());
}
