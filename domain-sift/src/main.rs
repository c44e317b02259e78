//! Domain Sift CLI Application
//!
//! A command-line interface for filtering a list of candidate domains down
//! to the ones that resolve via DNS. This is a thin layer over
//! domain-sift-lib: argument parsing, config precedence, file I/O and
//! progress display.

mod files;
mod ui;

use clap::builder::styling::{AnsiColor, Effects, Styles};
use clap::Parser;
use futures::StreamExt;
use std::path::PathBuf;
use std::process;
use std::time::{Duration, Instant};
use tracing_subscriber::EnvFilter;

use domain_sift_lib::{
    load_env_config, CheckConfig, ConfigManager, DomainChecker, RunReport, Summary,
};

const STYLES: Styles = Styles::styled()
    .header(AnsiColor::Yellow.on_default().effects(Effects::BOLD))
    .usage(AnsiColor::Yellow.on_default().effects(Effects::BOLD))
    .literal(AnsiColor::Green.on_default().effects(Effects::BOLD))
    .placeholder(AnsiColor::Cyan.on_default());

/// CLI arguments for domain-sift
#[derive(Parser, Debug)]
#[command(name = "domain-sift")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Filter a domain list down to the domains that resolve via DNS")]
#[command(
    long_about = "Reads candidate domain names from a file (one per line, # for comments),\nchecks which ones resolve via DNS with bounded concurrency, and writes the\nexisting domains to the output file, sorted."
)]
#[command(styles = STYLES)]
pub struct Args {
    /// Input file containing domain names (one per line)
    #[arg(value_name = "INPUT_FILE")]
    pub input_file: PathBuf,

    /// Output file for existing domains
    #[arg(value_name = "OUTPUT_FILE")]
    pub output_file: PathBuf,

    /// DNS resolution timeout in seconds (default: 5)
    #[arg(short = 't', long = "timeout", value_name = "SECONDS")]
    pub timeout: Option<f64>,

    /// Maximum concurrent workers, 1-200 (default: 50)
    #[arg(short = 'w', long = "workers", value_name = "N")]
    pub workers: Option<usize>,

    /// Number of retries for timed-out lookups (default: 2)
    #[arg(short = 'r', long = "retries", value_name = "N")]
    pub retries: Option<u32>,

    /// Use specific config file instead of automatic discovery
    #[arg(long = "config", value_name = "FILE", help_heading = "Configuration")]
    pub config: Option<String>,

    /// Print the run summary as JSON on stdout
    #[arg(long = "json", help_heading = "Output")]
    pub json: bool,

    /// Suppress progress output
    #[arg(short = 'q', long = "quiet", help_heading = "Output")]
    pub quiet: bool,

    /// Verbose logging
    #[arg(short = 'v', long = "verbose", help_heading = "Configuration")]
    pub verbose: bool,
}

#[tokio::main]
async fn main() {
    let args = Args::parse();

    init_tracing(args.verbose);

    // Validate arguments before any work starts
    if let Err(e) = validate_args(&args) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }

    // Run the filtering
    if let Err(e) = run_filter(args).await {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

/// Install the tracing subscriber for the whole process.
///
/// The library only emits events; the subscriber lifecycle is owned here.
/// RUST_LOG overrides the defaults, `-v` raises them to debug.
fn init_tracing(verbose: bool) {
    let default_directive = if verbose {
        "domain_sift=debug,domain_sift_lib=debug"
    } else {
        "warn"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Validate command line arguments
fn validate_args(args: &Args) -> Result<(), String> {
    if !args.input_file.exists() {
        return Err(format!(
            "Input file '{}' does not exist",
            args.input_file.display()
        ));
    }

    if let Some(timeout) = args.timeout {
        // NaN fails this comparison too
        if !(timeout > 0.0) {
            return Err("Timeout must be positive".to_string());
        }
    }

    Ok(())
}

/// Build CheckConfig from CLI arguments with config file integration.
///
/// Precedence order (highest to lowest):
/// 1. CLI arguments (explicit user input)
/// 2. Environment variables (DS_*)
/// 3. Local config file (./.domain-sift.toml)
/// 4. Global config file (~/.domain-sift.toml)
/// 5. XDG config file (~/.config/domain-sift/config.toml)
/// 6. Built-in defaults
fn build_config(args: &Args) -> Result<CheckConfig, Box<dyn std::error::Error>> {
    let config_manager = ConfigManager::new(args.verbose);

    // Step 1: config files (explicit path beats discovery)
    let file_config = if let Some(explicit_path) = &args.config {
        tracing::debug!("using explicit config file: {}", explicit_path);
        config_manager
            .load_file(explicit_path)
            .map_err(|e| format!("Failed to load config file '{}': {}", explicit_path, e))?
    } else if let Ok(env_path) = std::env::var("DS_CONFIG") {
        tracing::debug!("using explicit config file (DS_CONFIG env var): {}", env_path);
        config_manager
            .load_file(&env_path)
            .map_err(|e| format!("Failed to load config file '{}': {}", env_path, e))?
    } else {
        config_manager.discover_and_load().unwrap_or_default()
    };
    let defaults = file_config.defaults.unwrap_or_default();

    // Step 2: environment variables (DS_*)
    let env_config = load_env_config(args.verbose);

    // Step 3: CLI arguments win over everything
    let timeout_secs = args
        .timeout
        .or(env_config.timeout)
        .or(defaults.timeout)
        .unwrap_or(5.0);
    let workers = args
        .workers
        .or(env_config.workers)
        .or(defaults.workers)
        .unwrap_or(50);
    let retries = args
        .retries
        .or(env_config.retries)
        .or(defaults.retries)
        .unwrap_or(2);

    // NaN fails this comparison too
    if !(timeout_secs > 0.0) {
        return Err("Timeout must be positive".into());
    }
    // Rejects infinite and absurdly large values instead of panicking
    let timeout = Duration::try_from_secs_f64(timeout_secs)
        .map_err(|_| format!("Timeout of {}s is out of range", timeout_secs))?;

    let config = CheckConfig::default()
        .with_timeout(timeout)
        .with_max_workers(workers)
        .with_retry_count(retries);

    // Rejects out-of-range workers before any resolution begins
    config.validate()?;

    Ok(config)
}

/// Main filtering logic: load, check, write, summarize.
async fn run_filter(args: Args) -> Result<(), Box<dyn std::error::Error>> {
    let config = build_config(&args)?;

    // Input errors are fatal before any resolution work starts
    let domains = files::load_domain_set(&args.input_file)?;

    if domains.is_empty() {
        eprintln!("No valid domains found in input file");
        if args.json {
            print_json_summary(&Summary::default(), &args)?;
        }
        return Ok(());
    }

    if !args.quiet {
        ui::print_header(domains.len(), &config);
    }

    let checker = DomainChecker::with_config(config)?;

    let report = if args.quiet {
        // Batch mode: no progress to report, let the engine aggregate
        checker.run(&domains).await
    } else {
        // Streaming mode: drain the verdict stream, driving progress as
        // verdicts complete
        let start = Instant::now();
        let mut existing = Vec::new();
        let mut progress = ui::Progress::new(domains.len(), args.verbose);

        let mut stream = checker.run_stream(&domains);
        while let Some(verdict) = stream.next().await {
            progress.update(&verdict);
            if verdict.exists {
                existing.push(verdict.domain);
            }
        }
        drop(stream);
        progress.finish();

        let summary = Summary::new(domains.len(), existing.len(), start.elapsed());
        RunReport { existing, summary }
    };

    // Output errors are fatal too, but only after all resolution finished
    files::write_existing(&args.output_file, &report.existing)?;

    if args.json {
        print_json_summary(&report.summary, &args)?;
    }
    if !args.quiet {
        ui::print_summary(&report.summary, &args.output_file);
    }

    Ok(())
}

/// Print the run summary as JSON on stdout.
fn print_json_summary(summary: &Summary, args: &Args) -> Result<(), Box<dyn std::error::Error>> {
    let json = serde_json::json!({
        "checked": summary.checked,
        "existing": summary.existing,
        "missing": summary.missing,
        "elapsed_secs": summary.elapsed.as_secs_f64(),
        "output": args.output_file.display().to_string(),
    });
    println!("{}", serde_json::to_string_pretty(&json)?);
    Ok(())
}
