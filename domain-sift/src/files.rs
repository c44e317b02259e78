//! Input and output file handling for the CLI.
//!
//! The library itself never touches the filesystem; reading the candidate
//! list and persisting the surviving domains both live here.

use std::fs;
use std::io::{BufRead, BufReader};
use std::path::Path;

use domain_sift_lib::{normalize, Domain, DomainSet, DomainSiftError};

/// Load and normalize the domain list from the input file.
///
/// Empty lines and `#` comments are skipped, entries are normalized and
/// deduplicated in first-occurrence order. Over-long entries get a
/// line-numbered warning before being dropped.
///
/// # Errors
///
/// Returns a file error when the input cannot be opened or a line is not
/// valid UTF-8. These are fatal: no resolution work starts on a broken
/// input file.
pub fn load_domain_set(path: &Path) -> Result<DomainSet, DomainSiftError> {
    let file = fs::File::open(path).map_err(|e| {
        DomainSiftError::file_error(path.display().to_string(), format!("cannot open: {}", e))
    })?;

    let mut set = DomainSet::new();
    for (idx, line) in BufReader::new(file).lines().enumerate() {
        let line = line.map_err(|e| {
            DomainSiftError::file_error(
                path.display().to_string(),
                format!("read failed at line {}: {}", idx + 1, e),
            )
        })?;

        match normalize(&line) {
            Some(domain) => {
                set.insert(domain);
            }
            None => {
                // Over-length is the only drop worth a diagnostic; a long
                // raw URL whose host fits the cap is kept, not warned about
                let trimmed = line.trim();
                if !trimmed.starts_with('#') && trimmed.len() > 253 {
                    let preview: String = trimmed.chars().take(50).collect();
                    tracing::warn!(
                        line = idx + 1,
                        "domain too long (>253 chars): {}...",
                        preview
                    );
                }
            }
        }
    }

    if set.duplicates_skipped() > 0 {
        tracing::info!("removed {} duplicate domains", set.duplicates_skipped());
    }

    Ok(set)
}

/// Write the existing domains to the output file, one per line, sorted
/// lexicographically. Parent directories are created as needed.
pub fn write_existing(path: &Path, domains: &[Domain]) -> Result<(), DomainSiftError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|e| {
                DomainSiftError::file_error(
                    path.display().to_string(),
                    format!("cannot create parent directory: {}", e),
                )
            })?;
        }
    }

    let mut sorted: Vec<&Domain> = domains.iter().collect();
    sorted.sort();

    let mut content = String::new();
    for domain in sorted {
        content.push_str(domain.as_str());
        content.push('\n');
    }

    fs::write(path, content).map_err(|e| {
        DomainSiftError::file_error(path.display().to_string(), format!("write failed: {}", e))
    })
}
