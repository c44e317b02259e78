//! Configuration file parsing and environment variable handling.
//!
//! This module handles loading defaults from TOML files and `DS_*`
//! environment variables. Precedence is assembled by the CLI:
//! built-in defaults < discovered config files < environment < CLI flags.

use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::DomainSiftError;

/// Configuration loaded from TOML files.
///
/// ```toml
/// [defaults]
/// timeout = 3.0
/// workers = 100
/// retries = 1
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct FileConfig {
    /// Default values for CLI options
    #[serde(skip_serializing_if = "Option::is_none")]
    pub defaults: Option<DefaultsConfig>,
}

/// Default configuration values that map to CLI options.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct DefaultsConfig {
    /// Per-attempt resolution timeout, in seconds
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout: Option<f64>,

    /// Worker pool size
    #[serde(skip_serializing_if = "Option::is_none")]
    pub workers: Option<usize>,

    /// Retries for timed-out lookups
    #[serde(skip_serializing_if = "Option::is_none")]
    pub retries: Option<u32>,
}

/// Configuration discovery and loading functionality.
pub struct ConfigManager {
    /// Whether to emit diagnostics about discovered files
    pub verbose: bool,
}

impl ConfigManager {
    /// Create a new configuration manager.
    pub fn new(verbose: bool) -> Self {
        Self { verbose }
    }

    /// Load configuration from a specific file.
    pub fn load_file<P: AsRef<Path>>(&self, path: P) -> Result<FileConfig, DomainSiftError> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(DomainSiftError::file_error(
                path.to_string_lossy(),
                "Configuration file not found",
            ));
        }

        let content = fs::read_to_string(path).map_err(|e| {
            DomainSiftError::file_error(
                path.to_string_lossy(),
                format!("Failed to read configuration file: {}", e),
            )
        })?;

        let config: FileConfig = toml::from_str(&content).map_err(|e| {
            DomainSiftError::config(format!("Failed to parse TOML configuration: {}", e))
        })?;

        Ok(config)
    }

    /// Discover and load configuration files in precedence order.
    ///
    /// XDG config is loaded first, then the home-directory config, then the
    /// local one, each overriding the fields of the previous.
    pub fn discover_and_load(&self) -> Result<FileConfig, DomainSiftError> {
        let mut merged = FileConfig::default();
        let mut loaded_files = Vec::new();

        let candidates = [
            self.xdg_config_path(),
            self.global_config_path(),
            self.local_config_path(),
        ];

        for path in candidates.into_iter().flatten() {
            if let Ok(config) = self.load_file(&path) {
                merged = merge_configs(merged, config);
                loaded_files.push(path);
            }
        }

        if self.verbose && loaded_files.len() > 1 {
            tracing::debug!(
                files = ?loaded_files,
                "multiple config files found, later entries override earlier ones"
            );
        }

        Ok(merged)
    }

    /// Config file in the current directory.
    fn local_config_path(&self) -> Option<PathBuf> {
        let candidates = ["./domain-sift.toml", "./.domain-sift.toml"];

        candidates
            .iter()
            .map(Path::new)
            .find(|p| p.exists())
            .map(Path::to_path_buf)
    }

    /// Config file in the user's home directory.
    fn global_config_path(&self) -> Option<PathBuf> {
        let home = env::var_os("HOME")?;
        let candidates = [".domain-sift.toml", "domain-sift.toml"];

        candidates
            .iter()
            .map(|c| Path::new(&home).join(c))
            .find(|p| p.exists())
    }

    /// Config file per the XDG Base Directory Specification.
    fn xdg_config_path(&self) -> Option<PathBuf> {
        let config_dir = env::var_os("XDG_CONFIG_HOME")
            .map(PathBuf::from)
            .or_else(|| env::var_os("HOME").map(|home| Path::new(&home).join(".config")))?;

        let path = config_dir.join("domain-sift").join("config.toml");
        path.exists().then_some(path)
    }
}

/// Merge two file configs, `overlay` winning field by field.
fn merge_configs(base: FileConfig, overlay: FileConfig) -> FileConfig {
    let base_defaults = base.defaults.unwrap_or_default();
    let overlay_defaults = overlay.defaults.unwrap_or_default();

    FileConfig {
        defaults: Some(DefaultsConfig {
            timeout: overlay_defaults.timeout.or(base_defaults.timeout),
            workers: overlay_defaults.workers.or(base_defaults.workers),
            retries: overlay_defaults.retries.or(base_defaults.retries),
        }),
    }
}

/// Settings read from `DS_*` environment variables.
#[derive(Debug, Clone, Default)]
pub struct EnvConfig {
    pub timeout: Option<f64>,
    pub workers: Option<usize>,
    pub retries: Option<u32>,
}

/// Read `DS_TIMEOUT`, `DS_WORKERS` and `DS_RETRIES` from the environment.
///
/// Unparsable values are skipped with a diagnostic rather than failing the
/// run; validation of the merged result happens later, in one place.
pub fn load_env_config(verbose: bool) -> EnvConfig {
    let mut config = EnvConfig::default();

    if let Ok(raw) = env::var("DS_TIMEOUT") {
        match raw.parse::<f64>() {
            Ok(value) => {
                if verbose {
                    tracing::debug!("using DS_TIMEOUT={}", value);
                }
                config.timeout = Some(value);
            }
            Err(_) => tracing::warn!("ignoring unparsable DS_TIMEOUT={:?}", raw),
        }
    }

    if let Ok(raw) = env::var("DS_WORKERS") {
        match raw.parse::<usize>() {
            Ok(value) => {
                if verbose {
                    tracing::debug!("using DS_WORKERS={}", value);
                }
                config.workers = Some(value);
            }
            Err(_) => tracing::warn!("ignoring unparsable DS_WORKERS={:?}", raw),
        }
    }

    if let Ok(raw) = env::var("DS_RETRIES") {
        match raw.parse::<u32>() {
            Ok(value) => {
                if verbose {
                    tracing::debug!("using DS_RETRIES={}", value);
                }
                config.retries = Some(value);
            }
            Err(_) => tracing::warn!("ignoring unparsable DS_RETRIES={:?}", raw),
        }
    }

    config
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_load_file_parses_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "[defaults]\ntimeout = 2.5\nworkers = 80\nretries = 1"
        )
        .unwrap();

        let manager = ConfigManager::new(false);
        let config = manager.load_file(file.path()).unwrap();
        let defaults = config.defaults.unwrap();

        assert_eq!(defaults.timeout, Some(2.5));
        assert_eq!(defaults.workers, Some(80));
        assert_eq!(defaults.retries, Some(1));
    }

    #[test]
    fn test_load_file_missing_is_error() {
        let manager = ConfigManager::new(false);
        assert!(manager.load_file("/nonexistent/domain-sift.toml").is_err());
    }

    #[test]
    fn test_load_file_bad_toml_is_config_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[defaults\nworkers = ]").unwrap();

        let manager = ConfigManager::new(false);
        let err = manager.load_file(file.path()).unwrap_err();
        assert!(matches!(err, DomainSiftError::ConfigError { .. }));
    }

    #[test]
    fn test_merge_overlay_wins_per_field() {
        let base = FileConfig {
            defaults: Some(DefaultsConfig {
                timeout: Some(5.0),
                workers: Some(50),
                retries: Some(2),
            }),
        };
        let overlay = FileConfig {
            defaults: Some(DefaultsConfig {
                workers: Some(10),
                ..Default::default()
            }),
        };

        let merged = merge_configs(base, overlay);
        let defaults = merged.defaults.unwrap();
        assert_eq!(defaults.timeout, Some(5.0));
        assert_eq!(defaults.workers, Some(10));
        assert_eq!(defaults.retries, Some(2));
    }
}
