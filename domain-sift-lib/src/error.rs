//! Error handling for domain filtering operations.
//!
//! The error surface here is deliberately small: per-domain resolution
//! failures never become errors (they fold into `exists = false` verdicts at
//! the retry boundary), so the only things that can fail are configuration
//! validation and file handling around a run.

use std::fmt;

/// Main error type for domain filtering operations.
#[derive(Debug, Clone)]
pub enum DomainSiftError {
    /// Configuration errors (invalid settings, unparsable config files)
    ConfigError { message: String },

    /// File I/O errors when reading domain lists or writing results
    FileError { path: String, message: String },

    /// Generic internal errors that don't fit other categories
    Internal { message: String },
}

impl DomainSiftError {
    /// Create a new configuration error.
    pub fn config<M: Into<String>>(message: M) -> Self {
        Self::ConfigError {
            message: message.into(),
        }
    }

    /// Create a new file error.
    pub fn file_error<P: Into<String>, M: Into<String>>(path: P, message: M) -> Self {
        Self::FileError {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Create a new internal error.
    pub fn internal<M: Into<String>>(message: M) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }
}

impl fmt::Display for DomainSiftError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ConfigError { message } => {
                write!(f, "Configuration error: {}", message)
            }
            Self::FileError { path, message } => {
                write!(f, "File error at '{}': {}", path, message)
            }
            Self::Internal { message } => {
                write!(f, "Internal error: {}", message)
            }
        }
    }
}

impl std::error::Error for DomainSiftError {}

impl From<std::io::Error> for DomainSiftError {
    fn from(err: std::io::Error) -> Self {
        Self::Internal {
            message: format!("I/O error: {}", err),
        }
    }
}
