//! Error types for redactor.
//!
//! Detection itself never fails: a pattern that does not match simply yields
//! nothing to redact. Errors only arise at the edges, when reading input
//! files, writing output, or loading configuration and thesaurus snapshots.

use std::path::{Path, PathBuf};

use thiserror::Error;

/// The main error type for redactor operations.
#[derive(Debug, Error)]
pub enum RedactError {
    /// An I/O error occurred on a specific path.
    #[error("{action} {}: {source}", path.display())]
    Io {
        /// What was being done (e.g. "failed to read").
        action: &'static str,
        /// The path involved.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The input glob pattern could not be parsed.
    #[error("invalid input pattern '{pattern}': {source}")]
    Glob {
        /// The offending pattern.
        pattern: String,
        /// The underlying parse error.
        #[source]
        source: glob::PatternError,
    },

    /// Configuration error.
    #[error("configuration error: {message}")]
    Config {
        /// Description of the configuration error.
        message: String,
    },

    /// A thesaurus snapshot could not be parsed.
    #[error("invalid thesaurus {}: {source}", path.display())]
    Thesaurus {
        /// The thesaurus file.
        path: PathBuf,
        /// The underlying TOML error.
        #[source]
        source: toml::de::Error,
    },

    /// Statistics could not be serialized.
    #[error("failed to serialize statistics: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Result type alias for redactor operations.
pub type Result<T> = std::result::Result<T, RedactError>;

impl RedactError {
    /// Create a read error for the given path.
    pub fn read(path: impl AsRef<Path>, source: std::io::Error) -> Self {
        Self::Io {
            action: "failed to read",
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// Create a write error for the given path.
    pub fn write(path: impl AsRef<Path>, source: std::io::Error) -> Self {
        Self::Io {
            action: "failed to write",
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// Create a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Returns `true` if this error concerns a single input or output file.
    ///
    /// The batch runner skips such files and carries on with the rest.
    #[must_use]
    pub const fn is_per_file(&self) -> bool {
        matches!(self, Self::Io { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn io_error_mentions_path() {
        let err = RedactError::read(
            "missing.txt",
            std::io::Error::new(std::io::ErrorKind::NotFound, "no such file"),
        );
        let msg = err.to_string();
        assert!(msg.contains("failed to read"));
        assert!(msg.contains("missing.txt"));
        assert!(err.is_per_file());
    }

    #[test]
    fn config_error_display() {
        let err = RedactError::config("unknown stats target");
        assert_eq!(err.to_string(), "configuration error: unknown stats target");
        assert!(!err.is_per_file());
    }
}
