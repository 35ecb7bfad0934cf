//! File-based batch configuration.
//!
//! ```toml
//! input = "text_files/*.txt"
//! output = "files/"
//! names = true
//! dates = true
//! concepts = ["dog"]
//! stats = "stderr"
//! thesaurus = "thesaurus.toml"
//! ```

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::RedactionConfig;
use crate::address::DEFAULT_COUNTRY;
use crate::error::{RedactError, Result};

/// Default input glob.
pub const DEFAULT_INPUT: &str = "text_files/*.txt";

/// Default output directory.
pub const DEFAULT_OUTPUT: &str = "files/";

/// Extension appended to redacted copies.
pub const CENSORED_EXTENSION: &str = "censored";

/// Extension appended to per-file statistics reports.
pub const STATS_EXTENSION: &str = "stats";

/// Where statistics are echoed in addition to the per-file reports.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum StatsTarget {
    /// Standard output.
    Stdout,
    /// Standard error.
    Stderr,
    /// Appended to a file.
    File(PathBuf),
}

impl FromStr for StatsTarget {
    type Err = RedactError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim() {
            "" => Err(RedactError::config("empty stats target")),
            "stdout" => Ok(Self::Stdout),
            "stderr" => Ok(Self::Stderr),
            path => Ok(Self::File(PathBuf::from(path))),
        }
    }
}

impl TryFrom<String> for StatsTarget {
    type Error = RedactError;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<StatsTarget> for String {
    fn from(target: StatsTarget) -> Self {
        target.to_string()
    }
}

impl fmt::Display for StatsTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Stdout => f.write_str("stdout"),
            Self::Stderr => f.write_str("stderr"),
            Self::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Settings for a batch run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RunConfig {
    /// Glob selecting the input files.
    pub input: String,

    /// Directory receiving `.censored` and `.stats` files.
    pub output: PathBuf,

    /// Redact names.
    pub names: bool,

    /// Redact dates.
    pub dates: bool,

    /// Redact phone numbers.
    pub phones: bool,

    /// Redact addresses.
    pub address: bool,

    /// Topic seeds for sentence redaction.
    pub concepts: Vec<String>,

    /// Extra destination for statistics.
    pub stats: Option<StatsTarget>,

    /// Thesaurus snapshot used to expand concepts.
    pub thesaurus: Option<PathBuf>,

    /// Log file; logs go to stderr when unset.
    pub log_file: Option<PathBuf>,

    /// Treat email local-parts as name candidates.
    pub email_names: bool,

    /// Country code handed to the address parser.
    pub country: String,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            input: DEFAULT_INPUT.to_string(),
            output: PathBuf::from(DEFAULT_OUTPUT),
            names: false,
            dates: false,
            phones: false,
            address: false,
            concepts: Vec::new(),
            stats: None,
            thesaurus: None,
            log_file: None,
            email_names: true,
            country: DEFAULT_COUNTRY.to_string(),
        }
    }
}

impl RunConfig {
    /// Parse a configuration from TOML text.
    pub fn parse(content: &str) -> Result<Self> {
        let config: Self =
            toml::from_str(content).map_err(|e| RedactError::config(e.message().to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Load a configuration file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| RedactError::read(path, e))?;
        Self::parse(&content)
            .map_err(|e| RedactError::config(format!("{}: {e}", path.display())))
    }

    /// Check for values that would make a run meaningless.
    pub fn validate(&self) -> Result<()> {
        if self.input.trim().is_empty() {
            return Err(RedactError::config("input pattern is empty"));
        }
        if self.country.trim().is_empty() {
            return Err(RedactError::config("country code is empty"));
        }
        if self.concepts.iter().any(|c| c.trim().is_empty()) {
            return Err(RedactError::config("concepts must not be empty strings"));
        }
        Ok(())
    }

    /// The per-document switches for this run.
    #[must_use]
    pub fn redaction(&self) -> RedactionConfig {
        RedactionConfig::new()
            .names(self.names)
            .dates(self.dates)
            .phones(self.phones)
            .address(self.address)
            .topics(self.concepts.iter().cloned())
    }

    /// Path of the redacted copy of `file_name`.
    #[must_use]
    pub fn censored_path(&self, file_name: &str) -> PathBuf {
        self.output.join(format!("{file_name}.{CENSORED_EXTENSION}"))
    }

    /// Path of the statistics report for `file_name`.
    #[must_use]
    pub fn stats_path(&self, file_name: &str) -> PathBuf {
        self.output.join(format!("{file_name}.{STATS_EXTENSION}"))
    }
}
