//! Batch processing of input files.
//!
//! Each input file matched by the configured glob is read, redacted and
//! written to `<output>/<name>.censored`, with its statistics report in
//! `<output>/<name>.stats`. A file that cannot be read or written is logged
//! and skipped; the rest of the batch still runs.

use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::config::{RedactionConfig, RunConfig, StatsTarget};
use crate::error::{RedactError, Result};
use crate::observer::TracingObserver;
use crate::pipeline::Redactor;
use crate::report::EntityStats;

/// Outcome of a batch run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchSummary {
    /// Files redacted successfully.
    pub processed: Vec<PathBuf>,
    /// Files skipped, with the reason.
    pub failed: Vec<(PathBuf, String)>,
}

impl BatchSummary {
    /// Returns `true` if no file was skipped.
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Runs a [`Redactor`] over the files selected by a [`RunConfig`].
#[derive(Debug)]
pub struct BatchRunner<'a> {
    redactor: &'a Redactor,
    config: &'a RunConfig,
    redaction: RedactionConfig,
}

impl<'a> BatchRunner<'a> {
    /// Create a runner.
    #[must_use]
    pub fn new(redactor: &'a Redactor, config: &'a RunConfig) -> Self {
        Self {
            redactor,
            config,
            redaction: config.redaction(),
        }
    }

    /// Expand the input glob, in sorted order.
    ///
    /// Entries the glob walker cannot read are logged and left out.
    pub fn input_files(&self) -> Result<Vec<PathBuf>> {
        let entries = glob::glob(&self.config.input).map_err(|source| RedactError::Glob {
            pattern: self.config.input.clone(),
            source,
        })?;

        let mut files = Vec::new();
        for entry in entries {
            match entry {
                Ok(path) if path.is_dir() => {}
                Ok(path) => files.push(path),
                Err(e) => {
                    tracing::warn!(path = %e.path().display(), error = %e, "Skipping unreadable entry");
                }
            }
        }
        files.sort();
        Ok(files)
    }

    /// Process every file matched by the input glob.
    pub fn run(&self) -> Result<BatchSummary> {
        let files = self.input_files()?;
        if files.is_empty() {
            tracing::warn!(pattern = %self.config.input, "No input files matched");
        }
        self.run_paths(&files)
    }

    /// Process an explicit list of files.
    ///
    /// Fails only if the output directory or the statistics destination
    /// cannot be opened.
    pub fn run_paths(&self, paths: &[PathBuf]) -> Result<BatchSummary> {
        fs::create_dir_all(&self.config.output)
            .map_err(|e| RedactError::write(&self.config.output, e))?;
        let mut sink = StatsSink::open(self.config.stats.as_ref())?;

        let mut summary = BatchSummary::default();
        for path in paths {
            match self.process(path, &mut sink) {
                Ok(()) => summary.processed.push(path.clone()),
                Err(e) if e.is_per_file() => {
                    tracing::warn!(path = %path.display(), error = %e, "Skipping file");
                    summary.failed.push((path.clone(), e.to_string()));
                }
                Err(e) => return Err(e),
            }
        }

        tracing::info!(
            processed = summary.processed.len(),
            failed = summary.failed.len(),
            "Batch complete"
        );
        Ok(summary)
    }

    fn process(&self, path: &Path, sink: &mut StatsSink) -> Result<()> {
        let text = fs::read_to_string(path).map_err(|e| RedactError::read(path, e))?;
        let name = file_name(path);

        let mut observer = TracingObserver::new(name.as_str());
        let doc = self
            .redactor
            .redact_document(&text, &self.redaction, &mut observer);
        let stats = EntityStats::new(name.as_str(), &self.redaction, &doc.entities);
        let report = stats.render();

        let censored = self.config.censored_path(&name);
        fs::write(&censored, &doc.text).map_err(|e| RedactError::write(&censored, e))?;
        let stats_path = self.config.stats_path(&name);
        fs::write(&stats_path, &report).map_err(|e| RedactError::write(&stats_path, e))?;
        sink.emit(&report)?;

        tracing::debug!(file = %name, output = %censored.display(), "Redacted file");
        Ok(())
    }
}

fn file_name(path: &Path) -> String {
    path.file_name().map_or_else(
        || path.display().to_string(),
        |name| name.to_string_lossy().into_owned(),
    )
}

/// Extra destination for statistics reports.
enum StatsSink {
    Discard,
    Stdout,
    Stderr,
    File { path: PathBuf, file: File },
}

impl StatsSink {
    fn open(target: Option<&StatsTarget>) -> Result<Self> {
        Ok(match target {
            None => Self::Discard,
            Some(StatsTarget::Stdout) => Self::Stdout,
            Some(StatsTarget::Stderr) => Self::Stderr,
            Some(StatsTarget::File(path)) => {
                let file = OpenOptions::new()
                    .create(true)
                    .append(true)
                    .open(path)
                    .map_err(|e| RedactError::write(path, e))?;
                Self::File {
                    path: path.clone(),
                    file,
                }
            }
        })
    }

    fn emit(&mut self, report: &str) -> Result<()> {
        let bytes = report.as_bytes();
        match self {
            Self::Discard => Ok(()),
            Self::Stdout => std::io::stdout()
                .lock()
                .write_all(bytes)
                .map_err(|e| RedactError::write("<stdout>", e)),
            Self::Stderr => std::io::stderr()
                .lock()
                .write_all(bytes)
                .map_err(|e| RedactError::write("<stderr>", e)),
            Self::File { path, file } => file
                .write_all(bytes)
                .map_err(|e| RedactError::write(path, e)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_name_falls_back_to_display() {
        assert_eq!(file_name(Path::new("dir/a.txt")), "a.txt");
        assert_eq!(file_name(Path::new("/")), "/");
    }

    #[test]
    fn summary_success() {
        let mut summary = BatchSummary::default();
        assert!(summary.is_success());
        summary.failed.push((PathBuf::from("x"), "gone".into()));
        assert!(!summary.is_success());
    }

    #[test]
    fn bad_glob_is_an_error() {
        let redactor = Redactor::new();
        let config = RunConfig {
            input: "[".into(),
            ..RunConfig::default()
        };
        let err = BatchRunner::new(&redactor, &config).input_files().unwrap_err();
        assert!(matches!(err, RedactError::Glob { .. }));
    }
}
