//! Command-line arguments.

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use redactor::{RunConfig, StatsTarget};

use crate::logging::LogFormat;

/// Black out names, dates, phone numbers, addresses and topics in text files.
#[derive(Parser, Debug)]
#[command(name = "redactor", version, about)]
pub struct Args {
    /// Glob selecting the input files [default: text_files/*.txt]
    #[arg(long, value_name = "GLOB")]
    pub input: Option<String>,

    /// Directory for .censored and .stats files [default: files/]
    #[arg(long, value_name = "DIR")]
    pub output: Option<PathBuf>,

    /// Redact person names
    #[arg(long)]
    pub names: bool,

    /// Redact dates
    #[arg(long)]
    pub dates: bool,

    /// Redact phone numbers
    #[arg(long)]
    pub phones: bool,

    /// Redact addresses and place names
    #[arg(long)]
    pub address: bool,

    /// Redact every sentence about this topic (repeatable)
    #[arg(long = "concept", value_name = "WORD", num_args = 1..)]
    pub concepts: Vec<String>,

    /// Also write statistics to stdout, stderr or a file
    #[arg(long, value_name = "stdout|stderr|FILE")]
    pub stats: Option<StatsTarget>,

    /// Thesaurus snapshot (TOML) used instead of the bundled one
    #[arg(long, value_name = "FILE")]
    pub thesaurus: Option<PathBuf>,

    /// Run configuration file (TOML); flags override it
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Write logs to this file instead of stderr
    #[arg(long, value_name = "FILE")]
    pub log_file: Option<PathBuf>,

    /// Log line format
    #[arg(long, value_enum, default_value_t = LogFormat::Text)]
    pub log_format: LogFormat,

    /// Do not treat email local-parts as names
    #[arg(long)]
    pub no_email_names: bool,

    /// Country code for the address parser [default: US]
    #[arg(long, value_name = "CODE")]
    pub country: Option<String>,
}

impl Args {
    /// Build the run configuration: the config file (if any), then flags.
    ///
    /// Switches are OR-ed with the file; concepts are appended.
    pub fn run_config(&self) -> anyhow::Result<RunConfig> {
        let mut config = match &self.config {
            Some(path) => RunConfig::load(path)
                .with_context(|| format!("loading {}", path.display()))?,
            None => RunConfig::default(),
        };

        if let Some(input) = &self.input {
            config.input.clone_from(input);
        }
        if let Some(output) = &self.output {
            config.output.clone_from(output);
        }
        config.names |= self.names;
        config.dates |= self.dates;
        config.phones |= self.phones;
        config.address |= self.address;
        config.concepts.extend(self.concepts.iter().cloned());
        if self.stats.is_some() {
            config.stats.clone_from(&self.stats);
        }
        if self.thesaurus.is_some() {
            config.thesaurus.clone_from(&self.thesaurus);
        }
        if self.log_file.is_some() {
            config.log_file.clone_from(&self.log_file);
        }
        if self.no_email_names {
            config.email_names = false;
        }
        if let Some(country) = &self.country {
            config.country.clone_from(country);
        }

        config.validate()?;
        Ok(config)
    }
}
