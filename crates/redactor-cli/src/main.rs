//! redactor: batch PII redaction for text files.
//!
//! ```text
//! redactor --input 'text_files/*.txt' --output files/ --names --dates \
//!          --phones --address --concept dog --stats stderr
//! ```
//!
//! Every matched file produces `<output>/<name>.censored` and
//! `<output>/<name>.stats`. Files that cannot be read or written are skipped
//! with a warning; the exit status is non-zero if any file was skipped.

mod args;
mod logging;

use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use redactor::expand::Thesaurus;
use redactor::{BatchRunner, BatchSummary, Redactor, RunConfig};

use crate::args::Args;

fn main() -> anyhow::Result<ExitCode> {
    let args = Args::parse();
    let config = args.run_config()?;
    let subscriber = logging::subscriber(config.log_file.as_deref(), args.log_format)?;

    let summary = tracing::subscriber::with_default(subscriber, || run(&config))?;
    Ok(if summary.is_success() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

fn run(config: &RunConfig) -> anyhow::Result<BatchSummary> {
    let redactor = build_redactor(config)?;
    tracing::debug!(?redactor, input = %config.input, output = %config.output.display(), "Starting run");

    let summary = BatchRunner::new(&redactor, config).run()?;
    for (path, reason) in &summary.failed {
        tracing::error!(path = %path.display(), %reason, "File not redacted");
    }
    Ok(summary)
}

fn build_redactor(config: &RunConfig) -> anyhow::Result<Redactor> {
    let mut builder = Redactor::builder()
        .email_local_part_as_name(config.email_names)
        .country(config.country.as_str());

    if let Some(path) = &config.thesaurus {
        let thesaurus = Thesaurus::load(path)
            .with_context(|| format!("loading thesaurus {}", path.display()))?;
        tracing::info!(path = %path.display(), senses = thesaurus.len(), "Loaded thesaurus");
        builder = builder.lexicon(thesaurus);
    }

    Ok(builder.build())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_thesaurus_fails() {
        let config = RunConfig {
            thesaurus: Some("/no/such/thesaurus.toml".into()),
            ..RunConfig::default()
        };
        assert!(build_redactor(&config).is_err());
    }

    #[test]
    fn bundled_thesaurus_by_default() {
        let redactor = build_redactor(&RunConfig::default()).unwrap();
        assert!(redactor.topic_terms(&["call".to_string()]).contains("phone"));
    }

    #[test]
    fn thesaurus_file_replaces_bundled_one() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("thesaurus.toml");
        std::fs::write(&path, "[[sense]]\nsynonyms = [\"call\", \"summon\"]\n").unwrap();

        let config = RunConfig {
            thesaurus: Some(path),
            ..RunConfig::default()
        };
        let terms = build_redactor(&config).unwrap().topic_terms(&["call".to_string()]);
        assert_eq!(terms.into_iter().collect::<Vec<_>>(), ["call", "summon"]);
    }

    #[test]
    fn run_skips_unreadable_and_reports_failure() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("in");
        std::fs::create_dir(&input).unwrap();
        std::fs::write(input.join("ok.txt"), "Call 352-555-0199.\n").unwrap();
        std::fs::write(input.join("bad.txt"), [0xff, 0xfe, 0x00]).unwrap();

        let config = RunConfig {
            input: format!("{}/*.txt", input.display()),
            output: dir.path().join("out"),
            phones: true,
            ..RunConfig::default()
        };
        let summary = run(&config).unwrap();

        assert_eq!(summary.processed.len(), 1);
        assert_eq!(summary.failed.len(), 1);
        assert!(!summary.is_success());
        let censored = std::fs::read_to_string(config.censored_path("ok.txt")).unwrap();
        assert_eq!(censored, "Call ████████████.\n");
    }
}
