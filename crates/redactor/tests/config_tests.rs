//! Integration tests for configuration and thesaurus files.

use std::fs;
use std::path::PathBuf;

use redactor::expand::{ConceptExpander, LexicalDatabase, Thesaurus};
use redactor::{RedactError, RunConfig, StatsTarget};

#[test]
fn run_config_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("redactor.toml");
    fs::write(
        &path,
        r#"
input = "letters/*.txt"
output = "redacted"
names = true
address = true
concepts = ["dog"]
stats = "report.txt"
email_names = false
"#,
    )
    .unwrap();

    let config = RunConfig::load(&path).unwrap();
    assert_eq!(config.input, "letters/*.txt");
    assert_eq!(config.output, PathBuf::from("redacted"));
    assert_eq!(config.stats, Some(StatsTarget::File(PathBuf::from("report.txt"))));
    assert!(!config.email_names);
    assert_eq!(config.country, "US");

    let redaction = config.redaction();
    assert!(redaction.redact_names && redaction.redact_address);
    assert!(!redaction.redact_phones);
}

#[test]
fn run_config_missing_file() {
    let err = RunConfig::load("/no/such/redactor.toml").unwrap_err();
    assert!(matches!(err, RedactError::Io { .. }));
}

#[test]
fn run_config_error_names_the_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bad.toml");
    fs::write(&path, "names = \"yes\"").unwrap();

    let err = RunConfig::load(&path).unwrap_err();
    assert!(matches!(err, RedactError::Config { .. }));
    assert!(err.to_string().contains("bad.toml"));
}

#[test]
fn thesaurus_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("thesaurus.toml");
    fs::write(
        &path,
        r#"
[[sense]]
synonyms = ["call", "phone", "telephone"]
hypernyms = ["communication.n.01"]
hyponyms = ["wake-up_call.n.01"]
"#,
    )
    .unwrap();

    let thesaurus = Thesaurus::load(&path).unwrap();
    assert_eq!(thesaurus.senses("calls").len(), 1);

    let terms = ConceptExpander::new(&thesaurus).expand("call");
    let expected = ["call", "communication", "phone", "telephone", "wake-up call"];
    assert_eq!(terms.iter().map(String::as_str).collect::<Vec<_>>(), expected);
}

#[test]
fn thesaurus_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("thesaurus.toml");
    fs::write(&path, "[[sense]]\nsynonyms = \"dog\"").unwrap();

    let err = Thesaurus::load(&path).unwrap_err();
    assert!(matches!(err, RedactError::Thesaurus { .. }));
}
