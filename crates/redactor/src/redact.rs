//! The redaction engine.
//!
//! Redaction works one line at a time and replaces every redacted character
//! with exactly one [`BLOCK`] glyph, so line count and line length (in
//! characters) never change. Three passes run per line:
//!
//! 1. Addresses reported by the [`AddressParser`], when address redaction is
//!    on. The parser sees the raw line.
//! 2. Entity literals, category by category in
//!    [`REDACTION_ORDER`](crate::types::EntityType::REDACTION_ORDER).
//!    Every occurrence of a literal is replaced. A literal that overlaps a
//!    span already blacked out by an earlier category no longer matches, so
//!    the earlier category wins.
//! 3. Topic sentences: every `". "`-separated sentence mentioning a topic
//!    term (case-insensitive) is blacked out whole.
//!
//! Running the engine over its own output changes nothing.

use std::collections::BTreeSet;

use crate::address::AddressParser;
use crate::config::RedactionConfig;
use crate::observer::RedactionObserver;
use crate::types::EntitySet;

/// The glyph written over redacted characters.
pub const BLOCK: char = '█';

/// Sentence delimiter for topic redaction.
const SENTENCE_DELIMITER: &str = ". ";

/// A run of [`BLOCK`] glyphs as long as `text` (in characters).
#[must_use]
pub fn blackout(text: &str) -> String {
    std::iter::repeat_n(BLOCK, text.chars().count()).collect()
}

/// Replace every occurrence of `literal` in `text` with glyphs.
///
/// Returns `None` when `literal` is empty or absent.
#[must_use]
pub fn blackout_literal(text: &str, literal: &str) -> Option<String> {
    if literal.is_empty() || !text.contains(literal) {
        return None;
    }
    Some(text.replace(literal, &blackout(literal)))
}

/// Black out every entity literal of the enabled categories.
#[must_use]
pub fn redact_literals(line: &str, entities: &EntitySet, config: &RedactionConfig) -> String {
    let mut observer = crate::observer::NoopObserver;
    redact_literals_observed(line, entities, config, 0, &mut observer)
}

fn redact_literals_observed(
    line: &str,
    entities: &EntitySet,
    config: &RedactionConfig,
    line_no: usize,
    observer: &mut impl RedactionObserver,
) -> String {
    let mut redacted = line.to_string();
    for entity_type in config.enabled_types() {
        for literal in entities.literals(entity_type) {
            if let Some(next) = blackout_literal(&redacted, literal) {
                observer.on_literal_redacted(line_no, entity_type, literal);
                redacted = next;
            }
        }
    }
    redacted
}

/// Black out whole sentences that mention any topic term.
///
/// A single trailing `.` is set aside before splitting and restored after,
/// so sentence count and length are preserved.
#[must_use]
pub fn redact_topic_sentences(text: &str, terms: &BTreeSet<String>) -> String {
    let mut observer = crate::observer::NoopObserver;
    redact_topic_sentences_observed(text, terms, 0, &mut observer)
}

fn redact_topic_sentences_observed(
    text: &str,
    terms: &BTreeSet<String>,
    line_no: usize,
    observer: &mut impl RedactionObserver,
) -> String {
    let needles: Vec<String> = terms
        .iter()
        .filter(|t| !t.is_empty())
        .map(|t| t.to_lowercase())
        .collect();
    if needles.is_empty() {
        return text.to_string();
    }

    let (body, trailing) = match text.strip_suffix('.') {
        Some(body) => (body, "."),
        None => (text, ""),
    };

    let sentences: Vec<String> = body
        .split(SENTENCE_DELIMITER)
        .map(|sentence| {
            let lower = sentence.to_lowercase();
            if needles.iter().any(|n| lower.contains(n.as_str())) {
                observer.on_sentence_redacted(line_no, sentence);
                blackout(sentence)
            } else {
                sentence.to_string()
            }
        })
        .collect();

    let mut out = sentences.join(SENTENCE_DELIMITER);
    out.push_str(trailing);
    out
}

/// Applies redaction to single lines.
#[derive(Clone, Copy)]
pub struct RedactionEngine<'a> {
    address_parser: &'a dyn AddressParser,
    country: &'a str,
}

impl std::fmt::Debug for RedactionEngine<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RedactionEngine")
            .field("country", &self.country)
            .finish_non_exhaustive()
    }
}

impl<'a> RedactionEngine<'a> {
    /// Create an engine using `address_parser` for the given country code.
    #[must_use]
    pub const fn new(address_parser: &'a dyn AddressParser, country: &'a str) -> Self {
        Self {
            address_parser,
            country,
        }
    }

    /// Redact one line. The line must not contain its terminator.
    #[must_use]
    pub fn redact_line(
        &self,
        line: &str,
        entities: &EntitySet,
        config: &RedactionConfig,
        topic_terms: &BTreeSet<String>,
    ) -> String {
        let mut observer = crate::observer::NoopObserver;
        self.redact_line_observed(line, entities, config, topic_terms, 0, &mut observer)
    }

    /// Redact one line, reporting to `observer`.
    pub fn redact_line_observed(
        &self,
        line: &str,
        entities: &EntitySet,
        config: &RedactionConfig,
        topic_terms: &BTreeSet<String>,
        line_no: usize,
        observer: &mut impl RedactionObserver,
    ) -> String {
        let mut redacted = line.to_string();

        if config.redact_address {
            for address in self.address_parser.parse(line, self.country) {
                if let Some(next) = blackout_literal(&redacted, &address) {
                    observer.on_address_parsed(line_no, &address);
                    redacted = next;
                }
            }
        }

        redacted = redact_literals_observed(&redacted, entities, config, line_no, observer);

        if !topic_terms.is_empty() {
            redacted = redact_topic_sentences_observed(&redacted, topic_terms, line_no, observer);
        }

        observer.on_line_done(line_no, redacted != line);
        redacted
    }
}
