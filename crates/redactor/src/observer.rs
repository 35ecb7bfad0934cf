//! Redaction observers: hooks for logging and auditing.
//!
//! The pipeline never logs through a global logger. Instead it notifies the
//! observer passed to each call, so callers decide where (and whether)
//! events are recorded.

use std::collections::BTreeSet;

use crate::types::{EntitySet, EntityType};

/// Receives notifications as a document moves through the pipeline.
///
/// Every method has an empty default body.
pub trait RedactionObserver {
    /// Entities were merged for a document.
    fn on_entities(&mut self, _entities: &EntitySet) {}

    /// Topic seeds were expanded.
    fn on_topic_terms(&mut self, _topics: &[String], _terms: &BTreeSet<String>) {}

    /// The address parser reported an address on a line.
    fn on_address_parsed(&mut self, _line_no: usize, _address: &str) {}

    /// A literal was blacked out on a line.
    fn on_literal_redacted(&mut self, _line_no: usize, _entity_type: EntityType, _literal: &str) {}

    /// A sentence was blacked out because it mentions a topic term.
    fn on_sentence_redacted(&mut self, _line_no: usize, _sentence: &str) {}

    /// A line was processed; `changed` is `true` if any glyph was written.
    fn on_line_done(&mut self, _line_no: usize, _changed: bool) {}
}

/// Observer that ignores everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl RedactionObserver for NoopObserver {}

/// Observer that forwards events to `tracing`.
///
/// Redacted values are logged at TRACE only; DEBUG carries counts.
#[derive(Debug, Clone, Default)]
pub struct TracingObserver {
    document: String,
}

impl TracingObserver {
    /// Create an observer tagging events with a document name.
    pub fn new(document: impl Into<String>) -> Self {
        Self {
            document: document.into(),
        }
    }
}

impl RedactionObserver for TracingObserver {
    fn on_entities(&mut self, entities: &EntitySet) {
        tracing::debug!(
            document = %self.document,
            persons = entities.count(EntityType::Person),
            dates = entities.count(EntityType::Date),
            phones = entities.count(EntityType::Phone),
            addresses = entities.count(EntityType::Address),
            emails = entities.count(EntityType::Email),
            "merged entities"
        );
    }

    fn on_topic_terms(&mut self, topics: &[String], terms: &BTreeSet<String>) {
        tracing::debug!(
            document = %self.document,
            topics = ?topics,
            terms = terms.len(),
            "expanded topics"
        );
    }

    fn on_address_parsed(&mut self, line_no: usize, address: &str) {
        tracing::trace!(document = %self.document, line_no, address, "parsed address");
    }

    fn on_literal_redacted(&mut self, line_no: usize, entity_type: EntityType, literal: &str) {
        tracing::trace!(
            document = %self.document,
            line_no,
            entity_type = %entity_type,
            literal,
            "redacted literal"
        );
    }

    fn on_sentence_redacted(&mut self, line_no: usize, sentence: &str) {
        tracing::trace!(document = %self.document, line_no, sentence, "redacted sentence");
    }
}

/// Observer that records events in memory, for tests and audits.
#[derive(Debug, Clone, Default)]
pub struct RecordingObserver {
    /// Literals redacted, as `(line, type, literal)`.
    pub literals: Vec<(usize, EntityType, String)>,
    /// Sentences redacted, as `(line, sentence)`.
    pub sentences: Vec<(usize, String)>,
    /// Addresses reported by the parser, as `(line, address)`.
    pub addresses: Vec<(usize, String)>,
    /// Number of lines that changed.
    pub lines_changed: usize,
}

impl RedactionObserver for RecordingObserver {
    fn on_address_parsed(&mut self, line_no: usize, address: &str) {
        self.addresses.push((line_no, address.to_string()));
    }

    fn on_literal_redacted(&mut self, line_no: usize, entity_type: EntityType, literal: &str) {
        self.literals.push((line_no, entity_type, literal.to_string()));
    }

    fn on_sentence_redacted(&mut self, line_no: usize, sentence: &str) {
        self.sentences.push((line_no, sentence.to_string()));
    }

    fn on_line_done(&mut self, _line_no: usize, changed: bool) {
        if changed {
            self.lines_changed += 1;
        }
    }
}
