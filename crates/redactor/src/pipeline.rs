//! Whole-document redaction.
//!
//! A [`Redactor`] owns the collaborators (recognizer, address parser,
//! lexical database and gazetteer) and runs a document through extraction,
//! merging, topic expansion and line-by-line redaction.

use std::collections::BTreeSet;

use crate::address::{AddressParser, DEFAULT_COUNTRY, UsAddressParser};
use crate::config::RedactionConfig;
use crate::expand::{ConceptExpander, LexicalDatabase, Thesaurus};
use crate::extract::{PatternExtractor, extract_titled_names};
use crate::geo::Gazetteer;
use crate::merge::EntityMerger;
use crate::ner::{EntityRecognizer, RuleRecognizer};
use crate::observer::{NoopObserver, RedactionObserver};
use crate::redact::RedactionEngine;
use crate::types::EntitySet;

/// Result of redacting one document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RedactedDocument {
    /// The redacted text, with the input's line structure.
    pub text: String,
    /// Entities merged from the original text.
    pub entities: EntitySet,
    /// Topic terms used for sentence redaction.
    pub topic_terms: BTreeSet<String>,
}

/// Document redactor.
///
/// # Example
///
/// ```rust
/// use redactor::{RedactionConfig, Redactor};
///
/// let redactor = Redactor::new();
/// let config = RedactionConfig::new().phones(true);
/// let doc = redactor.redact("Call 555-123-4567 today.\n", &config);
/// assert_eq!(doc.text, "Call ████████████ today.\n");
/// ```
pub struct Redactor {
    extractor: PatternExtractor,
    recognizer: Box<dyn EntityRecognizer>,
    address_parser: Box<dyn AddressParser>,
    lexicon: Option<Box<dyn LexicalDatabase>>,
    gazetteer: Gazetteer,
    email_local_part_as_name: bool,
    country: String,
}

impl std::fmt::Debug for Redactor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Redactor")
            .field("recognizer", &self.recognizer.name())
            .field("has_lexicon", &self.lexicon.is_some())
            .field("email_local_part_as_name", &self.email_local_part_as_name)
            .field("country", &self.country)
            .finish_non_exhaustive()
    }
}

impl Default for Redactor {
    fn default() -> Self {
        Self::new()
    }
}

impl Redactor {
    /// Create a redactor with the built-in collaborators.
    #[must_use]
    pub fn new() -> Self {
        RedactorBuilder::new().build()
    }

    /// Start building a redactor.
    #[must_use]
    pub fn builder() -> RedactorBuilder {
        RedactorBuilder::new()
    }

    /// Extract and merge the entities of a document.
    #[must_use]
    pub fn entities(&self, text: &str) -> EntitySet {
        let patterns = self.extractor.extract(text);
        let titled = extract_titled_names(text);
        let recognized = self.recognizer.recognize(text);
        EntityMerger::new(&self.gazetteer)
            .email_local_part_as_name(self.email_local_part_as_name)
            .merge(text, &patterns, &titled, &recognized)
    }

    /// Expand topic seeds into the terms used for sentence redaction.
    ///
    /// A seed the lexicon does not know contributes nothing. Without a
    /// lexicon the trimmed seeds are used as they are.
    #[must_use]
    pub fn topic_terms(&self, topics: &[String]) -> BTreeSet<String> {
        let seeds = topics.iter().map(|t| t.trim()).filter(|t| !t.is_empty());
        match &self.lexicon {
            Some(lexicon) => ConceptExpander::new(lexicon.as_ref()).expand_all(seeds),
            None => seeds.map(ToString::to_string).collect(),
        }
    }

    /// Redact a document without observing it.
    #[must_use]
    pub fn redact(&self, text: &str, config: &RedactionConfig) -> RedactedDocument {
        self.redact_document(text, config, &mut NoopObserver)
    }

    /// Redact a document, reporting progress to `observer`.
    ///
    /// Lines are numbered from 1. Line terminators (`\n` or `\r\n`) are
    /// copied through untouched.
    pub fn redact_document(
        &self,
        text: &str,
        config: &RedactionConfig,
        observer: &mut impl RedactionObserver,
    ) -> RedactedDocument {
        let entities = self.entities(text);
        observer.on_entities(&entities);

        let topic_terms = self.topic_terms(&config.topics);
        if !config.topics.is_empty() {
            observer.on_topic_terms(&config.topics, &topic_terms);
        }

        let engine = RedactionEngine::new(self.address_parser.as_ref(), &self.country);
        let mut redacted = String::with_capacity(text.len() * 2);
        for (index, raw) in text.split_inclusive('\n').enumerate() {
            let (line, terminator) = split_terminator(raw);
            redacted.push_str(&engine.redact_line_observed(
                line,
                &entities,
                config,
                &topic_terms,
                index + 1,
                observer,
            ));
            redacted.push_str(terminator);
        }

        RedactedDocument {
            text: redacted,
            entities,
            topic_terms,
        }
    }
}

fn split_terminator(raw: &str) -> (&str, &str) {
    if let Some(line) = raw.strip_suffix("\r\n") {
        (line, "\r\n")
    } else if let Some(line) = raw.strip_suffix('\n') {
        (line, "\n")
    } else {
        (raw, "")
    }
}

/// Builder for [`Redactor`].
pub struct RedactorBuilder {
    recognizer: Box<dyn EntityRecognizer>,
    address_parser: Box<dyn AddressParser>,
    lexicon: Option<Box<dyn LexicalDatabase>>,
    gazetteer: Gazetteer,
    email_local_part_as_name: bool,
    country: String,
}

impl std::fmt::Debug for RedactorBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RedactorBuilder")
            .field("recognizer", &self.recognizer.name())
            .field("country", &self.country)
            .finish_non_exhaustive()
    }
}

impl Default for RedactorBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl RedactorBuilder {
    /// Start from the built-in collaborators.
    #[must_use]
    pub fn new() -> Self {
        Self {
            recognizer: Box::new(RuleRecognizer::new()),
            address_parser: Box::new(UsAddressParser::new()),
            lexicon: Some(Box::new(Thesaurus::builtin())),
            gazetteer: Gazetteer::builtin(),
            email_local_part_as_name: true,
            country: DEFAULT_COUNTRY.to_string(),
        }
    }

    /// Use a different named-entity recognizer.
    #[must_use]
    pub fn recognizer(mut self, recognizer: impl EntityRecognizer + 'static) -> Self {
        self.recognizer = Box::new(recognizer);
        self
    }

    /// Use a different address parser.
    #[must_use]
    pub fn address_parser(mut self, parser: impl AddressParser + 'static) -> Self {
        self.address_parser = Box::new(parser);
        self
    }

    /// Expand topics through a lexical database instead of the bundled
    /// thesaurus.
    #[must_use]
    pub fn lexicon(mut self, lexicon: impl LexicalDatabase + 'static) -> Self {
        self.lexicon = Some(Box::new(lexicon));
        self
    }

    /// Match topic seeds literally, with no lexical expansion.
    #[must_use]
    pub fn without_lexicon(mut self) -> Self {
        self.lexicon = None;
        self
    }

    /// Use a different gazetteer.
    #[must_use]
    pub fn gazetteer(mut self, gazetteer: Gazetteer) -> Self {
        self.gazetteer = gazetteer;
        self
    }

    /// Treat email local-parts as names (on by default).
    #[must_use]
    pub const fn email_local_part_as_name(mut self, enabled: bool) -> Self {
        self.email_local_part_as_name = enabled;
        self
    }

    /// Country code handed to the address parser.
    #[must_use]
    pub fn country(mut self, country: impl Into<String>) -> Self {
        self.country = country.into();
        self
    }

    /// Build the redactor.
    #[must_use]
    pub fn build(self) -> Redactor {
        Redactor {
            extractor: PatternExtractor::new(),
            recognizer: self.recognizer,
            address_parser: self.address_parser,
            lexicon: self.lexicon,
            gazetteer: self.gazetteer,
            email_local_part_as_name: self.email_local_part_as_name,
            country: self.country,
        }
    }
}
