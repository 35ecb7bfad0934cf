//! Topic expansion through a lexical database.
//!
//! A topic seed such as `dog` is widened into every synonym, immediate
//! hypernym and immediate hyponym of every sense of the word. The resulting
//! terms drive sentence-level redaction.
//!
//! # Example
//!
//! ```rust
//! use redactor::expand::{ConceptExpander, Sense, Thesaurus};
//!
//! let thesaurus = Thesaurus::new().with_sense(
//!     Sense::new(["dog", "domestic_dog"])
//!         .with_hypernyms(["canine.n.02"])
//!         .with_hyponyms(["puppy.n.01"]),
//! );
//! let terms = ConceptExpander::new(&thesaurus).expand("dog");
//! assert!(terms.contains("domestic dog"));
//! assert!(terms.contains("canine"));
//! assert!(terms.contains("puppy"));
//! ```

pub mod thesaurus;

use std::collections::BTreeSet;
use std::sync::LazyLock;

use regex::Regex;

pub use thesaurus::{Sense, Thesaurus};

/// Sense-disambiguation suffix such as `.n.01`.
static SENSE_SUFFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\.\w\.\d+").expect("Sense suffix pattern is a valid regex"));

/// A read-only lexical database.
pub trait LexicalDatabase: Send + Sync {
    /// Every sense of `word`. Unknown words have no senses.
    fn senses(&self, word: &str) -> Vec<Sense>;
}

/// Expands topic seeds into related terms.
#[derive(Clone, Copy)]
pub struct ConceptExpander<'a> {
    database: &'a dyn LexicalDatabase,
}

impl std::fmt::Debug for ConceptExpander<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConceptExpander").finish_non_exhaustive()
    }
}

impl<'a> ConceptExpander<'a> {
    /// Create an expander over a database.
    #[must_use]
    pub const fn new(database: &'a dyn LexicalDatabase) -> Self {
        Self { database }
    }

    /// Related terms for one concept. Empty for unknown concepts.
    #[must_use]
    pub fn expand(&self, concept: &str) -> BTreeSet<String> {
        let mut terms = BTreeSet::new();
        for sense in self.database.senses(concept) {
            terms.extend(sense.synonyms.iter().map(|s| surface_form(s)));
            terms.extend(
                sense
                    .hypernyms
                    .iter()
                    .chain(&sense.hyponyms)
                    .map(|s| strip_sense_suffix(&surface_form(s))),
            );
        }
        terms.retain(|t| !t.is_empty());
        terms
    }

    /// Union of the expansions of several concepts.
    #[must_use]
    pub fn expand_all<I, S>(&self, concepts: I) -> BTreeSet<String>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        concepts
            .into_iter()
            .flat_map(|c| self.expand(c.as_ref()))
            .collect()
    }
}

fn surface_form(lemma: &str) -> String {
    lemma.replace('_', " ")
}

fn strip_sense_suffix(name: &str) -> String {
    SENSE_SUFFIX.replace_all(name, "").into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn thesaurus() -> Thesaurus {
        Thesaurus::new()
            .with_sense(
                Sense::new(["dog", "domestic_dog", "Canis_familiaris"])
                    .with_hypernyms(["canine.n.02", "domestic_animal.n.01"])
                    .with_hyponyms(["puppy.n.01", "hunting_dog.n.01"]),
            )
            .with_sense(
                Sense::new(["frump", "dog"]).with_hypernyms(["unpleasant_woman.n.01"]),
            )
            .with_sense(Sense::new(["call", "phone", "telephone", "ring"]))
    }

    #[test]
    fn expand_collects_all_relations() {
        let db = thesaurus();
        let terms = ConceptExpander::new(&db).expand("dog");
        for expected in [
            "dog",
            "domestic dog",
            "Canis familiaris",
            "canine",
            "domestic animal",
            "puppy",
            "hunting dog",
            "frump",
            "unpleasant woman",
        ] {
            assert!(terms.contains(expected), "missing {expected}");
        }
        assert!(!terms.iter().any(|t| t.contains(".n.")));
    }

    #[test]
    fn expand_call_includes_phone() {
        let db = thesaurus();
        assert!(ConceptExpander::new(&db).expand("call").contains("phone"));
    }

    #[test]
    fn unknown_concept_is_empty() {
        let db = thesaurus();
        assert!(ConceptExpander::new(&db).expand("zeppelin").is_empty());
    }

    #[test]
    fn expand_is_deterministic() {
        let db = thesaurus();
        let expander = ConceptExpander::new(&db);
        assert_eq!(expander.expand("dog"), expander.expand("dog"));
    }

    #[test]
    fn expand_all_unions() {
        let db = thesaurus();
        let terms = ConceptExpander::new(&db).expand_all(["dog", "call"]);
        assert!(terms.contains("puppy"));
        assert!(terms.contains("telephone"));
    }

    #[test]
    fn sense_suffix_stripping() {
        assert_eq!(strip_sense_suffix("canine.n.02"), "canine");
        assert_eq!(strip_sense_suffix("run.v.11"), "run");
        assert_eq!(strip_sense_suffix("plain"), "plain");
    }
}
