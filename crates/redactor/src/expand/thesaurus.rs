//! In-memory thesaurus snapshot loaded from TOML.
//!
//! The file lists WordNet-style sense groups:
//!
//! ```toml
//! [[sense]]
//! synonyms = ["dog", "domestic_dog", "Canis_familiaris"]
//! hypernyms = ["canine.n.02", "domestic_animal.n.01"]
//! hyponyms = ["puppy.n.01", "hunting_dog.n.01"]
//! ```
//!
//! A word belongs to a sense when it equals one of the sense's synonyms,
//! ignoring case and treating spaces and underscores alike.
//!
//! [`Thesaurus::builtin`] returns the snapshot shipped in `data/thesaurus.toml`.

use std::path::Path;
use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

use super::LexicalDatabase;
use crate::error::{RedactError, Result};

/// One sense of a word: its synonyms and immediate neighbours.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sense {
    /// Lemma names of this sense, underscores for spaces.
    pub synonyms: Vec<String>,
    /// Broader senses, as names like `canine.n.02`.
    #[serde(default)]
    pub hypernyms: Vec<String>,
    /// Narrower senses, as names like `puppy.n.01`.
    #[serde(default)]
    pub hyponyms: Vec<String>,
}

impl Sense {
    /// Create a sense from its synonyms.
    pub fn new<I, S>(synonyms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            synonyms: synonyms.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    /// Set the hypernyms.
    #[must_use]
    pub fn with_hypernyms<I, S>(mut self, hypernyms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.hypernyms = hypernyms.into_iter().map(Into::into).collect();
        self
    }

    /// Set the hyponyms.
    #[must_use]
    pub fn with_hyponyms<I, S>(mut self, hyponyms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.hyponyms = hyponyms.into_iter().map(Into::into).collect();
        self
    }

    fn has_lemma(&self, key: &str) -> bool {
        self.synonyms.iter().any(|s| lemma_key(s) == key)
    }
}

/// Snapshot compiled into the crate.
static BUILTIN: LazyLock<Thesaurus> = LazyLock::new(|| {
    Thesaurus::parse(include_str!("../../data/thesaurus.toml"))
        .expect("Bundled thesaurus is valid TOML")
});

/// A thesaurus snapshot.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Thesaurus {
    #[serde(default, rename = "sense")]
    senses: Vec<Sense>,
}

impl Thesaurus {
    /// Create an empty thesaurus.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a sense.
    #[must_use]
    pub fn with_sense(mut self, sense: Sense) -> Self {
        self.senses.push(sense);
        self
    }

    /// The snapshot bundled with the crate.
    #[must_use]
    pub fn builtin() -> Self {
        BUILTIN.clone()
    }

    /// Parse a thesaurus from TOML text.
    pub fn parse(content: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Load a thesaurus file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| RedactError::read(path, e))?;
        Self::parse(&content).map_err(|source| RedactError::Thesaurus {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Number of senses.
    #[must_use]
    pub fn len(&self) -> usize {
        self.senses.len()
    }

    /// Check if the thesaurus has no senses.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.senses.is_empty()
    }
}

impl LexicalDatabase for Thesaurus {
    fn senses(&self, word: &str) -> Vec<Sense> {
        // Fall back to a crude singular when the word itself is unknown.
        base_forms(word)
            .into_iter()
            .map(|form| {
                let key = lemma_key(&form);
                self.senses
                    .iter()
                    .filter(|sense| sense.has_lemma(&key))
                    .cloned()
                    .collect::<Vec<_>>()
            })
            .find(|senses| !senses.is_empty())
            .unwrap_or_default()
    }
}

fn lemma_key(lemma: &str) -> String {
    lemma.trim().to_lowercase().replace(' ', "_")
}

fn base_forms(word: &str) -> Vec<String> {
    let word = word.trim();
    let mut forms = vec![word.to_string()];
    if let Some(stem) = word.strip_suffix("es") {
        forms.push(stem.to_string());
    }
    if let Some(stem) = word.strip_suffix('s') {
        forms.push(stem.to_string());
    }
    forms
}

#[cfg(test)]
mod tests {
    use super::*;

    const SNAPSHOT: &str = r#"
        [[sense]]
        synonyms = ["dog", "domestic_dog"]
        hypernyms = ["canine.n.02"]
        hyponyms = ["puppy.n.01"]

        [[sense]]
        synonyms = ["hot_dog", "frank"]
    "#;

    #[test]
    fn parse_snapshot() {
        let thesaurus = Thesaurus::parse(SNAPSHOT).unwrap();
        assert_eq!(thesaurus.len(), 2);
        let senses = thesaurus.senses("dog");
        assert_eq!(senses.len(), 1);
        assert_eq!(senses[0].hypernyms, ["canine.n.02"]);
    }

    #[test]
    fn lookup_ignores_case_and_spaces() {
        let thesaurus = Thesaurus::parse(SNAPSHOT).unwrap();
        assert_eq!(thesaurus.senses("Hot Dog").len(), 1);
    }

    #[test]
    fn plural_falls_back_to_singular() {
        let thesaurus = Thesaurus::parse(SNAPSHOT).unwrap();
        assert_eq!(thesaurus.senses("dogs").len(), 1);
    }

    #[test]
    fn unknown_word() {
        let thesaurus = Thesaurus::parse(SNAPSHOT).unwrap();
        assert!(thesaurus.senses("cat").is_empty());
    }

    #[test]
    fn invalid_toml() {
        assert!(Thesaurus::parse("[[sense]]\nsynonyms = 3").is_err());
    }

    #[test]
    fn builtin_snapshot() {
        let thesaurus = Thesaurus::builtin();
        assert!(!thesaurus.is_empty());
        assert!(thesaurus.senses("call").iter().any(|s| s.has_lemma("phone")));
        assert!(thesaurus.senses("zeppelin").is_empty());
    }

    #[test]
    fn load_missing_file() {
        let err = Thesaurus::load("/definitely/not/here.toml").unwrap_err();
        assert!(err.is_per_file());
    }
}
