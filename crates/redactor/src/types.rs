//! Common types for redactor.
//!
//! This module defines the entity categories and the two collections that
//! flow through the pipeline: ordered per-extractor match lists and the
//! deduplicated, merged [`EntitySet`] handed to the redaction engine.

use std::cmp::Reverse;
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use serde::{Deserialize, Serialize};

/// Category of a detected entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EntityType {
    /// A person's name.
    Person,
    /// An email address.
    Email,
    /// A phone number.
    Phone,
    /// A street address or place name.
    Address,
    /// A calendar date.
    Date,
}

impl EntityType {
    /// Every entity type.
    pub const ALL: [Self; 5] = [
        Self::Person,
        Self::Email,
        Self::Phone,
        Self::Address,
        Self::Date,
    ];

    /// Categories that can be redacted, in the order they are applied.
    ///
    /// When literals of two categories overlap, the earlier category is
    /// blacked out first and the later literal no longer matches.
    pub const REDACTION_ORDER: [Self; 4] = [Self::Person, Self::Date, Self::Phone, Self::Address];

    /// The upper-case label used in reports.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Person => "PERSON",
            Self::Email => "EMAIL",
            Self::Phone => "PHONE",
            Self::Address => "ADDRESS",
            Self::Date => "DATE",
        }
    }
}

impl fmt::Display for EntityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Ordered matches produced by a single extractor, one list per type.
///
/// Lists keep document order and may contain duplicates.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PatternMatches {
    by_type: BTreeMap<EntityType, Vec<String>>,
}

impl PatternMatches {
    /// Create an empty result.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a match for the given type.
    pub fn push(&mut self, entity_type: EntityType, value: impl Into<String>) {
        self.by_type.entry(entity_type).or_default().push(value.into());
    }

    /// Matches for a type, empty if none were found.
    #[must_use]
    pub fn get(&self, entity_type: EntityType) -> &[String] {
        self.by_type.get(&entity_type).map_or(&[], Vec::as_slice)
    }

    /// Total number of matches across all types.
    #[must_use]
    pub fn len(&self) -> usize {
        self.by_type.values().map(Vec::len).sum()
    }

    /// Check if no type matched anything.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A span reported by a named-entity recognizer.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RecognizedEntity {
    /// The recognizer's label, e.g. `PERSON` or `GPE`.
    pub label: String,
    /// The surface text of the span.
    pub text: String,
}

impl RecognizedEntity {
    /// Create a new recognized entity.
    pub fn new(label: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            text: text.into(),
        }
    }
}

/// Distinct literal values per entity type.
///
/// Empty strings are never stored: replacing an empty literal would corrupt
/// the text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntitySet {
    by_type: BTreeMap<EntityType, BTreeSet<String>>,
}

impl EntitySet {
    /// Create an empty set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a literal. Returns `false` if it was empty or already present.
    pub fn insert(&mut self, entity_type: EntityType, value: impl Into<String>) -> bool {
        let value = value.into();
        if value.is_empty() {
            return false;
        }
        self.by_type.entry(entity_type).or_default().insert(value)
    }

    /// Insert every literal from an iterator.
    pub fn extend<I, S>(&mut self, entity_type: EntityType, values: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for value in values {
            self.insert(entity_type, value);
        }
    }

    /// Check whether a literal is present.
    #[must_use]
    pub fn contains(&self, entity_type: EntityType, value: &str) -> bool {
        self.by_type
            .get(&entity_type)
            .is_some_and(|set| set.contains(value))
    }

    /// Number of distinct literals of a type.
    #[must_use]
    pub fn count(&self, entity_type: EntityType) -> usize {
        self.by_type.get(&entity_type).map_or(0, BTreeSet::len)
    }

    /// Check if the set holds no literals at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.by_type.values().all(BTreeSet::is_empty)
    }

    /// Literals of a type in redaction order: longest first, then lexicographic.
    ///
    /// Longer literals go first so that a name like "John Smith" is blacked
    /// out whole before "John" alone gets a chance to split it.
    #[must_use]
    pub fn literals(&self, entity_type: EntityType) -> Vec<&str> {
        let mut literals: Vec<&str> = self
            .by_type
            .get(&entity_type)
            .map(|set| set.iter().map(String::as_str).collect())
            .unwrap_or_default();
        literals.sort_by_key(|s| (Reverse(s.chars().count()), *s));
        literals
    }
}
