//! Named-entity recognition collaborators.
//!
//! The merge step only consults two labels from a recognizer: [`PERSON`]
//! and [`GPE`] (geo-political entity). Any model can be plugged in by
//! implementing [`EntityRecognizer`]; two implementations ship here:
//!
//! - [`NoopRecognizer`]: reports nothing.
//! - [`RuleRecognizer`]: capitalized word runs as people, known
//!   multi-word place names as GPEs.

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;

use crate::types::RecognizedEntity;

/// Label for people.
pub const PERSON: &str = "PERSON";

/// Label for geo-political entities.
pub const GPE: &str = "GPE";

/// A named-entity recognizer over full document text.
pub trait EntityRecognizer: Send + Sync {
    /// Human-readable backend identifier.
    fn name(&self) -> &str;

    /// Recognize entities in `text`, as `(label, surface text)` pairs.
    fn recognize(&self, text: &str) -> Vec<RecognizedEntity>;
}

/// A recognizer that never reports anything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopRecognizer;

impl EntityRecognizer for NoopRecognizer {
    fn name(&self) -> &str {
        "noop"
    }

    fn recognize(&self, _text: &str) -> Vec<RecognizedEntity> {
        Vec::new()
    }
}

static CAPITALIZED_RUN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b([A-Z][a-z]+(?:[ \t]+[A-Z][a-z]+){1,3})\b")
        .expect("Capitalized run pattern is a valid regex")
});

/// Capitalized words that start sentences or name things other than people.
static NAME_STOPWORDS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "The", "This", "That", "These", "Those", "There", "Then", "They", "We", "He", "She",
        "It", "In", "On", "At", "For", "From", "With", "And", "But", "Or", "If", "When",
        "While", "After", "Before", "Dear", "Hello", "Hi", "Thanks", "Thank", "Regards",
        "Best", "Sincerely", "Monday", "Tuesday", "Wednesday", "Thursday", "Friday",
        "Saturday", "Sunday", "January", "February", "March", "April", "May", "June", "July",
        "August", "September", "October", "November", "December", "Street", "Avenue", "Road",
        "North", "South", "East", "West", "New", "United", "University",
    ]
    .into_iter()
    .collect()
});

/// Multi-word place names a token-level gazetteer cannot see.
const PLACE_PHRASES: &[&str] = &[
    "New York",
    "New Jersey",
    "New Mexico",
    "New Hampshire",
    "North Carolina",
    "North Dakota",
    "South Carolina",
    "South Dakota",
    "Rhode Island",
    "West Virginia",
    "United States",
    "United Kingdom",
    "New Zealand",
    "South Africa",
    "Saudi Arabia",
    "Sri Lanka",
    "Costa Rica",
    "Puerto Rico",
    "Hong Kong",
    "Los Angeles",
    "San Francisco",
    "San Diego",
    "Las Vegas",
    "New Orleans",
    "Salt Lake City",
];

/// A rule-based recognizer.
///
/// PERSON: runs of two to four capitalized words on one line, none of which
/// is a common sentence opener, month, weekday or place word. GPE: known
/// multi-word place names found verbatim.
#[derive(Debug, Clone, Default)]
pub struct RuleRecognizer {
    extra_places: Vec<String>,
}

impl RuleRecognizer {
    /// Create a recognizer with the built-in place phrases.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Recognize an additional place phrase.
    #[must_use]
    pub fn with_place(mut self, place: impl Into<String>) -> Self {
        self.extra_places.push(place.into());
        self
    }

    fn places(&self) -> impl Iterator<Item = &str> {
        PLACE_PHRASES
            .iter()
            .copied()
            .chain(self.extra_places.iter().map(String::as_str))
    }
}

impl EntityRecognizer for RuleRecognizer {
    fn name(&self) -> &str {
        "rules"
    }

    fn recognize(&self, text: &str) -> Vec<RecognizedEntity> {
        let mut seen = HashSet::new();
        let mut entities = Vec::new();

        for place in self.places() {
            if text.contains(place) && seen.insert((GPE, place.to_string())) {
                entities.push(RecognizedEntity::new(GPE, place));
            }
        }

        for caps in CAPITALIZED_RUN.captures_iter(text) {
            let Some(run) = caps.get(1) else { continue };
            let run = run.as_str();
            if is_plausible_name(run) && seen.insert((PERSON, run.to_string())) {
                entities.push(RecognizedEntity::new(PERSON, run));
            }
        }

        entities
    }
}

fn is_plausible_name(run: &str) -> bool {
    !run.split_whitespace().any(|word| NAME_STOPWORDS.contains(word))
        && !PLACE_PHRASES.contains(&run)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labelled<'a>(entities: &'a [RecognizedEntity], label: &str) -> Vec<&'a str> {
        entities
            .iter()
            .filter(|e| e.label == label)
            .map(|e| e.text.as_str())
            .collect()
    }

    #[test]
    fn noop_reports_nothing() {
        assert!(NoopRecognizer.recognize("Albert Einstein in New York").is_empty());
    }

    #[test]
    fn rules_find_people_and_places() {
        let entities = RuleRecognizer::new()
            .recognize("Albert Einstein moved to New York. The Institute hired Kurt Godel.");
        assert_eq!(labelled(&entities, PERSON), ["Albert Einstein", "Kurt Godel"]);
        assert_eq!(labelled(&entities, GPE), ["New York"]);
    }

    #[test]
    fn rules_skip_sentence_openers_and_dates() {
        let entities = RuleRecognizer::new().recognize("The Board met on Monday March 3.");
        assert!(labelled(&entities, PERSON).is_empty());
    }

    #[test]
    fn extra_places() {
        let entities = RuleRecognizer::new()
            .with_place("Gainesville")
            .recognize("Office in Gainesville");
        assert_eq!(labelled(&entities, GPE), ["Gainesville"]);
    }
}
