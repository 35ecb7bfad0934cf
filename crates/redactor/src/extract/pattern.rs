//! Regex grammars for PII candidates.
//!
//! Each [`EntityType`] has one compiled grammar. Matching is case-sensitive;
//! the PERSON and ADDRESS grammars rely on capitalization.

use std::sync::LazyLock;

use regex::Regex;

use crate::types::{EntityType, PatternMatches};

const MONTHS_LONG: &str =
    "(?:January|February|March|April|May|June|July|August|September|October|November|December)";
const MONTHS_SHORT: &str = "(?:Jan|Feb|Mar|Apr|May|Jun|Jul|Aug|Sep|Oct|Nov|Dec)";
const WEEKDAYS_SHORT: &str = "(?:Mon|Tue|Wed|Thu|Fri|Sat|Sun)";

/// Closed vocabulary of street suffixes.
const STREET_SUFFIX: &str = "(?:St|Street|Ave|Avenue|Blvd|Boulevard|Rd|Road|Lane|Ln|Drive|Dr|Plaza|Way|Terrace|Court|Square|Loop|Parkway|Str)";

/// Optional sub-unit after the street: floor, suite, apartment and so on.
const SUB_UNIT: &str =
    r"(?:,?\s(?:\d+\s)?(?:[A-Za-z]+\s)?(?:Floor|Fl|Suite|Ste|Room|Apt|Unit|#)\s?\d+[A-Za-z]?)?";

/// Optional `, City, ST 12345` tail.
const CITY_STATE_ZIP: &str = r"(?:,?\s(?:[A-Za-z]+\s?)+,?\s?[A-Z]{2}\s?\d{5}(?:-\d{4})?)?";

static PERSON_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b[A-Z][a-z]+\s[A-Z][a-z]+\b").expect("Person pattern is a valid regex")
});

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}\b")
        .expect("Email pattern is a valid regex")
});

// Digit context around the number is checked in `find_phones`.
static PHONE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:\+?\d{1,3}[-.\s]?)?\(?\d{3}\)?[-.\s]?\d{3}[-.\s]?\d{4}")
        .expect("Phone pattern is a valid regex")
});

static ADDRESS_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"\b\d+\s(?:[A-Za-z]+\s?)+{STREET_SUFFIX}\b{SUB_UNIT}{CITY_STATE_ZIP}"
    ))
    .expect("Address pattern is a valid regex")
});

static DATE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    let grammars = [
        // 14th March 1879
        format!(r"\b\d{{1,2}}(?:st|nd|rd|th)?\s{MONTHS_LONG}\s\d{{4}}\b"),
        // 03/14/1879, 14-03-79, 14.03.1879
        r"\b\d{1,2}[-/.]\d{1,2}[-/.]\d{2,4}\b".to_string(),
        // March 14, 1879
        format!(r"\b{MONTHS_LONG}\s\d{{1,2}},\s\d{{4}}\b"),
        // March 14
        format!(r"\b{MONTHS_LONG} \d{{1,2}}\b"),
        // Tue, 14 Mar 1879
        format!(r"\b{WEEKDAYS_SHORT},\s\d{{1,2}}\s{MONTHS_SHORT}\s\d{{4}}\b"),
    ];
    Regex::new(&grammars.join("|")).expect("Date pattern is a valid regex")
});

/// Applies the fixed regex grammars to raw text.
#[derive(Debug, Clone, Copy, Default)]
pub struct PatternExtractor;

impl PatternExtractor {
    /// Create a new extractor.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Extract candidates of every type.
    ///
    /// Types with no match read back as empty lists.
    #[must_use]
    pub fn extract(&self, text: &str) -> PatternMatches {
        let mut matches = PatternMatches::new();
        for entity_type in EntityType::ALL {
            for value in self.extract_type(text, entity_type) {
                matches.push(entity_type, value);
            }
        }
        matches
    }

    /// Extract candidates of a single type, in document order.
    #[must_use]
    pub fn extract_type(&self, text: &str, entity_type: EntityType) -> Vec<String> {
        let pattern = match entity_type {
            EntityType::Person => &*PERSON_PATTERN,
            EntityType::Email => &*EMAIL_PATTERN,
            EntityType::Address => &*ADDRESS_PATTERN,
            EntityType::Date => &*DATE_PATTERN,
            EntityType::Phone => return find_phones(text),
        };

        pattern
            .find_iter(text)
            .map(|m| m.as_str().to_string())
            .collect()
    }
}

/// Scan for phone numbers that are not part of a longer digit run.
///
/// A candidate is rejected when a digit sits right before it, or when it is
/// followed by another digit or a decimal continuation (`.` then a digit).
/// After a rejection the scan resumes one character past the rejected start.
fn find_phones(text: &str) -> Vec<String> {
    let mut phones = Vec::new();
    let mut pos = 0;

    while let Some(m) = PHONE_PATTERN.find_at(text, pos) {
        if preceded_by_digit(text, m.start()) || followed_by_number(text, m.end()) {
            let step = text[m.start()..].chars().next().map_or(1, char::len_utf8);
            pos = m.start() + step;
            continue;
        }
        phones.push(m.as_str().to_string());
        pos = m.end();
    }

    phones
}

fn preceded_by_digit(text: &str, start: usize) -> bool {
    text[..start]
        .chars()
        .next_back()
        .is_some_and(|c| c.is_ascii_digit())
}

fn followed_by_number(text: &str, end: usize) -> bool {
    let mut rest = text[end..].chars();
    match rest.next() {
        Some(c) if c.is_ascii_digit() => true,
        Some('.') => rest.next().is_some_and(|c| c.is_ascii_digit()),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extract(text: &str, entity_type: EntityType) -> Vec<String> {
        PatternExtractor::new().extract_type(text, entity_type)
    }

    #[test]
    fn person_two_capitalized_words() {
        let names = extract("Venkata Avinash met Grant on Monday.", EntityType::Person);
        assert_eq!(names, ["Venkata Avinash"]);
    }

    #[test]
    fn person_requires_capitalization() {
        assert!(extract("albert einstein", EntityType::Person).is_empty());
    }

    #[test]
    fn email_basic() {
        let emails = extract("write to grant@gmail.com today", EntityType::Email);
        assert_eq!(emails, ["grant@gmail.com"]);
    }

    #[test]
    fn email_multi_segment_domain() {
        let emails = extract("x.y@mail.cs.ufl.edu", EntityType::Email);
        assert_eq!(emails, ["x.y@mail.cs.ufl.edu"]);
    }

    #[test]
    fn phone_formats() {
        assert_eq!(extract("call 658-856-4967 now", EntityType::Phone), ["658-856-4967"]);
        assert_eq!(extract("call (352) 555.0199", EntityType::Phone), ["(352) 555.0199"]);
        assert_eq!(
            extract("call +1 352 555 0199", EntityType::Phone),
            ["+1 352 555 0199"]
        );
    }

    #[test]
    fn phone_at_sentence_end() {
        assert_eq!(
            extract("Contact me at a@b.com or 555-123-4567.", EntityType::Phone),
            ["555-123-4567"]
        );
    }

    #[test]
    fn phone_not_inside_longer_number() {
        assert!(extract("account 98765432109876543210", EntityType::Phone).is_empty());
        assert!(extract("ratio 555-123-4567.25", EntityType::Phone).is_empty());
    }

    #[test]
    fn address_with_city_state_zip() {
        let addresses = extract(
            "He lived at 112 Mercer St, Princeton, NJ 08540 for years.",
            EntityType::Address,
        );
        assert_eq!(addresses, ["112 Mercer St, Princeton, NJ 08540"]);
    }

    #[test]
    fn address_with_sub_unit() {
        let addresses = extract("Ship to 350 Fifth Avenue Floor 34 please", EntityType::Address);
        assert_eq!(addresses, ["350 Fifth Avenue Floor 34"]);
    }

    #[test]
    fn date_grammars() {
        let text = "Born March 14, 1879; moved 14th March 1880; \
                    filed 03/14/1881; seen June 5 and Tue, 14 Mar 1882.";
        let dates = extract(text, EntityType::Date);
        assert_eq!(
            dates,
            [
                "March 14, 1879",
                "14th March 1880",
                "03/14/1881",
                "June 5",
                "Tue, 14 Mar 1882"
            ]
        );
    }

    #[test]
    fn extract_fills_every_type() {
        let matches = PatternExtractor::new().extract("Contact me at a@b.com or 555-123-4567.");
        assert_eq!(matches.get(EntityType::Email), ["a@b.com"]);
        assert_eq!(matches.get(EntityType::Phone), ["555-123-4567"]);
        assert!(matches.get(EntityType::Date).is_empty());
    }

    #[test]
    fn no_matches_is_not_an_error() {
        assert!(PatternExtractor::new().extract("nothing to see here").is_empty());
    }
}
