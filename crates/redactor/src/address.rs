//! Full postal address parsing.
//!
//! The redaction engine hands every line to an [`AddressParser`] before any
//! other replacement happens, and blacks out each reported address verbatim.
//! Parsers must therefore return exact substrings of the line.

use std::sync::LazyLock;

use regex::Regex;

use crate::geo::Gazetteer;

/// Country code the default parser understands.
pub const DEFAULT_COUNTRY: &str = "US";

/// Finds complete postal addresses in a single line of text.
pub trait AddressParser: Send + Sync {
    /// Return every address in `line`, verbatim, for the given country code.
    ///
    /// Unsupported countries and malformed addresses yield nothing.
    fn parse(&self, line: &str, country: &str) -> Vec<String>;
}

/// A parser that never finds anything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopAddressParser;

impl AddressParser for NoopAddressParser {
    fn parse(&self, _line: &str, _country: &str) -> Vec<String> {
        Vec::new()
    }
}

const STREET_TYPES: &str = "Street|St|Avenue|Ave|Av|Boulevard|Blvd|Road|Rd|Drive|Dr|Lane|Ln|Court|Ct|Place|Pl|Way|Terrace|Ter|Parkway|Pkwy|Highway|Hwy|Circle|Cir|Square|Sq|Plaza|Plz|Loop|Trail|Trl|Alley|Aly";

const DIRECTIONS: &str = "NE|NW|SE|SW|N|S|E|W|North|South|East|West";

const UNIT_TYPES: &str = "Apartment|Apt|Suite|Ste|Unit|Floor|Fl|Room|Rm|Building|Bldg|#";

static US_ADDRESS_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    let geo = Gazetteer::builtin();
    let mut states: Vec<&str> = geo.state_names().chain(geo.state_abbreviations()).collect();
    // Longest first so "West Virginia" wins over "Virginia".
    states.sort_by_key(|s| std::cmp::Reverse(s.len()));
    let states = states
        .iter()
        .map(|s| regex::escape(s))
        .collect::<Vec<_>>()
        .join("|");

    let pattern = format!(
        concat!(
            r"\b\d{{1,6}}[A-Za-z]?",
            r"(?:\s+(?:{dirs})\.?)?",
            r"(?:\s+[A-Z0-9][A-Za-z0-9'-]*){{1,4}}",
            r"\s+(?:{types})\b\.?",
            r"(?:\s+(?:{dirs})\b\.?)?",
            r"(?:,?\s+(?:{units})\.?\s*#?[A-Za-z0-9-]+)?",
            r",?\s+[A-Z][A-Za-z.'-]*(?:\s+[A-Z][A-Za-z.'-]*){{0,3}}",
            r",?\s+(?:{states})",
            r",?\s+\d{{5}}(?:-\d{{4}})?\b",
        ),
        dirs = DIRECTIONS,
        types = STREET_TYPES,
        units = UNIT_TYPES,
        states = states,
    );
    Regex::new(&pattern).expect("US address pattern is a valid regex")
});

/// Parser for complete US addresses.
///
/// An address needs a street number, street name and type, an optional
/// unit, then city, state (name or abbreviation) and ZIP code.
#[derive(Debug, Clone, Copy, Default)]
pub struct UsAddressParser;

impl UsAddressParser {
    /// Create a new parser.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl AddressParser for UsAddressParser {
    fn parse(&self, line: &str, country: &str) -> Vec<String> {
        if !country.eq_ignore_ascii_case(DEFAULT_COUNTRY) {
            return Vec::new();
        }
        US_ADDRESS_PATTERN
            .find_iter(line)
            .map(|m| m.as_str().to_string())
            .collect()
    }
}
