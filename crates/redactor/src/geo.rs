//! Geography reference data.
//!
//! The [`Gazetteer`] holds closed lists of US state abbreviations, US state
//! names, country names and ISO 3166-1 alpha-2 codes. The entity merger uses
//! it to flag bare place tokens in a document as ADDRESS candidates.

mod data;

use std::collections::HashSet;

/// Literal token always treated as a place.
const USA: &str = "USA";

/// Closed lists of place names and codes.
#[derive(Debug, Clone)]
pub struct Gazetteer {
    state_abbreviations: HashSet<String>,
    state_names: HashSet<String>,
    country_names: HashSet<String>,
    country_codes: HashSet<String>,
}

impl Default for Gazetteer {
    fn default() -> Self {
        Self::builtin()
    }
}

impl Gazetteer {
    /// The built-in US states and ISO 3166-1 countries.
    #[must_use]
    pub fn builtin() -> Self {
        Self {
            state_abbreviations: data::US_STATES.iter().map(|(a, _)| (*a).to_string()).collect(),
            state_names: data::US_STATES.iter().map(|(_, n)| (*n).to_string()).collect(),
            country_names: data::COUNTRIES.iter().map(|(_, n)| (*n).to_string()).collect(),
            country_codes: data::COUNTRIES.iter().map(|(c, _)| (*c).to_string()).collect(),
        }
    }

    /// An empty gazetteer that matches nothing but `USA`.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            state_abbreviations: HashSet::new(),
            state_names: HashSet::new(),
            country_names: HashSet::new(),
            country_codes: HashSet::new(),
        }
    }

    /// Add a country name.
    #[must_use]
    pub fn with_country(mut self, name: impl Into<String>) -> Self {
        self.country_names.insert(name.into());
        self
    }

    /// US state abbreviations, e.g. `FL`.
    pub fn state_abbreviations(&self) -> impl Iterator<Item = &str> {
        self.state_abbreviations.iter().map(String::as_str)
    }

    /// US state names, e.g. `Florida`.
    pub fn state_names(&self) -> impl Iterator<Item = &str> {
        self.state_names.iter().map(String::as_str)
    }

    /// Check a single, already normalized token. Matching is case-sensitive.
    #[must_use]
    pub fn is_place(&self, token: &str) -> bool {
        (token.len() == 2 && self.state_abbreviations.contains(token))
            || self.state_names.contains(token)
            || self.country_names.contains(token)
            || self.country_codes.contains(token)
            || token == USA
    }

    /// Whitespace-separated tokens of `text` that name a place.
    ///
    /// Surrounding `.` and `,` are trimmed before the lookup and the trimmed
    /// token is what gets returned. Only single-token names can match.
    pub fn place_tokens<'a>(&'a self, text: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        text.split_whitespace()
            .map(|token| token.trim_matches(|c| c == '.' || c == ','))
            .filter(|token| !token.is_empty() && self.is_place(token))
    }
}
