//! Names introduced by a salutation ("Dear", "Mr.", "Prof." ...).

use std::sync::LazyLock;

use regex::{Captures, Regex};

// The salutation is case-insensitive; the name tokens must be capitalized.
static TITLE_NAME_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"\b(?i:Dear|Mr\.|Mrs\.|Ms\.|Dr\.|Prof\.)\s+([A-Z][a-z]+(?:\s+[A-Z][a-z]+)*)\b(?:\s+(Jr\.|Sr\.|III\b|IV\b))?",
    )
    .expect("Title pattern is a valid regex")
});

/// Extract names that follow a salutation.
///
/// The salutation itself is dropped. A generational suffix (Jr., Sr., III,
/// IV) is kept and joined to the name with a single space.
#[must_use]
pub fn extract_titled_names(text: &str) -> Vec<String> {
    TITLE_NAME_PATTERN
        .captures_iter(text)
        .map(|caps| titled_name(text, &caps))
        .collect()
}

fn titled_name(text: &str, caps: &Captures<'_>) -> String {
    let Some(name) = caps.get(1) else {
        return String::new();
    };
    if let Some(suffix) = caps.get(2) {
        return format!("{} {}", name.as_str(), suffix.as_str());
    }

    // "Jr" and "Sr" also look like capitalized words; reclaim them as a suffix.
    if text[name.end()..].starts_with('.') {
        for abbrev in ["Jr", "Sr"] {
            if let Some(head) = name.as_str().strip_suffix(abbrev) {
                if head.ends_with(char::is_whitespace) && !head.trim_end().is_empty() {
                    return format!("{} {abbrev}.", head.trim_end());
                }
            }
        }
    }
    name.as_str().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn salutations() {
        let names = extract_titled_names("Dear Grant, please thank Mrs. Ada Lovelace and Prof. Turing.");
        assert_eq!(names, ["Grant", "Ada Lovelace", "Turing"]);
    }

    #[test]
    fn salutation_is_case_insensitive() {
        assert_eq!(extract_titled_names("dear Grant"), ["Grant"]);
        assert_eq!(extract_titled_names("MR. Smith"), ["Smith"]);
    }

    #[test]
    fn generational_suffix() {
        assert_eq!(
            extract_titled_names("Mr. Martin Luther King Jr. spoke."),
            ["Martin Luther King Jr."]
        );
        assert_eq!(extract_titled_names("Dr. Henry Ford III"), ["Henry Ford III"]);
    }

    #[test]
    fn lowercase_name_is_not_a_name() {
        assert!(extract_titled_names("Dear friend, hello").is_empty());
    }
}
