//! Entity candidate extraction.
//!
//! Two regex passes run over the full document text:
//!
//! - [`PatternExtractor`]: typed grammars for PERSON, EMAIL, PHONE, ADDRESS
//!   and DATE.
//! - [`extract_titled_names`]: names that follow a salutation such as
//!   "Dear" or "Mr.".
//!
//! Neither pass fails; absent matches simply produce empty lists.
//!
//! # Example
//!
//! ```rust
//! use redactor::extract::PatternExtractor;
//! use redactor::EntityType;
//!
//! let matches = PatternExtractor::new().extract("Contact me at a@b.com or 555-123-4567.");
//! assert_eq!(matches.get(EntityType::Email), ["a@b.com"]);
//! assert_eq!(matches.get(EntityType::Phone), ["555-123-4567"]);
//! ```

pub mod pattern;
pub mod title;

pub use pattern::PatternExtractor;
pub use title::extract_titled_names;
