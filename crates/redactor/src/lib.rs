//! redactor: PII blackout redaction for plain-text documents
//!
//! This crate finds personal information in free text (names, dates, phone
//! numbers, addresses) and blacks it out with `█` glyphs, one glyph per
//! character, so the redacted document keeps its exact line structure.
//! Whole sentences can also be blacked out when they mention a topic or
//! one of its lexical relatives.
//!
//! # Features
//!
//! - **Regex grammars** for names, emails, phones, street addresses and dates
//! - **Salutation-aware name extraction** (`Dear`, `Mr.`, `Dr.` ...)
//! - **Pluggable collaborators** for named-entity recognition, postal address
//!   parsing and lexical topic expansion
//! - **Length-preserving redaction** that is idempotent for a fixed entity set
//! - **Per-file statistics** in plain text or JSON
//! - **Batch runner** over a glob of input files
//!
//! # Example
//!
//! ```rust
//! use redactor::prelude::*;
//!
//! let redactor = Redactor::new();
//! let config = RedactionConfig::new().names(true).dates(true);
//!
//! let doc = redactor.redact("Albert Einstein was born on March 14, 1879.", &config);
//! assert_eq!(doc.text, "███████████████ was born on ██████████████.");
//!
//! let stats = EntityStats::new("einstein.txt", &config, &doc.entities);
//! assert!(stats.render().contains("PERSON : 1"));
//! ```

pub mod address;
pub mod batch;
pub mod config;
pub mod error;
pub mod expand;
pub mod extract;
pub mod geo;
pub mod merge;
pub mod ner;
pub mod observer;
pub mod pipeline;
pub mod prelude;
pub mod redact;
pub mod report;
pub mod types;

pub use batch::{BatchRunner, BatchSummary};
pub use config::{RedactionConfig, RunConfig, StatsTarget};
pub use error::{RedactError, Result};
pub use pipeline::{RedactedDocument, Redactor, RedactorBuilder};
pub use redact::BLOCK;
pub use report::EntityStats;
pub use types::{EntitySet, EntityType, PatternMatches, RecognizedEntity};
