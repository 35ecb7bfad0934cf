//! Convenient re-exports for common redactor usage.
//!
//! ```rust
//! use redactor::prelude::*;
//!
//! let config = RedactionConfig::all().topic("dog");
//! assert!(config.is_enabled(EntityType::Phone));
//! ```

// Pipeline
pub use crate::pipeline::{RedactedDocument, Redactor, RedactorBuilder};

// Configuration
pub use crate::config::{RedactionConfig, RunConfig, StatsTarget};

// Error handling
pub use crate::error::{RedactError, Result};

// Common types
pub use crate::types::{EntitySet, EntityType, PatternMatches, RecognizedEntity};

// Collaborators
pub use crate::address::{AddressParser, UsAddressParser};
pub use crate::expand::{LexicalDatabase, Sense, Thesaurus};
pub use crate::geo::Gazetteer;
pub use crate::ner::{EntityRecognizer, RuleRecognizer};
pub use crate::observer::{NoopObserver, RedactionObserver, TracingObserver};

// Output
pub use crate::batch::{BatchRunner, BatchSummary};
pub use crate::report::EntityStats;
