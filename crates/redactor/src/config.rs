//! Configuration types for redactor.
//!
//! [`RedactionConfig`] holds the per-document switches handed to the
//! engine. [`file::RunConfig`] holds batch settings and can be loaded from a
//! TOML file.

pub mod file;

use crate::types::EntityType;

pub use file::{RunConfig, StatsTarget};

/// Which categories to black out, plus topic seeds for sentence redaction.
///
/// Built once per run and passed by reference; nothing in the pipeline
/// mutates it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RedactionConfig {
    /// Black out PERSON literals.
    pub redact_names: bool,

    /// Black out DATE literals.
    pub redact_dates: bool,

    /// Black out PHONE literals.
    pub redact_phones: bool,

    /// Black out ADDRESS literals and parsed addresses.
    pub redact_address: bool,

    /// Topic seed words, in the order given.
    pub topics: Vec<String>,
}

impl RedactionConfig {
    /// Create a configuration with everything disabled.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a configuration with every category enabled and no topics.
    #[must_use]
    pub fn all() -> Self {
        Self::new().names(true).dates(true).phones(true).address(true)
    }

    /// Enable or disable name redaction.
    #[must_use]
    pub const fn names(mut self, enabled: bool) -> Self {
        self.redact_names = enabled;
        self
    }

    /// Enable or disable date redaction.
    #[must_use]
    pub const fn dates(mut self, enabled: bool) -> Self {
        self.redact_dates = enabled;
        self
    }

    /// Enable or disable phone redaction.
    #[must_use]
    pub const fn phones(mut self, enabled: bool) -> Self {
        self.redact_phones = enabled;
        self
    }

    /// Enable or disable address redaction.
    #[must_use]
    pub const fn address(mut self, enabled: bool) -> Self {
        self.redact_address = enabled;
        self
    }

    /// Add a topic seed.
    #[must_use]
    pub fn topic(mut self, topic: impl Into<String>) -> Self {
        self.topics.push(topic.into());
        self
    }

    /// Set all topic seeds.
    #[must_use]
    pub fn topics<I, S>(mut self, topics: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.topics = topics.into_iter().map(Into::into).collect();
        self
    }

    /// Whether a category is blacked out. EMAIL never is.
    #[must_use]
    pub const fn is_enabled(&self, entity_type: EntityType) -> bool {
        match entity_type {
            EntityType::Person => self.redact_names,
            EntityType::Date => self.redact_dates,
            EntityType::Phone => self.redact_phones,
            EntityType::Address => self.redact_address,
            EntityType::Email => false,
        }
    }

    /// Enabled categories, in redaction order.
    pub fn enabled_types(&self) -> impl Iterator<Item = EntityType> + '_ {
        EntityType::REDACTION_ORDER
            .into_iter()
            .filter(|t| self.is_enabled(*t))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_disables_everything() {
        let config = RedactionConfig::new();
        assert_eq!(config.enabled_types().count(), 0);
        assert!(config.topics.is_empty());
    }

    #[test]
    fn builder() {
        let config = RedactionConfig::new()
            .names(true)
            .address(true)
            .topic("dog")
            .topic("call");
        assert!(config.is_enabled(EntityType::Person));
        assert!(!config.is_enabled(EntityType::Date));
        assert_eq!(
            config.enabled_types().collect::<Vec<_>>(),
            [EntityType::Person, EntityType::Address]
        );
        assert_eq!(config.topics, ["dog", "call"]);
    }

    #[test]
    fn email_is_never_redacted() {
        assert!(!RedactionConfig::all().is_enabled(EntityType::Email));
    }
}
