//! Per-file statistics reports.

use std::fmt;

use serde::Serialize;

use crate::config::RedactionConfig;
use crate::error::Result;
use crate::types::{EntitySet, EntityType};

/// Distinct entity counts for one file, limited to enabled categories.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EntityStats {
    /// File name the counts belong to.
    pub file: String,
    /// `(category, distinct values)` in redaction order.
    pub counts: Vec<(EntityType, usize)>,
}

impl EntityStats {
    /// Count the entities of every enabled category.
    #[must_use]
    pub fn new(file_name: impl Into<String>, config: &RedactionConfig, entities: &EntitySet) -> Self {
        Self {
            file: file_name.into(),
            counts: config
                .enabled_types()
                .map(|ty| (ty, entities.count(ty)))
                .collect(),
        }
    }

    /// Count for a category, `None` when it was not enabled.
    #[must_use]
    pub fn count(&self, entity_type: EntityType) -> Option<usize> {
        self.counts
            .iter()
            .find(|(ty, _)| *ty == entity_type)
            .map(|(_, n)| *n)
    }

    /// The plain-text report.
    #[must_use]
    pub fn render(&self) -> String {
        self.to_string()
    }

    /// The report as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl fmt::Display for EntityStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "File: {}", self.file)?;
        writeln!(f, "Entity type : Number of occurrences")?;
        writeln!(f)?;
        for (ty, n) in &self.counts {
            writeln!(f, "{ty} : {n}")?;
        }
        writeln!(f)
    }
}
