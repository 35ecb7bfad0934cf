//! Merging extractor output into one entity set.

use crate::geo::Gazetteer;
use crate::ner;
use crate::types::{EntitySet, EntityType, PatternMatches, RecognizedEntity};

/// Combines pattern matches, titled names, recognizer spans and gazetteer
/// hits into a deduplicated [`EntitySet`].
///
/// # Example
///
/// ```
/// use redactor::geo::Gazetteer;
/// use redactor::merge::EntityMerger;
/// use redactor::types::{EntityType, PatternMatches};
///
/// let geo = Gazetteer::builtin();
/// let merger = EntityMerger::new(&geo);
///
/// let mut matches = PatternMatches::new();
/// matches.push(EntityType::Email, "jdoe@example.com");
///
/// let set = merger.merge("Write to jdoe@example.com in Ohio.", &matches, &[], &[]);
/// assert!(set.contains(EntityType::Person, "jdoe"));
/// assert!(set.contains(EntityType::Address, "Ohio"));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct EntityMerger<'a> {
    gazetteer: &'a Gazetteer,
    email_local_part_as_name: bool,
}

impl<'a> EntityMerger<'a> {
    /// Create a merger with the email heuristic enabled.
    #[must_use]
    pub const fn new(gazetteer: &'a Gazetteer) -> Self {
        Self {
            gazetteer,
            email_local_part_as_name: true,
        }
    }

    /// Treat the local part of each email address as a name candidate.
    #[must_use]
    pub const fn email_local_part_as_name(mut self, enabled: bool) -> Self {
        self.email_local_part_as_name = enabled;
        self
    }

    /// Merge everything found in `text`.
    #[must_use]
    pub fn merge(
        &self,
        text: &str,
        patterns: &PatternMatches,
        titled_names: &[String],
        recognized: &[RecognizedEntity],
    ) -> EntitySet {
        let mut set = EntitySet::new();

        set.extend(EntityType::Person, patterns.get(EntityType::Person).iter().cloned());
        set.extend(EntityType::Person, titled_names.iter().cloned());
        set.extend(EntityType::Person, spans(recognized, ner::PERSON));
        if self.email_local_part_as_name {
            set.extend(
                EntityType::Person,
                patterns
                    .get(EntityType::Email)
                    .iter()
                    .filter_map(|email| email.split_once('@').map(|(local, _)| local)),
            );
        }

        set.extend(EntityType::Address, patterns.get(EntityType::Address).iter().cloned());
        set.extend(EntityType::Address, spans(recognized, ner::GPE));
        set.extend(EntityType::Address, self.gazetteer.place_tokens(text));

        for entity_type in [EntityType::Date, EntityType::Phone, EntityType::Email] {
            set.extend(entity_type, patterns.get(entity_type).iter().cloned());
        }

        set
    }
}

fn spans<'e>(recognized: &'e [RecognizedEntity], label: &'e str) -> impl Iterator<Item = &'e str> {
    recognized
        .iter()
        .filter(move |e| e.label == label)
        .map(|e| e.text.as_str())
}
