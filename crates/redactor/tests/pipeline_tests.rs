//! Integration tests for document redaction.

use redactor::address::NoopAddressParser;
use redactor::expand::{Sense, Thesaurus};
use redactor::geo::Gazetteer;
use redactor::ner::{NoopRecognizer, RuleRecognizer};
use redactor::observer::RecordingObserver;
use redactor::redact::{RedactionEngine, blackout};
use redactor::{EntityType, RedactionConfig, Redactor};

const LETTER: &str = "\
To: Mr. John Smith,
Thank you for visiting our office at 221 Baker Street, Springfield, IL 62704 on March 14, 2021.
Please call 352-555-0199 or write to jsmith@example.com.
Our dog walked all the way from Florida. Everyone was tired.
";

fn line(doc: &str, n: usize) -> &str {
    doc.lines().nth(n).unwrap_or_default()
}

#[test]
fn redactor_default() {
    let redactor = Redactor::default();
    assert!(format!("{redactor:?}").contains("rules"));
}

#[test]
fn names_only() {
    let doc = Redactor::new().redact(LETTER, &RedactionConfig::new().names(true));

    assert_eq!(line(&doc.text, 0), format!("To: Mr. {},", blackout("John Smith")));
    // The email local part counts as a name.
    assert!(line(&doc.text, 2).contains("██████@example.com"));
    // Phone and date untouched.
    assert!(doc.text.contains("352-555-0199"));
    assert!(doc.text.contains("March 14, 2021"));
}

#[test]
fn phones_and_dates() {
    let config = RedactionConfig::new().phones(true).dates(true);
    let doc = Redactor::new().redact(LETTER, &config);

    assert!(!doc.text.contains("352-555-0199"));
    assert!(!doc.text.contains("March 14, 2021"));
    assert!(doc.text.contains("John Smith"));
    assert!(doc.entities.contains(EntityType::Phone, "352-555-0199"));
}

#[test]
fn address_parser_and_gazetteer() {
    let doc = Redactor::new().redact(LETTER, &RedactionConfig::new().address(true));

    let address = "221 Baker Street, Springfield, IL 62704";
    assert!(line(&doc.text, 1).contains(&blackout(address)));
    assert!(line(&doc.text, 3).contains(&blackout("Florida")));
}

#[test]
fn topic_sentence() {
    let thesaurus = Thesaurus::new().with_sense(
        Sense::new(["dog", "domestic_dog"]).with_hypernyms(["canine.n.02"]),
    );
    let redactor = Redactor::builder().lexicon(thesaurus).build();
    let doc = redactor.redact(LETTER, &RedactionConfig::new().topic("dog"));

    let expected = format!(
        "{}. Everyone was tired.",
        blackout("Our dog walked all the way from Florida")
    );
    assert_eq!(line(&doc.text, 3), expected);
    assert!(doc.topic_terms.contains("canine"));
}

#[test]
fn everything_keeps_the_shape() {
    let config = RedactionConfig::all().topic("dog");
    let doc = Redactor::new().redact(LETTER, &config);

    assert_eq!(doc.text.lines().count(), LETTER.lines().count());
    assert!(doc.text.ends_with('\n'));
    for (redacted, original) in doc.text.lines().zip(LETTER.lines()) {
        assert_eq!(redacted.chars().count(), original.chars().count());
    }
}

#[test]
fn redacting_twice_changes_nothing() {
    let redactor = Redactor::new();
    let config = RedactionConfig::all().topic("dog");
    let once = redactor.redact(LETTER, &config).text;
    let twice = redactor.redact(&once, &config).text;
    assert_eq!(once, twice);
}

#[test]
fn reapplying_entities_to_redacted_text_changes_nothing() {
    // A blacked-out local part leaves "█Ann Lee", which a second full pass
    // would pick up as a name. Reusing the first pass's entities does not.
    let text = "mail x@ab.com to xAnn Lee";
    let config = RedactionConfig::new().names(true);
    let doc = Redactor::new().redact(text, &config);
    assert_eq!(doc.text, "mail █@ab.com to █Ann Lee");

    let engine = RedactionEngine::new(&NoopAddressParser, "US");
    let again = engine.redact_line(&doc.text, &doc.entities, &config, &doc.topic_terms);
    assert_eq!(again, doc.text);
}

#[test]
fn bundled_thesaurus_expands_topics() {
    let redactor = Redactor::new();
    let doc = redactor.redact("A puppy barked. Cats slept.", &RedactionConfig::new().topic("dog"));
    assert_eq!(doc.text, format!("{}. Cats slept.", blackout("A puppy barked")));

    let terms = redactor.topic_terms(&["call".to_string()]);
    assert!(terms.contains("phone"));
    assert!(terms.contains("telephone"));
}

#[test]
fn unknown_topic_leaves_text_alone() {
    let thesaurus = Thesaurus::new().with_sense(Sense::new(["dog"]).with_hyponyms(["puppy.n.01"]));
    let redactor = Redactor::builder().lexicon(thesaurus).build();
    let text = "The zeppelin landed. Cats slept.";
    let doc = redactor.redact(text, &RedactionConfig::new().topic("zeppelin"));

    assert!(doc.topic_terms.is_empty());
    assert_eq!(doc.text, text);
}

#[test]
fn disabled_everything_is_identity() {
    let doc = Redactor::new().redact(LETTER, &RedactionConfig::new());
    assert_eq!(doc.text, LETTER);
    // Entities are still collected for reporting.
    assert!(!doc.entities.is_empty());
}

#[test]
fn pluggable_collaborators() {
    let redactor = Redactor::builder()
        .recognizer(RuleRecognizer::new().with_place("Baker Street"))
        .address_parser(NoopAddressParser)
        .gazetteer(Gazetteer::empty())
        .build();
    let doc = redactor.redact(LETTER, &RedactionConfig::new().address(true));

    assert!(doc.entities.contains(EntityType::Address, "Baker Street"));
    assert!(!doc.entities.contains(EntityType::Address, "IL"));
    assert!(doc.text.contains("Florida"));
}

#[test]
fn address_parser_is_country_specific() {
    // The pattern grammar needs a two-letter state; the parser also takes
    // full state names.
    let text = "Mail 742 Evergreen Terrace, Eugene, Oregon 97403 today.";
    let build = |country: &str| {
        Redactor::builder()
            .recognizer(NoopRecognizer)
            .gazetteer(Gazetteer::empty())
            .country(country)
            .build()
    };
    let config = RedactionConfig::new().address(true);

    let us = build("US").redact(text, &config);
    assert_eq!(
        us.text,
        format!("Mail {} today.", blackout("742 Evergreen Terrace, Eugene, Oregon 97403"))
    );

    let gb = build("GB").redact(text, &config);
    assert_eq!(
        gb.text,
        format!("Mail {}, Eugene, Oregon 97403 today.", blackout("742 Evergreen Terrace"))
    );
}

#[test]
fn observer_receives_events() {
    let mut observer = RecordingObserver::default();
    Redactor::new().redact_document(
        LETTER,
        &RedactionConfig::new().phones(true).topic("dog"),
        &mut observer,
    );

    assert!(observer
        .literals
        .contains(&(3, EntityType::Phone, "352-555-0199".to_string())));
    assert_eq!(observer.sentences.len(), 1);
    assert_eq!(observer.sentences[0].0, 4);
    assert_eq!(observer.lines_changed, 2);
}
