use std::path::Path;

use message_lint::error::{LintError, RecordLocation};
use message_lint::loader::{load_messages, parse_groups};
use serde_json::json;

fn schema_error(doc: serde_json::Value) -> (RecordLocation, String, String) {
    match parse_groups(doc) {
        Err(LintError::Schema {
            location,
            field,
            reason,
        }) => (location, field, reason),
        other => panic!("expected a schema error, got {other:?}"),
    }
}

#[test]
fn loads_fixture_in_document_order() {
    let groups = load_messages(Path::new("tests/fixtures/messages.json")).unwrap();
    let kinds: Vec<_> = groups
        .iter()
        .map(|g| (g.kind.as_str(), g.name.as_deref()))
        .collect();
    assert_eq!(
        kinds,
        vec![
            ("SPELL", Some("Fireball")),
            ("SPELL", Some("Ice Storm")),
            ("SOCIAL", None),
            ("SPELL", Some("Fireball")),
            ("SKILL", Some("Bash")),
        ]
    );
}

#[test]
fn record_keys_keep_document_order() {
    let groups = parse_groups(json!([
        { "type": "SPELL", "messages": [ { "zeta": "z", "alpha": "a", "mid": "m" } ] }
    ]))
    .unwrap();
    let keys: Vec<_> = groups[0].messages[0]
        .entries
        .iter()
        .map(|(k, _)| k.as_str())
        .collect();
    assert_eq!(keys, vec!["zeta", "alpha", "mid"]);
}

#[test]
fn name_and_messages_are_optional() {
    let groups = parse_groups(json!([
        { "type": "SOCIAL" },
        { "type": "SOCIAL", "name": null, "messages": null }
    ]))
    .unwrap();
    assert_eq!(groups.len(), 2);
    assert!(groups.iter().all(|g| g.name.is_none() && g.messages.is_empty()));
}

#[test]
fn missing_file_is_reported_as_not_found() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("messages.json");
    match load_messages(&path) {
        Err(LintError::InputNotFound(p)) => assert_eq!(p, path),
        other => panic!("expected InputNotFound, got {other:?}"),
    }
}

#[test]
fn malformed_json_is_a_parse_error() {
    let err = load_messages(Path::new("tests/fixtures/malformed.json")).unwrap_err();
    assert!(matches!(err, LintError::Parse { .. }), "got {err:?}");
    assert!(err.to_string().contains("malformed.json"));
}

#[test]
fn top_level_object_is_rejected() {
    let err = parse_groups(json!({ "type": "SPELL" })).unwrap_err();
    assert!(matches!(err, LintError::NotAnArray("object")), "got {err:?}");
}

#[test]
fn missing_type_names_the_record() {
    let err = load_messages(Path::new("tests/fixtures/missing_type.json")).unwrap_err();
    match err {
        LintError::Schema {
            location, field, ..
        } => {
            assert_eq!(location, RecordLocation::record(1));
            assert_eq!(field, "type");
        }
        other => panic!("expected a schema error, got {other:?}"),
    }
}

#[test]
fn non_string_type_is_rejected() {
    let (location, field, reason) = schema_error(json!([{ "type": 7 }]));
    assert_eq!(location, RecordLocation::record(0));
    assert_eq!(field, "type");
    assert_eq!(reason, "must be a string, found number");
}

#[test]
fn non_object_record_is_rejected() {
    let (location, _, reason) = schema_error(json!([{ "type": "SPELL" }, "Fireball"]));
    assert_eq!(location, RecordLocation::record(1));
    assert!(reason.contains("found string"));
}

#[test]
fn messages_must_be_an_array() {
    let (_, field, _) = schema_error(json!([{ "type": "SPELL", "messages": { "en": "Hi" } }]));
    assert_eq!(field, "messages");
}

#[test]
fn non_string_message_value_names_record_and_message() {
    let (location, field, reason) = schema_error(json!([
        { "type": "SPELL", "messages": [ { "en": "fine" }, { "en": "fine", "fr": null } ] }
    ]));
    assert_eq!(location, RecordLocation::message(0, 1));
    assert_eq!(field, "fr");
    assert_eq!(reason, "must be a string, found null");
}

#[test]
fn schema_error_message_is_readable() {
    let err = parse_groups(json!([{ "type": "SPELL" }, { "type": "SPELL", "messages": [ 3 ] }]))
        .unwrap_err();
    assert_eq!(
        err.to_string(),
        "Invalid message data at record 1 message 0: `messages` entries must be objects, found number"
    );
}
