//! JSON report formatter.
//!
//! Produces `{ "spells": { "<type>) <name>": { ... } } }` with 4-space
//! indentation. Groups appear in first-occurrence order and the document
//! carries no timestamp, so unchanged input yields byte-identical output.

use crate::finding::LintReport;
use serde::Serialize;

#[derive(Serialize)]
struct JsonOutput<'a> {
    spells: Spells<'a>,
}

struct Spells<'a>(&'a LintReport);

impl Serialize for Spells<'_> {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.0.labelled_groups())
    }
}

/// Formats a [`LintReport`] as pretty-printed JSON.
///
/// # Panics
///
/// Panics if the report cannot be serialized (should not happen with valid data).
pub fn format(report: &LintReport) -> String {
    let output = JsonOutput {
        spells: Spells(report),
    };

    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
    output
        .serialize(&mut serializer)
        .expect("JSON serialization failed");

    String::from_utf8(buf).expect("serde_json produced invalid UTF-8")
}
