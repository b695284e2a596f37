//! Messages file loading and schema validation.
//!
//! The input is a JSON array of message groups:
//!
//! ```json
//! [
//!   { "type": "SPELL", "name": "Fireball", "messages": [ { "to_char": "You hurl a ball of fire." } ] },
//!   { "type": "SOCIAL" }
//! ]
//! ```
//!
//! `name` and `messages` are optional; a `null` value counts as absent.
//! Object key order inside each message record is preserved.

use crate::error::{LintError, RecordLocation};
use serde_json::{Map, Value};
use std::path::Path;

/// One entry of the top-level array.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageGroup {
    /// The `type` field.
    pub kind: String,
    pub name: Option<String>,
    pub messages: Vec<MessageRecord>,
}

/// Sub-key → text mapping, in document order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MessageRecord {
    pub entries: Vec<(String, String)>,
}

impl MessageRecord {
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(_, text)| text.as_str())
    }
}

/// Reads and validates the messages file at `path`.
///
/// # Errors
///
/// - [`LintError::InputNotFound`] when `path` does not exist.
/// - [`LintError::Read`] when the file cannot be read.
/// - [`LintError::Parse`] when the file is not valid JSON.
/// - [`LintError::NotAnArray`] or [`LintError::Schema`] when the document
///   does not have the expected shape.
pub fn load_messages(path: &Path) -> Result<Vec<MessageGroup>, LintError> {
    if !path.is_file() {
        return Err(LintError::InputNotFound(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path).map_err(|source| LintError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let value: Value = serde_json::from_str(&content).map_err(|source| LintError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    let groups = parse_groups(value)?;
    tracing::debug!(path = %path.display(), groups = groups.len(), "loaded messages");
    Ok(groups)
}

/// Validates an already-parsed document.
pub fn parse_groups(value: Value) -> Result<Vec<MessageGroup>, LintError> {
    let records = match value {
        Value::Array(records) => records,
        other => return Err(LintError::NotAnArray(kind_of(&other))),
    };

    records
        .into_iter()
        .enumerate()
        .map(|(index, record)| parse_group(index, record))
        .collect()
}

fn parse_group(index: usize, record: Value) -> Result<MessageGroup, LintError> {
    let here = RecordLocation::record(index);
    let mut object = match record {
        Value::Object(object) => object,
        other => return Err(schema_error(here, "$", "must be an object", &other)),
    };

    let kind = match object.remove("type") {
        Some(Value::String(s)) => s,
        Some(other) => return Err(schema_error(here, "type", "must be a string", &other)),
        None => {
            return Err(LintError::Schema {
                location: here,
                field: "type".to_string(),
                reason: "is required".to_string(),
            })
        }
    };

    let name = match object.remove("name") {
        None | Some(Value::Null) => None,
        Some(Value::String(s)) => Some(s),
        Some(other) => return Err(schema_error(here, "name", "must be a string", &other)),
    };

    let messages = match object.remove("messages") {
        None | Some(Value::Null) => Vec::new(),
        Some(Value::Array(items)) => items
            .into_iter()
            .enumerate()
            .map(|(m, item)| parse_record(RecordLocation::message(index, m), item))
            .collect::<Result<_, _>>()?,
        Some(other) => return Err(schema_error(here, "messages", "must be an array", &other)),
    };

    Ok(MessageGroup {
        kind,
        name,
        messages,
    })
}

fn parse_record(here: RecordLocation, item: Value) -> Result<MessageRecord, LintError> {
    let map: Map<String, Value> = match item {
        Value::Object(map) => map,
        other => return Err(schema_error(here, "messages", "entries must be objects", &other)),
    };

    let entries = map
        .into_iter()
        .map(|(key, value)| match value {
            Value::String(text) => Ok((key, text)),
            other => Err(schema_error(here, &key, "must be a string", &other)),
        })
        .collect::<Result<_, _>>()?;
    Ok(MessageRecord { entries })
}

fn schema_error(location: RecordLocation, field: &str, reason: &str, found: &Value) -> LintError {
    LintError::Schema {
        location,
        field: field.to_string(),
        reason: format!("{reason}, found {}", kind_of(found)),
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
