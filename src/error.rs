//! Error type shared by every stage of the lint pipeline.

use std::path::PathBuf;

/// Everything that can end a lint run early.
///
/// Only [`LintError::InputNotFound`] is considered a clean outcome: the
/// binary prints a notice and exits `0` without writing artifacts. Every other
/// variant is fatal and maps to exit status `2`.
#[derive(Debug, thiserror::Error)]
pub enum LintError {
    #[error("No messages file found at {}", .0.display())]
    InputNotFound(PathBuf),

    #[error("Failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid message data: top-level value must be an array, found {0}")]
    NotAnArray(&'static str),

    #[error("Invalid message data at {location}: `{field}` {reason}")]
    Schema {
        location: RecordLocation,
        field: String,
        reason: String,
    },

    #[error("Failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{0}")]
    Config(String),
}

/// Position of a malformed entry inside the input document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecordLocation {
    /// Zero-based index into the top-level array.
    pub record: usize,
    /// Zero-based index into the record's `messages` array, when relevant.
    pub message: Option<usize>,
}

impl RecordLocation {
    pub fn record(record: usize) -> Self {
        RecordLocation {
            record,
            message: None,
        }
    }

    pub fn message(record: usize, message: usize) -> Self {
        RecordLocation {
            record,
            message: Some(message),
        }
    }
}

impl std::fmt::Display for RecordLocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.message {
            Some(m) => write!(f, "record {} message {}", self.record, m),
            None => write!(f, "record {}", self.record),
        }
    }
}
