//! YAML decoding for the record store.
//!
//! The store is a mapping from friendly name to an optional mapping of
//! `user`, `address` and `comment`. Scalars of any type are accepted for
//! keys and field values; they are stringified the way they are written.

use super::ConnectionEntry;
use crate::model::error::StoreError;
use serde_yaml::Value;
use std::path::Path;

/// Decode the store text into `(name, entry)` pairs in file order.
///
/// A document with no content decodes to an empty list. Emptiness is a
/// policy decision left to the caller.
///
/// # Errors
///
/// Returns `StoreError::Parse` for invalid YAML, a non-mapping top level or
/// non-scalar keys, and `StoreError::MalformedEntry` for an entry body that
/// is neither a mapping nor empty.
pub fn parse_entries(
    path: &Path,
    contents: &str,
) -> Result<Vec<(String, ConnectionEntry)>, StoreError> {
    if !has_content(contents) {
        return Ok(Vec::new());
    }

    let parse_error = |reason: String| StoreError::Parse {
        path: path.to_path_buf(),
        reason,
    };

    let document: Value = serde_yaml::from_str(contents).map_err(|e| parse_error(e.to_string()))?;

    let mapping = match document {
        Value::Null => return Ok(Vec::new()),
        Value::Mapping(mapping) => mapping,
        other => {
            return Err(parse_error(format!(
                "top level must be a mapping of connections, found {}",
                kind(&other)
            )))
        }
    };

    let mut entries = Vec::with_capacity(mapping.len());
    for (key, body) in mapping {
        let name = scalar_text(&key)
            .ok_or_else(|| parse_error(format!("connection names must be scalars, found {}", kind(&key))))?;

        let entry = match body {
            Value::Null => ConnectionEntry::default(),
            Value::Mapping(fields) => ConnectionEntry {
                user: field(&fields, "user"),
                address: field(&fields, "address"),
                comment: field(&fields, "comment"),
            },
            _ => {
                return Err(StoreError::MalformedEntry {
                    path: path.to_path_buf(),
                    name,
                })
            }
        };
        entries.push((name, entry));
    }

    Ok(entries)
}

/// Whether the text holds anything besides blank lines and comments.
fn has_content(contents: &str) -> bool {
    contents.lines().any(|line| {
        let line = line.trim();
        !line.is_empty() && !line.starts_with('#') && line != "---"
    })
}

fn field(fields: &serde_yaml::Mapping, name: &str) -> Option<String> {
    fields.get(name).and_then(scalar_text)
}

/// Text of a scalar, `None` for null and collections.
fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Tagged(tagged) => scalar_text(&tagged.value),
        Value::Null | Value::Sequence(_) | Value::Mapping(_) => None,
    }
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Sequence(_) => "a sequence",
        Value::Mapping(_) => "a mapping",
        Value::Tagged(_) => "a tagged value",
    }
}
