//! Helpers for walking the raw parsed document tree.

use serde_json::Value;

use crate::constants::{CHAPTER_MAX, CHAPTER_MIN};

/// Human-readable name of a JSON value shape, for diagnostics.
pub(crate) fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "list",
        Value::Object(_) => "mapping",
    }
}

/// Parse a `"chapter N"` section key, accepting only chapters 1-7.
pub(crate) fn parse_chapter_key(key: &str) -> Option<u8> {
    let rest = key.strip_prefix("chapter ")?;
    let chapter: u8 = rest.parse().ok()?;
    (CHAPTER_MIN..=CHAPTER_MAX)
        .contains(&chapter)
        .then_some(chapter)
}
