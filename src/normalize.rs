//! Field extraction over the API's loosely-shaped result objects.

use serde_json::Value;

/// Candidate fields for a search result's text, in preference order.
const TEXT_FIELDS: &[&str] = &[
    "content",
    "text",
    "snippet",
    "description",
    "full_text",
    "body",
];

/// A field's string value, or `None` when absent or not a string.
pub(crate) fn string_field(raw: &Value, field: &str) -> Option<String> {
    raw.get(field).and_then(Value::as_str).map(str::to_string)
}

/// The first present and non-empty text candidate, coerced to text.
///
/// String candidates count only when non-empty. Structured candidates
/// (numbers, objects, arrays, booleans) are serialized to their JSON form
/// rather than dropped; `null` never matches.
pub(crate) fn first_text_field(raw: &Value) -> Option<String> {
    for field in TEXT_FIELDS {
        match raw.get(*field) {
            Some(Value::String(s)) if !s.is_empty() => return Some(s.clone()),
            Some(Value::String(_)) | Some(Value::Null) | None => {}
            Some(other) => return Some(other.to_string()),
        }
    }
    None
}
