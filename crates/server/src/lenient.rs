//! Forgiving deserializers for request bodies.
//!
//! A missing, null or mistyped field reads as "no preference" instead of
//! rejecting the whole request.

use serde::{Deserialize, Deserializer, de::DeserializeOwned};
use serde_json::Value;

/// A string field; anything that is not a JSON string becomes `""`.
pub fn string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => s,
        _ => String::new(),
    })
}

/// A list of strings; a bare string counts as a one-item list and
/// non-string items are skipped.
pub fn string_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => vec![s],
        Value::Array(items) => items
            .into_iter()
            .filter_map(|item| match item {
                Value::String(s) => Some(s),
                _ => None,
            })
            .collect(),
        _ => Vec::new(),
    })
}

/// Parse a JSON request body, falling back to `T::default()` when the body
/// is empty or not a JSON object.
pub fn parse_body<T>(body: &[u8]) -> T
where
    T: DeserializeOwned + Default,
{
    serde_json::from_slice(body).unwrap_or_else(|err| {
        tracing::debug!(%err, "unreadable request body, using defaults");
        T::default()
    })
}
