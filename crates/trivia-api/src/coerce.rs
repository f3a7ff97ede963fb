//! Lenient request-body parsing and field coercion. The wire contract treats
//! a missing or malformed JSON body as an empty object, coerces `category`
//! to a string, and coerces `difficulty` (and the quiz category id) to an
//! integer.

use serde_json::{Map, Value};

/// Parse a request body, treating anything that is not a JSON object
/// (including an empty or malformed body) as `{}`.
pub fn lenient_object(bytes: &[u8]) -> Map<String, Value> {
    match serde_json::from_slice::<Value>(bytes) {
        Ok(Value::Object(map)) => map,
        _ => Map::new(),
    }
}

/// Integer coercion: JSON integers pass through, floats truncate, strings
/// parse as decimal after trimming. Everything else fails.
pub fn coerce_i64(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64().or_else(|| n.as_f64().map(|f| f as i64)),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

/// String coercion: strings pass through, numbers render in decimal.
pub fn coerce_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Value of `key` when it holds a non-blank string after trimming.
pub fn non_blank_str<'a>(map: &'a Map<String, Value>, key: &str) -> Option<&'a str> {
    map.get(key)
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|s| !s.is_empty())
}
