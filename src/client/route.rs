//! Query-string construction for API routes.
//!
//! Query parameters are taken from any `Serialize` value that serializes to a
//! JSON object. Values are flattened as the backend expects:
//!
//! - `null` is skipped
//! - booleans become `true`/`false`
//! - arrays repeat the key once per element (`tags=a&tags=b`)
//! - nested objects contribute their own keys

use anyhow::Result;
use serde::Serialize;
use serde_json::{Map, Value};

/// Ordered list of already-flattened query pairs.
pub type QueryPairs = Vec<(String, String)>;

/// Appends the query string built from `params` to `base`.
///
/// Returns `base` unchanged when no parameter survives flattening.
pub fn route<P: Serialize + ?Sized>(base: &str, params: &P) -> Result<String> {
    let pairs = query_pairs(params)?;
    Ok(with_query(base, &pairs))
}

/// Flattens `params` into ordered key/value pairs.
pub fn query_pairs<P: Serialize + ?Sized>(params: &P) -> Result<QueryPairs> {
    let mut pairs = Vec::new();
    match serde_json::to_value(params)? {
        Value::Null => {}
        Value::Object(map) => flatten_object(&map, &mut pairs),
        other => anyhow::bail!("Query parameters must serialize to an object, got {}", other),
    }
    Ok(pairs)
}

/// Joins pre-built pairs onto `base`, using `&` if `base` already has a query.
pub fn with_query(base: &str, pairs: &[(String, String)]) -> String {
    if pairs.is_empty() {
        return base.to_string();
    }

    let query = pairs
        .iter()
        .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
        .collect::<Vec<_>>()
        .join("&");

    let separator = if base.contains('?') { '&' } else { '?' };
    format!("{}{}{}", base, separator, query)
}

/// Merges two serializable values into one JSON object; keys in `extra` win.
pub fn merge_params<A, B>(base: &A, extra: &B) -> Result<Value>
where
    A: Serialize + ?Sized,
    B: Serialize + ?Sized,
{
    let mut merged = match serde_json::to_value(base)? {
        Value::Object(map) => map,
        Value::Null => Map::new(),
        other => anyhow::bail!("Query parameters must serialize to an object, got {}", other),
    };
    match serde_json::to_value(extra)? {
        Value::Object(map) => merged.extend(map),
        Value::Null => {}
        other => anyhow::bail!("Query parameters must serialize to an object, got {}", other),
    }
    Ok(Value::Object(merged))
}

// Keys are emitted in sorted order so URLs are stable.
fn flatten_object(map: &Map<String, Value>, pairs: &mut QueryPairs) {
    let mut entries: Vec<(&String, &Value)> = map.iter().collect();
    entries.sort_by(|a, b| a.0.cmp(b.0));
    for (key, value) in entries {
        flatten_value(key, value, pairs);
    }
}

fn flatten_value(key: &str, value: &Value, pairs: &mut QueryPairs) {
    match value {
        Value::Null => {}
        Value::Bool(b) => pairs.push((key.to_string(), b.to_string())),
        Value::Number(n) => pairs.push((key.to_string(), n.to_string())),
        Value::String(s) => pairs.push((key.to_string(), s.clone())),
        Value::Array(items) => {
            for item in items {
                flatten_value(key, item, pairs);
            }
        }
        Value::Object(map) => flatten_object(map, pairs),
    }
}
