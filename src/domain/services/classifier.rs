//! Classifier Domain Service
//!
//! Decides whether a payload can be shown as a flat table.

use serde_json::{Map, Value};

/// True iff `payload` is a non-empty array of objects that all share the
/// first object's key set (order-insensitive).
pub fn is_tabular(payload: &Value) -> bool {
    let Some(items) = payload.as_array() else {
        return false;
    };
    let Some(first) = items.first().and_then(Value::as_object) else {
        return false;
    };

    let expected = sorted_keys(first);
    items.iter().all(|item| {
        item.as_object()
            .is_some_and(|map| map.len() == expected.len() && sorted_keys(map) == expected)
    })
}

/// Column keys of a tabular payload, in the first row's order
pub fn table_keys(payload: &Value) -> Vec<&str> {
    payload
        .as_array()
        .and_then(|items| items.first())
        .and_then(Value::as_object)
        .map(|first| first.keys().map(String::as_str).collect())
        .unwrap_or_default()
}

fn sorted_keys(map: &Map<String, Value>) -> Vec<&str> {
    let mut keys: Vec<&str> = map.keys().map(String::as_str).collect();
    keys.sort_unstable();
    keys
}
