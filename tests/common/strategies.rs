//! proptest generators for payloads.

use proptest::prelude::*;
use serde_json::{json, Map, Value};

pub fn scalar() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i32>().prop_map(|n| json!(n)),
        "[a-z ]{0,8}".prop_map(Value::String),
    ]
}

/// Arbitrary JSON up to a few levels deep
pub fn payload() -> impl Strategy<Value = Value> {
    scalar().prop_recursive(4, 48, 5, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..5).prop_map(Value::Array),
            prop::collection::btree_map("[a-z]{1,4}", inner, 0..5)
                .prop_map(|entries| Value::Object(entries.into_iter().collect::<Map<_, _>>())),
        ]
    })
}

/// Array of flat objects sharing one key set
pub fn tabular() -> impl Strategy<Value = Value> {
    prop::collection::btree_set("[a-z]{1,5}", 1..5).prop_flat_map(|keys| {
        let keys: Vec<String> = keys.into_iter().collect();
        let width = keys.len();
        prop::collection::vec(prop::collection::vec(scalar(), width), 1..8).prop_map(move |rows| {
            Value::Array(
                rows.into_iter()
                    .map(|cells| {
                        Value::Object(keys.iter().cloned().zip(cells).collect::<Map<_, _>>())
                    })
                    .collect(),
            )
        })
    })
}
