//! Property tests for tabular classification.

use proptest::prelude::*;
use serde_json::Value;

use treelens::domain::services::{is_tabular, table_keys};

use crate::common::strategies::{payload, tabular};

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 64,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Arrays of objects sharing one key set are tabular.
    #[test]
    fn property_uniform_rows_are_tabular(rows in tabular()) {
        prop_assert!(is_tabular(&rows));
        let first_keys: Vec<&str> = rows[0].as_object().unwrap().keys().map(String::as_str).collect();
        prop_assert_eq!(table_keys(&rows), first_keys);
    }

    /// PROPERTY: Removing a key from any later row breaks tabularity.
    #[test]
    fn property_missing_key_is_not_tabular(rows in tabular(), pick in any::<prop::sample::Index>()) {
        let mut rows = rows;
        let items = rows.as_array_mut().unwrap();
        prop_assume!(items.len() > 1);
        let victim = 1 + pick.index(items.len() - 1);
        let row = items[victim].as_object_mut().unwrap();
        let key = row.keys().next().cloned().unwrap();
        row.remove(&key);

        prop_assert!(!is_tabular(&rows));
    }

    /// PROPERTY: Reordering keys inside a row keeps it tabular.
    #[test]
    fn property_key_order_is_irrelevant(rows in tabular()) {
        let mut rows = rows;
        if let Some(last) = rows.as_array_mut().and_then(|items| items.last_mut()) {
            let reversed: serde_json::Map<String, Value> = last
                .as_object()
                .unwrap()
                .iter()
                .rev()
                .map(|(k, v)| (k.clone(), v.clone()))
                .collect();
            *last = Value::Object(reversed);
        }
        prop_assert!(is_tabular(&rows));
    }

    /// PROPERTY: Only arrays are ever tabular.
    #[test]
    fn property_non_arrays_are_never_tabular(value in payload()) {
        if !value.is_array() {
            prop_assert!(!is_tabular(&value));
        }
    }
}
