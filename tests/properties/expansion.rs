//! Property tests for expansion and search.

use std::collections::{HashMap, HashSet};

use proptest::prelude::*;
use serde_json::Value;

use treelens::domain::entities::is_container;
use treelens::domain::services::{initialize, recompute_for_search, SearchFilter};
use treelens::domain::value_objects::{Address, NodePath};

use crate::common::strategies::payload;

/// Addresses of every container in the payload
fn container_addresses(node: &Value, path: &NodePath, out: &mut HashSet<Address>) {
    if is_container(node) {
        out.insert(path.address());
    }
    match node {
        Value::Array(items) => {
            for (idx, item) in items.iter().enumerate() {
                container_addresses(item, &path.index(idx + 1), out);
            }
        }
        Value::Object(map) => {
            for (key, value) in map {
                container_addresses(value, &path.key(key), out);
            }
        }
        _ => {}
    }
}

/// Containers of the payload keyed by address
fn containers_by_address<'a>(node: &'a Value, path: &NodePath, out: &mut HashMap<Address, &'a Value>) {
    if is_container(node) {
        out.insert(path.address(), node);
    }
    match node {
        Value::Array(items) => {
            for (idx, item) in items.iter().enumerate() {
                containers_by_address(item, &path.index(idx + 1), out);
            }
        }
        Value::Object(map) => {
            for (key, value) in map {
                containers_by_address(value, &path.key(key), out);
            }
        }
        _ => {}
    }
}

/// Whether anything at or below `node` satisfies the filter: an object
/// property by key or value, or a scalar by its text
fn holds_match(node: &Value, filter: &SearchFilter) -> bool {
    match node {
        Value::Array(items) => items.iter().any(|item| holds_match(item, filter)),
        Value::Object(map) => map
            .iter()
            .any(|(key, value)| filter.matches(key, value) || holds_match(value, filter)),
        scalar => filter.value_matches(scalar),
    }
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 64,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Root is open after initialization and after any search.
    #[test]
    fn property_root_always_open(value in payload(), needle in "[a-z]{0,3}") {
        prop_assert!(initialize(&value).contains(&Address::root()));
        prop_assert!(recompute_for_search(&value, &SearchFilter::new(needle)).contains(&Address::root()));
    }

    /// PROPERTY: For arrays, every container under the first item is open
    /// and nothing outside it (besides root) is.
    #[test]
    fn property_first_item_subtree_open(items in prop::collection::vec(payload(), 1..4)) {
        let value = Value::Array(items);
        let set = initialize(&value);

        let mut expected = HashSet::new();
        container_addresses(&value[0], &NodePath::root().index(1), &mut expected);
        expected.insert(Address::root());

        let actual: HashSet<Address> = set.iter().cloned().collect();
        prop_assert_eq!(actual, expected);
    }

    /// PROPERTY: Objects start with only the root open.
    #[test]
    fn property_object_starts_collapsed(value in payload()) {
        if value.is_object() {
            prop_assert_eq!(initialize(&value).len(), 1);
        }
    }

    /// PROPERTY: A search only ever opens containers of the payload.
    #[test]
    fn property_search_opens_only_containers(value in payload(), needle in "[a-z]{1,3}") {
        let mut containers = HashSet::new();
        container_addresses(&value, &NodePath::root(), &mut containers);
        containers.insert(Address::root());

        let set = recompute_for_search(&value, &SearchFilter::new(needle));
        for address in set.iter() {
            prop_assert!(containers.contains(address), "unexpected address {}", address);
        }
    }

    /// PROPERTY: Every opened non-root address has its parent open, so
    /// matches are reachable from the root.
    #[test]
    fn property_search_paths_are_connected(value in payload(), needle in "[a-z]{1,2}") {
        let set = recompute_for_search(&value, &SearchFilter::new(needle));
        let opened: HashSet<&str> = set.iter().map(Address::as_str).collect();

        for address in &opened {
            if let Some((parent, _)) = address.rsplit_once('.') {
                // Generated keys are [a-z]+, so no escaped separators occur
                prop_assert!(opened.contains(parent), "{} open but {} closed", address, parent);
            }
        }
    }

    /// PROPERTY: Every container a search opens, besides root, holds a
    /// match somewhere beneath it.
    #[test]
    fn property_search_opens_only_paths_to_matches(value in payload(), needle in "[a-z]{1,2}") {
        let filter = SearchFilter::new(needle);
        let mut containers = HashMap::new();
        containers_by_address(&value, &NodePath::root(), &mut containers);

        let set = recompute_for_search(&value, &filter);
        for address in set.iter().filter(|a| **a != Address::root()) {
            let node = containers.get(address);
            prop_assert!(node.is_some(), "{} is not a container", address);
            prop_assert!(
                node.is_some_and(|node| holds_match(node, &filter)),
                "{} opened without a match beneath it",
                address
            );
        }
    }
}
