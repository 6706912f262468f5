//! Expansion Store
//!
//! Tracks which container addresses are open. The set is rebuilt on every
//! new payload and on every non-empty search edit; between rebuilds only
//! single-address toggles touch it.

use std::collections::BTreeSet;

use serde_json::Value;

use super::search::SearchFilter;
use crate::domain::entities::is_container;
use crate::domain::value_objects::{Address, NodePath};

/// Set of open container addresses. Always contains `root` after
/// [`initialize`] or [`recompute_for_search`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpansionSet {
    open: BTreeSet<Address>,
}

impl ExpansionSet {
    /// A set holding only the root address
    pub fn with_root() -> Self {
        let mut open = BTreeSet::new();
        open.insert(Address::root());
        Self { open }
    }

    pub fn contains(&self, address: &Address) -> bool {
        self.open.contains(address)
    }

    pub fn is_open(&self, path: &NodePath) -> bool {
        self.contains(&path.address())
    }

    pub fn insert(&mut self, address: Address) -> bool {
        self.open.insert(address)
    }

    /// Flip one address; returns whether it is now open
    pub fn toggle(&mut self, address: Address) -> bool {
        if self.open.remove(&address) {
            false
        } else {
            self.open.insert(address);
            true
        }
    }

    pub fn len(&self) -> usize {
        self.open.len()
    }

    pub fn is_empty(&self) -> bool {
        self.open.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Address> {
        self.open.iter()
    }
}

impl Extend<Address> for ExpansionSet {
    fn extend<I: IntoIterator<Item = Address>>(&mut self, iter: I) {
        self.open.extend(iter);
    }
}

/// Expansion for a freshly delivered payload.
///
/// `root` is always open. When the payload is a non-empty array, the first
/// item and every container beneath it are open as well.
pub fn initialize(payload: &Value) -> ExpansionSet {
    let mut set = ExpansionSet::with_root();
    if let Some(first) = payload.as_array().and_then(|items| items.first()) {
        collect_containers(first, &NodePath::root().index(1), &mut set);
    }
    set
}

fn collect_containers(node: &Value, path: &NodePath, out: &mut ExpansionSet) {
    match node {
        Value::Array(items) => {
            out.insert(path.address());
            for (idx, item) in items.iter().enumerate() {
                collect_containers(item, &path.index(idx + 1), out);
            }
        }
        Value::Object(map) => {
            out.insert(path.address());
            for (key, value) in map {
                collect_containers(value, &path.key(key), out);
            }
        }
        _ => {}
    }
}

/// Result of searching one subtree
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MatchOutcome {
    pub matched: bool,
    /// Addresses to open so the matches are visible
    pub open: Vec<Address>,
}

/// Search `node` (at `path`) for the filter without touching any state.
pub fn contains_match(node: &Value, path: &NodePath, filter: &SearchFilter) -> MatchOutcome {
    let mut open = Vec::new();
    let matched = walk(node, path, filter, &mut open);
    MatchOutcome { matched, open }
}

fn walk(node: &Value, path: &NodePath, filter: &SearchFilter, open: &mut Vec<Address>) -> bool {
    match node {
        Value::Array(items) => {
            let mut any = false;
            for (idx, item) in items.iter().enumerate() {
                let child_path = path.index(idx + 1);
                if walk(item, &child_path, filter, open) {
                    any = true;
                    open.push(path.address());
                    if is_container(item) {
                        open.push(child_path.address());
                    }
                }
            }
            any
        }
        Value::Object(map) => {
            let mut any = false;
            for (key, value) in map {
                let child_path = path.key(key);
                if is_container(value) && walk(value, &child_path, filter, open) {
                    any = true;
                    open.push(path.address());
                    open.push(child_path.address());
                    continue;
                }
                if filter.matches(key, value) {
                    any = true;
                    open.push(path.address());
                }
            }
            any
        }
        scalar => filter.value_matches(scalar),
    }
}

/// Rebuild expansion so every match is reachable from the root.
///
/// Callers skip this while the filter is empty; an empty filter matches
/// everything and would open the whole tree.
pub fn recompute_for_search(payload: &Value, filter: &SearchFilter) -> ExpansionSet {
    let outcome = contains_match(payload, &NodePath::root(), filter);
    let mut set = ExpansionSet::with_root();
    set.extend(outcome.open);
    log::debug!(
        "search '{}' opened {} addresses",
        filter.raw(),
        set.len()
    );
    set
}
