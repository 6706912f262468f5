//! Payload nodes
//!
//! Payload trees are plain `serde_json::Value`s (built with `preserve_order`,
//! so object keys keep their insertion order). `NodeKind` is the closed
//! three-way split the explorer reasons about.

use serde_json::Value;

use crate::domain::value_objects::{NodePath, PathToken};

/// Shape of a payload node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    /// String, number, boolean or null
    Scalar,
    Array,
    Object,
}

impl NodeKind {
    pub fn of(value: &Value) -> Self {
        match value {
            Value::Array(_) => NodeKind::Array,
            Value::Object(_) => NodeKind::Object,
            _ => NodeKind::Scalar,
        }
    }

    /// Arrays and objects are containers; only containers can be expanded
    pub fn is_container(self) -> bool {
        !matches!(self, NodeKind::Scalar)
    }
}

pub fn is_container(value: &Value) -> bool {
    NodeKind::of(value).is_container()
}

/// Number of direct children (0 for scalars)
pub fn child_count(value: &Value) -> usize {
    match value {
        Value::Array(items) => items.len(),
        Value::Object(map) => map.len(),
        _ => 0,
    }
}

/// Follow one token from `value`
pub fn child<'a>(value: &'a Value, token: &PathToken) -> Option<&'a Value> {
    match (value, token) {
        (Value::Object(map), PathToken::Key(key)) => map.get(key),
        (Value::Array(items), PathToken::Index(position)) => {
            items.get(position.checked_sub(1)?)
        }
        _ => None,
    }
}

/// Resolve a full path from the payload root
pub fn resolve<'a>(root: &'a Value, path: &NodePath) -> Option<&'a Value> {
    path.tokens()
        .iter()
        .try_fold(root, |node, token| child(node, token))
}
