//! Schema nodes
//!
//! A schema is an optional tree that mirrors the payload: `title`,
//! `properties` for objects and `items` for arrays. Every field is optional
//! and lookups are best effort: an ill-typed field reads as absent.

use std::collections::HashMap;

use serde::Deserialize;
use serde_json::Value;

/// One level of an optional, possibly partial schema tree
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(from = "Value")]
pub struct SchemaNode {
    title: Option<String>,
    properties: HashMap<String, SchemaNode>,
    items: Option<Box<SchemaNode>>,
}

impl SchemaNode {
    /// Read a schema leniently; anything that is not an object is an empty node
    pub fn from_value(value: &Value) -> Self {
        let Some(map) = value.as_object() else {
            return Self::default();
        };

        let title = map.get("title").and_then(Value::as_str).map(str::to_string);

        let properties = map
            .get("properties")
            .and_then(Value::as_object)
            .map(|props| {
                props
                    .iter()
                    .map(|(key, node)| (key.clone(), SchemaNode::from_value(node)))
                    .collect()
            })
            .unwrap_or_default();

        // Tuple-form `items` (an array) has no single item schema
        let items = map
            .get("items")
            .filter(|items| items.is_object())
            .map(|items| Box::new(SchemaNode::from_value(items)));

        Self {
            title,
            properties,
            items,
        }
    }

    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Self::default()
        }
    }

    pub fn with_property(mut self, key: impl Into<String>, node: SchemaNode) -> Self {
        self.properties.insert(key.into(), node);
        self
    }

    pub fn with_items(mut self, node: SchemaNode) -> Self {
        self.items = Some(Box::new(node));
        self
    }

    /// Raw title as written (may be blank)
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn property(&self, key: &str) -> Option<&SchemaNode> {
        self.properties.get(key)
    }

    pub fn items(&self) -> Option<&SchemaNode> {
        self.items.as_deref()
    }
}

impl From<Value> for SchemaNode {
    fn from(value: Value) -> Self {
        SchemaNode::from_value(&value)
    }
}

/// Schema of property `key` under `schema`, if both exist
pub fn property_of<'a>(schema: Option<&'a SchemaNode>, key: &str) -> Option<&'a SchemaNode> {
    schema.and_then(|s| s.property(key))
}

/// Item schema under `schema`, if both exist
pub fn items_of(schema: Option<&SchemaNode>) -> Option<&SchemaNode> {
    schema.and_then(SchemaNode::items)
}
