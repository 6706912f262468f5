//! Label Resolver
//!
//! Display names for keys: override map first, then schema titles, then
//! the raw key.

use crate::domain::entities::{property_of, LabelOverrides, SchemaNode};

/// Noun used for array items when the item schema has no title
pub const DEFAULT_ITEM_NOUN: &str = "Item";

#[derive(Debug, Clone, Copy)]
pub struct LabelResolver<'a> {
    overrides: &'a LabelOverrides,
}

impl<'a> LabelResolver<'a> {
    pub fn new(overrides: &'a LabelOverrides) -> Self {
        Self { overrides }
    }

    /// Label for `key` as a property of `parent_schema`
    pub fn label_for(&self, key: &str, parent_schema: Option<&SchemaNode>) -> String {
        if let Some(label) = self.overrides.get(key) {
            return label.to_string();
        }
        title_for(property_of(parent_schema, key))
            .unwrap_or(key)
            .to_string()
    }
}

/// Non-blank title of a schema node
pub fn title_for(schema: Option<&SchemaNode>) -> Option<&str> {
    schema
        .and_then(SchemaNode::title)
        .filter(|title| !title.trim().is_empty())
}

/// Singular noun for the items of an array
pub fn item_noun(item_schema: Option<&SchemaNode>) -> &str {
    title_for(item_schema).unwrap_or(DEFAULT_ITEM_NOUN)
}

/// Table and CSV column header: item-property title, else the raw key.
///
/// Overrides are not consulted here.
pub fn column_label(key: &str, item_schema: Option<&SchemaNode>) -> String {
    title_for(property_of(item_schema, key))
        .unwrap_or(key)
        .to_string()
}
