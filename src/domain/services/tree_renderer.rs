//! Tree Renderer
//!
//! Turns a payload, its schema and the current expansion/window state into
//! a flat list of rows. Rendering is pure: every interactive row carries the
//! path the explorer needs to act on it.

use serde_json::{Map, Value};

use super::expansion::ExpansionSet;
use super::format::{format_leaf, FormattedValue};
use super::label_resolver::{item_noun, title_for, LabelResolver};
use super::search::SearchFilter;
use super::window::WindowState;
use crate::domain::entities::{child_count, items_of, property_of, NodeKind, SchemaNode};
use crate::domain::value_objects::NodePath;

/// Initial depth budget
pub const DEFAULT_MAX_DEPTH: usize = 10;
/// Depth budget added by one "expand deeper"
pub const DEPTH_STEP: usize = 5;
/// Label of a top-level scalar
pub const ROOT_VALUE_LABEL: &str = "(value)";
/// Key looked up for an untitled root array
pub const ROOT_ARRAY_KEY: &str = "[]";

/// One line of tree output
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedRow {
    pub depth: usize,
    /// Node this row acts on (for `ShowMore`, the collection being grown)
    pub path: NodePath,
    pub kind: RowKind,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowKind {
    /// Toggleable container header
    Header {
        label: String,
        open: bool,
        container: NodeKind,
        len: usize,
    },
    Leaf {
        label: String,
        value: FormattedValue,
    },
    /// More items exist beyond the window
    ShowMore { remaining: usize },
    /// Depth budget exhausted
    ExpandDeeper,
}

impl RenderedRow {
    pub fn is_interactive(&self) -> bool {
        !matches!(self.kind, RowKind::Leaf { .. })
    }
}

pub struct TreeRenderer<'a> {
    pub labels: LabelResolver<'a>,
    pub expansion: &'a ExpansionSet,
    pub window: &'a WindowState,
    pub filter: &'a SearchFilter,
    pub max_depth: usize,
}

impl<'a> TreeRenderer<'a> {
    pub fn render_root(&self, payload: &Value, schema: Option<&SchemaNode>) -> Vec<RenderedRow> {
        self.render(payload, 0, &NodePath::root(), schema)
    }

    pub fn render(
        &self,
        node: &Value,
        depth: usize,
        path: &NodePath,
        schema: Option<&SchemaNode>,
    ) -> Vec<RenderedRow> {
        let mut rows = Vec::new();
        self.render_into(node, depth, path, schema, &mut rows);
        rows
    }

    fn render_into(
        &self,
        node: &Value,
        depth: usize,
        path: &NodePath,
        schema: Option<&SchemaNode>,
        rows: &mut Vec<RenderedRow>,
    ) {
        if depth >= self.max_depth {
            rows.push(RenderedRow {
                depth,
                path: path.clone(),
                kind: RowKind::ExpandDeeper,
            });
            return;
        }

        match node {
            Value::Array(items) => self.render_array(items, depth, path, schema, rows),
            Value::Object(map) => self.render_object(map, depth, path, schema, rows),
            scalar => rows.push(RenderedRow {
                depth: depth + 1,
                path: path.clone(),
                kind: RowKind::Leaf {
                    label: ROOT_VALUE_LABEL.to_string(),
                    value: format_leaf(scalar),
                },
            }),
        }
    }

    fn render_array(
        &self,
        items: &[Value],
        depth: usize,
        path: &NodePath,
        schema: Option<&SchemaNode>,
        rows: &mut Vec<RenderedRow>,
    ) {
        let open = self.expansion.is_open(path);

        // Nested arrays share the header emitted by their parent row
        if path.is_root() {
            let label = title_for(schema)
                .map(str::to_string)
                .unwrap_or_else(|| self.labels.label_for(ROOT_ARRAY_KEY, schema));
            rows.push(RenderedRow {
                depth,
                path: path.clone(),
                kind: RowKind::Header {
                    label,
                    open,
                    container: NodeKind::Array,
                    len: items.len(),
                },
            });
        }

        if !open {
            return;
        }

        let item_schema = items_of(schema);
        let noun = item_noun(item_schema);
        let visible = self.window.visible_count(&path.address(), items.len());

        for (idx, item) in items.iter().take(visible).enumerate() {
            let position = idx + 1;
            let item_path = path.index(position);
            let kind = NodeKind::of(item);

            if !kind.is_container() {
                rows.push(RenderedRow {
                    depth: depth + 1,
                    path: item_path,
                    kind: RowKind::Leaf {
                        label: format!("{} {}", noun, position),
                        value: format_leaf(item),
                    },
                });
                continue;
            }

            let item_open = self.expansion.is_open(&item_path);
            rows.push(RenderedRow {
                depth: depth + 1,
                path: item_path.clone(),
                kind: RowKind::Header {
                    label: format!("{} {}:", noun, position),
                    open: item_open,
                    container: kind,
                    len: child_count(item),
                },
            });
            if item_open {
                self.render_into(item, depth + 1, &item_path, item_schema, rows);
            }
        }

        if items.len() > visible {
            rows.push(RenderedRow {
                depth: depth + 1,
                path: path.clone(),
                kind: RowKind::ShowMore {
                    remaining: items.len() - visible,
                },
            });
        }
    }

    fn render_object(
        &self,
        map: &Map<String, Value>,
        depth: usize,
        path: &NodePath,
        schema: Option<&SchemaNode>,
        rows: &mut Vec<RenderedRow>,
    ) {
        for (key, value) in map {
            if !self.filter.matches(key, value) {
                continue;
            }

            let child_path = path.key(key);
            let label = self.labels.label_for(key, schema);
            let kind = NodeKind::of(value);

            if !kind.is_container() {
                rows.push(RenderedRow {
                    depth: depth + 1,
                    path: child_path,
                    kind: RowKind::Leaf {
                        label,
                        value: format_leaf(value),
                    },
                });
                continue;
            }

            let open = self.expansion.is_open(&child_path);
            rows.push(RenderedRow {
                depth,
                path: child_path.clone(),
                kind: RowKind::Header {
                    label,
                    open,
                    container: kind,
                    len: child_count(value),
                },
            });
            if open {
                self.render_into(value, depth + 1, &child_path, property_of(schema, key), rows);
            }
        }
    }
}
