//! Table Renderer
//!
//! Flat view of a tabular payload: one column per key of the first row.

use serde_json::Value;

use super::classifier::{is_tabular, table_keys};
use super::format::{format_leaf, FormattedValue};
use super::label_resolver::column_label;
use super::search::SearchFilter;
use super::window::WindowState;
use crate::domain::entities::{items_of, SchemaNode};

static MISSING_CELL: Value = Value::Null;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableColumn {
    pub key: String,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TableCell<'a> {
    /// Source value, used for copying
    pub raw: &'a Value,
    pub display: FormattedValue,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TableRow<'a> {
    /// 1-based position in the payload, stable under filtering
    pub position: usize,
    pub cells: Vec<TableCell<'a>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TableView<'a> {
    pub columns: Vec<TableColumn>,
    pub rows: Vec<TableRow<'a>>,
    /// Rows in the payload
    pub total: usize,
    /// Rows inside the window (before search filtering)
    pub visible: usize,
}

impl TableView<'_> {
    pub fn has_more(&self) -> bool {
        self.total > self.visible
    }
}

/// Headers for a tabular payload
pub fn columns(payload: &Value, schema: Option<&SchemaNode>) -> Vec<TableColumn> {
    let item_schema = items_of(schema);
    table_keys(payload)
        .into_iter()
        .map(|key| TableColumn {
            key: key.to_string(),
            label: column_label(key, item_schema),
        })
        .collect()
}

/// Table rows inside the current window. `None` when the payload is not tabular.
pub fn render_table<'a>(
    payload: &'a Value,
    schema: Option<&SchemaNode>,
    window: &WindowState,
    filter: &SearchFilter,
) -> Option<TableView<'a>> {
    if !is_tabular(payload) {
        return None;
    }
    let items = payload.as_array()?;
    let columns = columns(payload, schema);
    let visible = window.table_visible(items.len());

    let rows = items
        .iter()
        .take(visible)
        .enumerate()
        .filter(|(_, row)| filter.matches("", row))
        .map(|(idx, row)| TableRow {
            position: idx + 1,
            cells: columns
                .iter()
                .map(|column| {
                    let raw = row.get(&column.key).unwrap_or(&MISSING_CELL);
                    TableCell {
                        raw,
                        display: format_leaf(raw),
                    }
                })
                .collect(),
        })
        .collect();

    Some(TableView {
        columns,
        rows,
        total: items.len(),
        visible,
    })
}

/// Clipboard text for a cell: its raw value, pretty-printed
pub fn cell_clipboard_text(value: &Value) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| format!("{:#}", value))
}
