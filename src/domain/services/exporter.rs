//! Exporter
//!
//! Serializes the whole payload (never just the visible window) into a
//! downloadable artifact.

use std::fmt;
use std::str::FromStr;

use csv::{QuoteStyle, Terminator, WriterBuilder};
use serde_json::Value;

use super::classifier::{is_tabular, table_keys};
use super::table_renderer::columns;
use crate::domain::entities::SchemaNode;
use crate::domain::value_objects::ViewMode;
use crate::error::{TreelensError, TreelensResult};

pub const JSON_FILE_NAME: &str = "data.json";
pub const CSV_FILE_NAME: &str = "data.csv";

/// A named, typed blob ready to be written somewhere
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    pub file_name: &'static str,
    pub media_type: &'static str,
    pub contents: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Json,
    Csv,
}

impl FromStr for ExportFormat {
    type Err = TreelensError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "json" => Ok(ExportFormat::Json),
            "csv" => Ok(ExportFormat::Csv),
            _ => Err(TreelensError::UnsupportedFormat(s.to_string())),
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExportFormat::Json => write!(f, "json"),
            ExportFormat::Csv => write!(f, "csv"),
        }
    }
}

/// Full payload, pretty-printed with two-space indentation
pub fn export_json(payload: &Value) -> Artifact {
    Artifact {
        file_name: JSON_FILE_NAME,
        media_type: "application/json",
        contents: serde_json::to_string_pretty(payload).unwrap_or_else(|_| format!("{:#}", payload)),
    }
}

/// Every row of a tabular payload as CSV.
///
/// Returns `Ok(None)` unless `mode` is table and the payload is tabular.
pub fn export_csv(
    payload: &Value,
    schema: Option<&SchemaNode>,
    mode: ViewMode,
) -> TreelensResult<Option<Artifact>> {
    if !mode.is_table() || !is_tabular(payload) {
        return Ok(None);
    }
    let Some(rows) = payload.as_array() else {
        return Ok(None);
    };

    let keys = table_keys(payload);
    let mut writer = WriterBuilder::new()
        .quote_style(QuoteStyle::Necessary)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    writer.write_record(columns(payload, schema).iter().map(|c| c.label.as_str()))?;
    for row in rows {
        writer.write_record(
            keys.iter()
                .map(|key| row.get(*key).map(csv_field).unwrap_or_default()),
        )?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|err| TreelensError::Io(err.into_error()))?;
    let contents = String::from_utf8(bytes)
        .map_err(|err| std::io::Error::new(std::io::ErrorKind::InvalidData, err))?;

    Ok(Some(Artifact {
        file_name: CSV_FILE_NAME,
        media_type: "text/csv",
        contents,
    }))
}

/// CSV text of one cell
pub fn csv_field(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Array(_) | Value::Object(_) => {
            serde_json::to_string(value).unwrap_or_else(|_| value.to_string())
        }
        other => other.to_string(),
    }
}
