//! Document loading
//!
//! Reads payload, schema and envelope documents from files or stdin.
//! `.yaml`/`.yml` files are YAML, everything else is JSON.

use std::io::Read;
use std::path::Path;

use serde_json::Value;

use crate::domain::entities::{DataEnvelope, SchemaNode};
use crate::error::{TreelensError, TreelensResult};

/// Path that means "read standard input"
pub const STDIN_PATH: &str = "-";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Json,
    Yaml,
}

impl DocumentFormat {
    pub fn for_path(path: &Path) -> Self {
        match path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase)
            .as_deref()
        {
            Some("yaml") | Some("yml") => DocumentFormat::Yaml,
            _ => DocumentFormat::Json,
        }
    }
}

pub fn is_stdin(path: &Path) -> bool {
    path.as_os_str() == STDIN_PATH
}

/// Raw bytes of a document (stdin for `-`)
pub fn read_source(path: &Path) -> TreelensResult<Vec<u8>> {
    if is_stdin(path) {
        let mut buf = Vec::new();
        std::io::stdin().read_to_end(&mut buf)?;
        Ok(buf)
    } else {
        Ok(std::fs::read(path)?)
    }
}

/// Parse document text. Parse failures carry the source name.
pub fn parse_document(bytes: &[u8], format: DocumentFormat, source_name: &str) -> TreelensResult<Value> {
    let parsed = match format {
        DocumentFormat::Json => serde_json::from_slice(bytes).map_err(|e| e.to_string()),
        DocumentFormat::Yaml => serde_yaml_ng::from_slice(bytes).map_err(|e| e.to_string()),
    };
    parsed.map_err(|message| TreelensError::InvalidDocument {
        source_name: source_name.to_string(),
        message,
    })
}

pub fn read_document(path: &Path) -> TreelensResult<Value> {
    let bytes = read_source(path)?;
    parse_document(&bytes, DocumentFormat::for_path(path), &path.display().to_string())
}

/// Load a standalone schema document
pub fn load_schema(path: &Path) -> TreelensResult<SchemaNode> {
    Ok(SchemaNode::from_value(&read_document(path)?))
}

/// Load an envelope, letting `schema_path` replace its schema
pub fn load_envelope(path: &Path, schema_path: Option<&Path>) -> TreelensResult<DataEnvelope> {
    let envelope = DataEnvelope::from_document(read_document(path)?);
    let schema = schema_path.map(load_schema).transpose()?;
    Ok(envelope.with_schema(schema))
}
