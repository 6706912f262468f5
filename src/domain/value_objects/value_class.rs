//! Presentational classification of leaf values
//!
//! Drives styling only; no explorer behavior depends on it.

use serde_json::Value;

/// Type class attached to every rendered leaf value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueClass {
    String,
    Number,
    Boolean,
    Null,
    /// Containers (never rendered as leaves, but classified for completeness)
    None,
}

impl ValueClass {
    pub fn of(value: &Value) -> Self {
        match value {
            Value::String(_) => ValueClass::String,
            Value::Number(_) => ValueClass::Number,
            Value::Bool(_) => ValueClass::Boolean,
            Value::Null => ValueClass::Null,
            Value::Array(_) | Value::Object(_) => ValueClass::None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ValueClass::String => "string",
            ValueClass::Number => "number",
            ValueClass::Boolean => "boolean",
            ValueClass::Null => "null",
            ValueClass::None => "",
        }
    }
}
