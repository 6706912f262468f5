//! Search predicate
//!
//! Case-insensitive substring match over a key and a value's text form.

use serde_json::Value;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchFilter {
    raw: String,
    needle: String,
}

impl SearchFilter {
    pub fn new(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        let needle = raw.to_lowercase();
        Self { raw, needle }
    }

    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Whether the filter restricts anything
    pub fn is_active(&self) -> bool {
        !self.raw.is_empty()
    }

    /// True when the filter is empty, the key contains the needle, or the
    /// value's text contains it
    pub fn matches(&self, key: &str, value: &Value) -> bool {
        if !self.is_active() {
            return true;
        }
        key.to_lowercase().contains(&self.needle) || self.value_matches(value)
    }

    pub fn value_matches(&self, value: &Value) -> bool {
        searchable_text(value).to_lowercase().contains(&self.needle)
    }
}

/// Text a value is searched by
///
/// Strings are their raw contents, containers their compact JSON, other
/// scalars their display form.
pub fn searchable_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Array(_) | Value::Object(_) => {
            serde_json::to_string(value).unwrap_or_else(|_| value.to_string())
        }
        other => other.to_string(),
    }
}
