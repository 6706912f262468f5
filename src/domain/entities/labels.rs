//! Label override mapping
//!
//! Loaded once by the caller and read-only for the explorer's lifetime.

use std::collections::HashMap;

use serde_json::Value;

/// Raw key -> display label
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LabelOverrides(HashMap<String, String>);

impl LabelOverrides {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: impl Into<String>, label: impl Into<String>) -> Self {
        self.0.insert(key.into(), label.into());
        self
    }

    /// Build from a flat JSON object.
    ///
    /// Returns the overrides plus the keys whose values were not strings
    /// (those are skipped). `None` when `value` is not an object.
    pub fn from_json(value: &Value) -> Option<(Self, Vec<String>)> {
        let map = value.as_object()?;
        let mut labels = HashMap::with_capacity(map.len());
        let mut skipped = Vec::new();

        for (key, label) in map {
            match label.as_str() {
                Some(label) => {
                    labels.insert(key.clone(), label.to_string());
                }
                None => skipped.push(key.clone()),
            }
        }

        Some((Self(labels), skipped))
    }

    /// Override for `key`; blank overrides count as absent
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0
            .get(key)
            .map(String::as_str)
            .filter(|label| !label.is_empty())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn from_json_skips_non_strings() {
        let (labels, skipped) =
            LabelOverrides::from_json(&json!({"cust_id": "Customer", "n": 3})).unwrap();
        assert_eq!(labels.get("cust_id"), Some("Customer"));
        assert_eq!(labels.len(), 1);
        assert_eq!(skipped, vec!["n".to_string()]);
    }

    #[test]
    fn from_json_rejects_non_objects() {
        assert!(LabelOverrides::from_json(&json!(["a"])).is_none());
    }

    #[test]
    fn blank_override_is_absent() {
        let labels = LabelOverrides::new().with("a", "");
        assert_eq!(labels.get("a"), None);
    }
}
