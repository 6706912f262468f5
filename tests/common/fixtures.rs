//! Reusable payload documents.

/// Two flat rows; the canonical CSV example
pub const ROWS: &str = r#"[{"a":1,"b":"x"},{"a":2,"b":"y"}]"#;

/// Envelope with a schema titling the columns
pub const ROWS_ENVELOPE: &str = r#"{
  "payload": [{"cust_id": 7, "name": "Ada"}, {"cust_id": 9, "name": "Bob"}],
  "schema": {
    "type": "array",
    "items": {
      "title": "Customer",
      "properties": {
        "cust_id": {"title": "Customer ID"},
        "name": {"title": "Name"}
      }
    }
  }
}"#;

/// Nested object where "Bob" sits two levels down
pub const PEOPLE: &str = r#"{"team": {"lead": {"name": "Alice"}, "members": [{"name": "Bob"}, {"name": "Carol"}]}, "size": 3}"#;

/// Same envelope shape the backend returns
pub const RESULT_WRAPPED: &str = r#"{"result": {"payload": {"status": "ok"}, "schema": {"properties": {"status": {"title": "Status"}}}}}"#;

pub const SCALAR: &str = r#""hello""#;

pub const NO_PAYLOAD: &str = r#"{"payload": null}"#;

/// `{"k0": {"k1": ... {"k{depth-1}": "v"}}}`
pub fn nested(depth: usize) -> serde_json::Value {
    let mut value = serde_json::json!("v");
    for level in (0..depth).rev() {
        let mut map = serde_json::Map::new();
        map.insert(format!("k{}", level), value);
        value = serde_json::Value::Object(map);
    }
    value
}
