//! Data envelope delivered by the transport collaborator
//!
//! An envelope is the atomic unit of delivery: a payload and its schema
//! arrive together and replace whatever the explorer held before.

use serde_json::{Map, Value};

use super::schema::SchemaNode;

const PAYLOAD_KEY: &str = "payload";
const SCHEMA_KEY: &str = "schema";
const RESULT_KEY: &str = "result";

/// `{payload, schema}` pair, either side optional
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DataEnvelope {
    pub payload: Option<Value>,
    pub schema: Option<SchemaNode>,
}

impl DataEnvelope {
    pub fn new(payload: Option<Value>, schema: Option<SchemaNode>) -> Self {
        Self { payload, schema }
    }

    /// Envelope around a bare payload with no schema
    pub fn from_payload(payload: Value) -> Self {
        Self {
            payload: Some(payload),
            schema: None,
        }
    }

    /// Interpret a parsed document.
    ///
    /// Recognized shapes, in order:
    /// - a backend response with `result: {payload, schema}`
    /// - an object whose keys are only `payload` and/or `schema`
    /// - anything else is the payload itself
    pub fn from_document(document: Value) -> Self {
        if let Some(result) = document
            .get(RESULT_KEY)
            .and_then(Value::as_object)
            .filter(|result| has_envelope_key(result))
        {
            return Self::from_envelope_map(result);
        }

        match document {
            Value::Object(map) if is_envelope_map(&map) => Self::from_envelope_map(&map),
            other => Self::from_payload(other),
        }
    }

    pub fn with_schema(mut self, schema: Option<SchemaNode>) -> Self {
        if schema.is_some() {
            self.schema = schema;
        }
        self
    }

    /// A missing payload and an explicit `null` payload both mean "no data"
    pub fn has_payload(&self) -> bool {
        !matches!(self.payload, None | Some(Value::Null))
    }

    fn from_envelope_map(map: &Map<String, Value>) -> Self {
        Self {
            payload: map.get(PAYLOAD_KEY).cloned(),
            schema: map.get(SCHEMA_KEY).map(SchemaNode::from_value),
        }
    }
}

fn has_envelope_key(map: &Map<String, Value>) -> bool {
    map.contains_key(PAYLOAD_KEY) || map.contains_key(SCHEMA_KEY)
}

fn is_envelope_map(map: &Map<String, Value>) -> bool {
    has_envelope_key(map) && map.keys().all(|k| k == PAYLOAD_KEY || k == SCHEMA_KEY)
}
