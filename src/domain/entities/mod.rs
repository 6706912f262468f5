//! Domain Entities
//!
//! The data the explorer works on: payload nodes, optional schema trees,
//! the envelope that delivers them, and the label override mapping.

pub mod envelope;
pub mod labels;
pub mod node;
pub mod schema;

pub use envelope::DataEnvelope;
pub use labels::LabelOverrides;
pub use node::{child_count, is_container, resolve, NodeKind};
pub use schema::{items_of, property_of, SchemaNode};
