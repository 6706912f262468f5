//! Treelens - terminal explorer for schema-annotated hierarchical data
//!
//! Treelens renders a JSON or YAML payload as a collapsible tree (or, for
//! arrays of flat objects, a table), with schema-derived labels, live
//! search, windowed rendering of large collections, and JSON/CSV export.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;

// Re-exports for convenience
pub use application::{Explorer, ExplorerSettings, ExplorerView};
pub use config::{Config, ConfigWarning};
pub use domain::entities::{DataEnvelope, LabelOverrides, SchemaNode};
pub use domain::services::{Artifact, ExportFormat};
pub use error::{TreelensError, TreelensResult};
