//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `document` - JSON/YAML envelope and schema loading (files or stdin)
//! - `labels` - Label override files
//! - `fs/` - Atomic artifact output
//! - `clipboard` - OSC 52 terminal clipboard
//! - `watch` - Payload file watching with content hashing

pub mod clipboard;
pub mod document;
pub mod fs;
pub mod labels;
pub mod watch;

// Re-export for convenience
pub use clipboard::Osc52Clipboard;
pub use document::{load_envelope, load_schema, read_document, DocumentFormat};
pub use fs::{DirectorySink, OverwritePolicy};
pub use labels::load_labels;
pub use watch::{ChangeDetector, PayloadWatcher};
