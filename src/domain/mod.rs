//! Domain Layer
//!
//! The explorer core: payload and schema entities, path addressing, and
//! the pure services that classify, expand, window, render and export.
//!
//! ## Structure
//!
//! - `entities/` - Payload nodes, schema nodes, envelopes, label overrides
//! - `value_objects/` - Paths and addresses, view mode, value classes
//! - `services/` - Classifier, expansion, windowing, renderers, exporter
//! - `ports/` - Clipboard and artifact sink interfaces
//!
//! ## Design Principles
//!
//! 1. **No I/O** - This layer never touches the file system or terminal
//! 2. **Degrade, don't fail** - Malformed input produces placeholders, not errors
//! 3. **Ports & Adapters** - Copies and exports go through trait-defined ports

pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;
