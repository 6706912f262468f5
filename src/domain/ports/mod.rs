//! Domain Ports (Interfaces)
//!
//! Boundaries between the explorer and its front end.
//! Infrastructure provides the concrete implementations.

pub mod artifact_sink;
pub mod clipboard;

pub use artifact_sink::ArtifactSink;
pub use clipboard::{Clipboard, ClipboardError, MemoryClipboard};
