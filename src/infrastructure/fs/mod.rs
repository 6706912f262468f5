//! File System Implementations
//!
//! Artifact output on local disk.

mod artifact;

pub use artifact::{atomic_write, DirectorySink, OverwritePolicy};
