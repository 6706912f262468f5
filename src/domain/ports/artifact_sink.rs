//! Artifact sink port
//!
//! Where exported artifacts end up. The CLI writes them to a directory;
//! tests collect them in memory.

use std::path::PathBuf;

use crate::domain::services::Artifact;
use crate::error::TreelensResult;

pub trait ArtifactSink {
    /// Deliver an artifact, returning where it was stored
    fn deliver(&self, artifact: &Artifact) -> TreelensResult<PathBuf>;
}
