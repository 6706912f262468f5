//! Content hash value object
//!
//! Fingerprint of a payload file's bytes. The watcher compares fingerprints
//! so that saves which leave the content unchanged do not reset the view.

use std::fmt;

use sha2::{Digest, Sha256};

/// SHA-256 of some bytes, displayed as `sha256:<hex>`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ContentHash(String);

impl ContentHash {
    pub const PREFIX: &'static str = "sha256:";

    pub fn from_bytes(content: &[u8]) -> Self {
        Self(format!("{}{:x}", Self::PREFIX, Sha256::digest(content)))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Hex digest without the prefix
    pub fn hex(&self) -> &str {
        self.0.strip_prefix(Self::PREFIX).unwrap_or(&self.0)
    }
}

impl fmt::Display for ContentHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
