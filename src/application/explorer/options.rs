//! Explorer settings

use crate::domain::services::{WindowPolicy, DEFAULT_MAX_DEPTH, DEPTH_STEP};

/// Chunk used before the first viewport measurement arrives
pub const INITIAL_CHUNK: usize = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExplorerSettings {
    /// Depth budget after every load
    pub max_depth: usize,
    /// Added to the budget by "expand deeper"
    pub depth_step: usize,
    pub window: WindowPolicy,
    pub initial_chunk: usize,
}

impl Default for ExplorerSettings {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            depth_step: DEPTH_STEP,
            window: WindowPolicy::default(),
            initial_chunk: INITIAL_CHUNK,
        }
    }
}
