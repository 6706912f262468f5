//! Window Manager
//!
//! Caps how many children of each collection are rendered. Counts only
//! grow until the next payload arrives.

use std::collections::HashMap;

use crate::domain::value_objects::Address;

/// Approximate height of one rendered row, in pixels
pub const ROW_HEIGHT_PX: u32 = 28;
/// Smallest chunk ever used
pub const MIN_CHUNK: usize = 50;
/// Rows added by one table "show more"
pub const TABLE_INCREMENT: usize = 200;

/// Tunables for chunk sizing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowPolicy {
    pub row_height_px: u32,
    pub min_chunk: usize,
    pub table_increment: usize,
}

impl Default for WindowPolicy {
    fn default() -> Self {
        Self {
            row_height_px: ROW_HEIGHT_PX,
            min_chunk: MIN_CHUNK,
            table_increment: TABLE_INCREMENT,
        }
    }
}

/// Chunk size for a viewport: three screens of rows, never below the minimum
pub fn chunk_size_for(viewport_px: u32, policy: &WindowPolicy) -> usize {
    let row = policy.row_height_px.max(1) as usize;
    let rows = (viewport_px as usize).saturating_mul(3).div_ceil(row);
    rows.max(policy.min_chunk)
}

pub fn initial_visible(len: usize, chunk: usize) -> usize {
    len.min(chunk)
}

/// Visible counts for every collection of the current payload
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowState {
    policy: WindowPolicy,
    chunk: usize,
    /// Least count shown for any collection
    floor: usize,
    /// Whether a viewport measurement has replaced the starting chunk
    measured: bool,
    /// Counts reached through "show more"
    counts: HashMap<Address, usize>,
    table: usize,
}

impl WindowState {
    /// Window sized by a guessed chunk until the viewport is measured
    pub fn new(policy: WindowPolicy, chunk: usize) -> Self {
        Self {
            policy,
            chunk,
            floor: chunk,
            measured: false,
            counts: HashMap::new(),
            table: 0,
        }
    }

    pub fn for_viewport(policy: WindowPolicy, viewport_px: u32) -> Self {
        let mut window = Self::new(policy, chunk_size_for(viewport_px, &policy));
        window.measured = true;
        window
    }

    pub fn chunk(&self) -> usize {
        self.chunk
    }

    /// Items of the collection at `address` (of length `len`) to render
    pub fn visible_count(&self, address: &Address, len: usize) -> usize {
        let grown = self.counts.get(address).copied().unwrap_or(0);
        grown.max(self.floor).min(len)
    }

    /// Show one more chunk of the collection; returns the new count
    pub fn grow(&mut self, address: &Address, len: usize) -> usize {
        let current = self.visible_count(address, len);
        let next = current.saturating_add(self.chunk).min(len).max(current);
        self.counts.insert(address.clone(), next);
        log::debug!("window {} grew to {}/{}", address, next, len);
        next
    }

    pub fn table_visible(&self, len: usize) -> usize {
        self.table.max(self.floor).min(len)
    }

    /// Show one more table increment; returns the new count
    pub fn grow_table(&mut self, len: usize) -> usize {
        let current = self.table_visible(len);
        let next = current
            .saturating_add(self.policy.table_increment)
            .min(len)
            .max(current);
        self.table = next;
        next
    }

    /// Recompute the chunk for a new viewport.
    ///
    /// The first measurement replaces the starting chunk outright. After
    /// that, visible counts never shrink.
    pub fn resize(&mut self, viewport_px: u32) {
        self.chunk = chunk_size_for(viewport_px, &self.policy);
        self.floor = if self.measured {
            self.floor.max(self.chunk)
        } else {
            self.chunk
        };
        self.measured = true;
    }

    /// Forget all growth; used when the payload changes
    pub fn reset(&mut self) {
        self.counts.clear();
        self.floor = self.chunk;
        self.table = 0;
    }
}
