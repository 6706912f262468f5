//! Explorer state
//!
//! Everything tied to the current payload lives here. A new payload builds
//! a fresh `ExplorerState`; nothing is patched field by field.

use serde_json::Value;

use super::options::ExplorerSettings;
use crate::domain::entities::{DataEnvelope, SchemaNode};
use crate::domain::services::{initialize, is_tabular, ExpansionSet, SearchFilter, WindowState};
use crate::domain::value_objects::ViewMode;

#[derive(Debug, Clone)]
pub struct ExplorerState {
    pub payload: Option<Value>,
    pub schema: Option<SchemaNode>,
    /// Classifier verdict for `payload`
    pub tabular: bool,
    pub expansion: ExpansionSet,
    pub window: WindowState,
    pub search: SearchFilter,
    pub max_depth: usize,
    pub mode: ViewMode,
}

impl ExplorerState {
    /// State for a freshly delivered envelope.
    ///
    /// `window` carries the current chunk size; its growth is discarded.
    pub fn fresh(envelope: DataEnvelope, settings: &ExplorerSettings, mut window: WindowState) -> Self {
        window.reset();
        let payload = envelope.payload.filter(|payload| !payload.is_null());
        let expansion = payload
            .as_ref()
            .map(initialize)
            .unwrap_or_else(ExpansionSet::with_root);
        let tabular = payload.as_ref().is_some_and(is_tabular);

        Self {
            payload,
            schema: envelope.schema,
            tabular,
            expansion,
            window,
            search: SearchFilter::default(),
            max_depth: settings.max_depth,
            mode: ViewMode::Tree,
        }
    }

    pub fn empty(settings: &ExplorerSettings) -> Self {
        Self::fresh(
            DataEnvelope::default(),
            settings,
            WindowState::new(settings.window, settings.initial_chunk),
        )
    }

    /// Table view is shown only when selected and possible
    pub fn shows_table(&self) -> bool {
        self.mode.is_table() && self.tabular
    }
}
