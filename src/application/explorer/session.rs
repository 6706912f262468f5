//! The explorer: owns the state for one payload and handles every event.

use serde_json::Value;

use super::options::ExplorerSettings;
use super::state::ExplorerState;
use super::view::ExplorerView;
use crate::application::viewport::{ViewportRegistry, ViewportSubscription};
use crate::domain::entities::{is_container, resolve, DataEnvelope, LabelOverrides, SchemaNode};
use crate::domain::ports::{Clipboard, ClipboardError};
use crate::domain::services::{
    cell_clipboard_text, export_csv, export_json, recompute_for_search, render_table,
    table_keys, Artifact, ExpansionSet, LabelResolver, SearchFilter, TreeRenderer,
};
use crate::domain::value_objects::{NodePath, ViewMode};
use crate::error::TreelensResult;

pub struct Explorer {
    settings: ExplorerSettings,
    labels: LabelOverrides,
    state: ExplorerState,
    viewport: ViewportRegistry,
}

impl Explorer {
    pub fn new(settings: ExplorerSettings, labels: LabelOverrides) -> Self {
        Self {
            state: ExplorerState::empty(&settings),
            settings,
            labels,
            viewport: ViewportRegistry::new(),
        }
    }

    pub fn state(&self) -> &ExplorerState {
        &self.state
    }

    pub fn payload(&self) -> Option<&Value> {
        self.state.payload.as_ref()
    }

    pub fn schema(&self) -> Option<&SchemaNode> {
        self.state.schema.as_ref()
    }

    pub fn expansion(&self) -> &ExpansionSet {
        &self.state.expansion
    }

    pub fn mode(&self) -> ViewMode {
        self.state.mode
    }

    pub fn is_tabular(&self) -> bool {
        self.state.tabular
    }

    pub fn search(&self) -> &str {
        self.state.search.raw()
    }

    pub fn max_depth(&self) -> usize {
        self.state.max_depth
    }

    /// Replace everything with a new envelope: tree mode, empty search,
    /// initial expansion, reset windows and depth budget.
    pub fn load(&mut self, envelope: DataEnvelope) {
        let window = self.state.window.clone();
        self.state = ExplorerState::fresh(envelope, &self.settings, window);
        log::info!(
            "payload loaded (tabular: {}, open: {})",
            self.state.tabular,
            self.state.expansion.len()
        );
    }

    /// Update the live search.
    ///
    /// A non-empty search rebuilds expansion from the matches. Clearing the
    /// search leaves expansion as it is.
    pub fn set_search(&mut self, text: impl Into<String>) {
        self.state.search = SearchFilter::new(text);
        if !self.state.search.is_active() {
            return;
        }
        if let Some(payload) = &self.state.payload {
            self.state.expansion = recompute_for_search(payload, &self.state.search);
        }
    }

    /// Flip a container open or closed. `None` for scalars and unknown paths.
    pub fn toggle(&mut self, path: &NodePath) -> Option<bool> {
        let node = resolve(self.state.payload.as_ref()?, path)?;
        if !is_container(node) {
            return None;
        }
        Some(self.state.expansion.toggle(path.address()))
    }

    /// Grow the window of the array at `path`; returns the new visible count
    pub fn show_more(&mut self, path: &NodePath) -> Option<usize> {
        let len = resolve(self.state.payload.as_ref()?, path)?.as_array()?.len();
        Some(self.state.window.grow(&path.address(), len))
    }

    /// Grow the table window; returns the new visible row count
    pub fn show_more_rows(&mut self) -> Option<usize> {
        if !self.state.tabular {
            return None;
        }
        let len = self.state.payload.as_ref()?.as_array()?.len();
        Some(self.state.window.grow_table(len))
    }

    /// Raise the depth budget by one step; returns the new budget
    pub fn expand_deeper(&mut self) -> usize {
        self.state.max_depth += self.settings.depth_step;
        self.state.max_depth
    }

    /// Open every container in the payload
    pub fn expand_all(&mut self) {
        let Some(payload) = &self.state.payload else {
            return;
        };
        let mut open = ExpansionSet::with_root();
        collect_all(payload, &NodePath::root(), &mut open);
        self.state.expansion = open;
    }

    /// Switch view mode; table mode requires a tabular payload
    pub fn set_view_mode(&mut self, mode: ViewMode) -> bool {
        if mode.is_table() && !self.state.tabular {
            return false;
        }
        self.state.mode = mode;
        true
    }

    pub fn toggle_view_mode(&mut self) -> bool {
        self.set_view_mode(self.state.mode.other())
    }

    /// Start listening to viewport resizes, applying the initial height
    pub fn subscribe_viewport(&mut self, viewport_px: u32) -> ViewportSubscription {
        let subscription = self.viewport.subscribe();
        self.state.window.resize(viewport_px);
        subscription
    }

    /// Apply a resize; stale subscriptions are ignored
    pub fn on_viewport_resize(&mut self, subscription: &ViewportSubscription, viewport_px: u32) -> bool {
        if !self.viewport.is_active(subscription) {
            log::debug!("ignoring resize from stale subscription {}", subscription.id());
            return false;
        }
        self.state.window.resize(viewport_px);
        true
    }

    pub fn unsubscribe_viewport(&mut self, subscription: ViewportSubscription) -> bool {
        self.viewport.unsubscribe(subscription)
    }

    /// Render the current state
    pub fn view(&self) -> ExplorerView<'_> {
        let Some(payload) = &self.state.payload else {
            return ExplorerView::NoData;
        };
        if !is_container(payload) {
            return ExplorerView::InvalidData;
        }

        let schema = self.state.schema.as_ref();
        if self.state.shows_table() {
            if let Some(table) = render_table(payload, schema, &self.state.window, &self.state.search) {
                return ExplorerView::Table(table);
            }
        }

        let renderer = TreeRenderer {
            labels: LabelResolver::new(&self.labels),
            expansion: &self.state.expansion,
            window: &self.state.window,
            filter: &self.state.search,
            max_depth: self.state.max_depth,
        };
        ExplorerView::Tree(renderer.render_root(payload, schema))
    }

    /// Full payload as JSON; `None` when there is nothing loaded
    pub fn export_json(&self) -> Option<Artifact> {
        let artifact = export_json(self.state.payload.as_ref()?);
        log::info!("exported {} ({} bytes)", artifact.file_name, artifact.contents.len());
        Some(artifact)
    }

    /// All rows as CSV; `None` unless in table mode on a tabular payload
    pub fn export_csv(&self) -> TreelensResult<Option<Artifact>> {
        let Some(payload) = &self.state.payload else {
            return Ok(None);
        };
        let artifact = export_csv(payload, self.state.schema.as_ref(), self.state.mode)?;
        if let Some(artifact) = &artifact {
            log::info!("exported {} ({} bytes)", artifact.file_name, artifact.contents.len());
        }
        Ok(artifact)
    }

    /// Copy the raw value of a table cell (`row` is the 1-based payload
    /// position, `column` the 0-based column index). Returns false when the
    /// cell does not exist.
    pub fn copy_cell(
        &self,
        row: usize,
        column: usize,
        clipboard: &dyn Clipboard,
    ) -> Result<bool, ClipboardError> {
        let Some(payload) = self.state.payload.as_ref().filter(|_| self.state.tabular) else {
            return Ok(false);
        };
        let keys = table_keys(payload);
        let cell = row
            .checked_sub(1)
            .and_then(|idx| payload.get(idx))
            .zip(keys.get(column))
            .and_then(|(item, key)| item.get(*key));

        match cell {
            Some(value) => {
                clipboard.set_text(&cell_clipboard_text(value))?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Copy the node at `path`, pretty-printed
    pub fn copy_value(&self, path: &NodePath, clipboard: &dyn Clipboard) -> Result<bool, ClipboardError> {
        let node = self
            .state
            .payload
            .as_ref()
            .and_then(|payload| resolve(payload, path));
        match node {
            Some(value) => {
                clipboard.set_text(&cell_clipboard_text(value))?;
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

fn collect_all(node: &Value, path: &NodePath, open: &mut ExpansionSet) {
    match node {
        Value::Array(items) => {
            open.insert(path.address());
            for (idx, item) in items.iter().enumerate() {
                collect_all(item, &path.index(idx + 1), open);
            }
        }
        Value::Object(map) => {
            open.insert(path.address());
            for (key, value) in map {
                collect_all(value, &path.key(key), open);
            }
        }
        _ => {}
    }
}
