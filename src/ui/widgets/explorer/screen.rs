//! Interactive explorer state: cursor, scrolling and the search line.
//!
//! Everything here is terminal-free; the event loop in `mod.rs` feeds it
//! actions and draws the frames it produces.

use treelens::application::{Explorer, ExplorerView};
use treelens::domain::entities::DataEnvelope;
use treelens::domain::ports::{ArtifactSink, Clipboard};
use treelens::domain::services::{Artifact, RenderedRow, RowKind};
use treelens::domain::value_objects::NodePath;
use treelens::infrastructure::DirectorySink;

use super::input::{ExplorerAction, SearchEdit};
use crate::ui::primitives::StyledText;
use crate::ui::theme::{icons, icons_ascii};
use crate::ui::views::status::{render_help_bar, render_status_bar, StatusLine};
use crate::ui::views::table::{render_table, CellCursor};
use crate::ui::views::tree::render_tree;
use crate::ui::views::RenderStyle;

/// Lines reserved below the body (rule, status, help)
pub const CHROME_LINES: usize = 3;

/// Fixed table lines above the rows (header, rule)
const TABLE_HEADER_LINES: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

pub struct ExplorerScreen {
    explorer: Explorer,
    sink: DirectorySink,
    style: RenderStyle,
    cursor: usize,
    column: usize,
    scroll: usize,
    /// Search text being edited, plus the search to restore on cancel
    draft: Option<(String, String)>,
    message: Option<String>,
}

impl ExplorerScreen {
    pub fn new(explorer: Explorer, sink: DirectorySink, style: RenderStyle) -> Self {
        Self {
            explorer,
            sink,
            style,
            cursor: 0,
            column: 0,
            scroll: 0,
            draft: None,
            message: None,
        }
    }

    #[cfg(test)]
    pub fn explorer(&self) -> &Explorer {
        &self.explorer
    }

    pub fn explorer_mut(&mut self) -> &mut Explorer {
        &mut self.explorer
    }

    #[cfg(test)]
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn is_editing(&self) -> bool {
        self.draft.is_some()
    }

    /// Replace the payload (file watcher reload)
    pub fn reload(&mut self, envelope: DataEnvelope) {
        self.explorer.load(envelope);
        self.cursor = 0;
        self.column = 0;
        self.scroll = 0;
        self.draft = None;
        self.message = Some("Reloaded".to_string());
    }

    fn row_count(&self) -> usize {
        match self.explorer.view() {
            ExplorerView::Tree(rows) => rows.len(),
            ExplorerView::Table(table) => table.rows.len(),
            ExplorerView::NoData | ExplorerView::InvalidData => 0,
        }
    }

    fn column_count(&self) -> usize {
        match self.explorer.view() {
            ExplorerView::Table(table) => table.columns.len(),
            _ => 0,
        }
    }

    fn current_row(&self) -> Option<RenderedRow> {
        match self.explorer.view() {
            ExplorerView::Tree(mut rows) if self.cursor < rows.len() => Some(rows.swap_remove(self.cursor)),
            _ => None,
        }
    }

    fn current_position(&self) -> Option<usize> {
        match self.explorer.view() {
            ExplorerView::Table(table) => table.rows.get(self.cursor).map(|row| row.position),
            _ => None,
        }
    }

    fn clamp_cursor(&mut self) {
        let count = self.row_count();
        self.cursor = self.cursor.min(count.saturating_sub(1));
        self.column = self.column.min(self.column_count().saturating_sub(1));
    }

    pub fn handle(&mut self, action: ExplorerAction, page: usize, clipboard: &dyn Clipboard) -> Flow {
        self.message = None;
        let count = self.row_count();

        match action {
            ExplorerAction::Quit => return Flow::Quit,
            ExplorerAction::Up => self.cursor = self.cursor.saturating_sub(1),
            ExplorerAction::Down => self.cursor = (self.cursor + 1).min(count.saturating_sub(1)),
            ExplorerAction::PageUp => self.cursor = self.cursor.saturating_sub(page.max(1)),
            ExplorerAction::PageDown => {
                self.cursor = (self.cursor + page.max(1)).min(count.saturating_sub(1))
            }
            ExplorerAction::Top => self.cursor = 0,
            ExplorerAction::Bottom => self.cursor = count.saturating_sub(1),
            ExplorerAction::Left => self.column = self.column.saturating_sub(1),
            ExplorerAction::Right => {
                self.column = (self.column + 1).min(self.column_count().saturating_sub(1))
            }
            ExplorerAction::Activate => self.activate(clipboard),
            ExplorerAction::ShowMore => self.show_more(),
            ExplorerAction::ExpandDeeper => {
                let depth = self.explorer.expand_deeper();
                self.message = Some(format!("Depth {}", depth));
            }
            ExplorerAction::ExpandAll => self.explorer.expand_all(),
            ExplorerAction::ToggleMode => {
                if self.explorer.toggle_view_mode() {
                    self.cursor = 0;
                    self.scroll = 0;
                } else {
                    self.message = Some("Table view needs an array of flat objects".to_string());
                }
            }
            ExplorerAction::Copy => self.copy(clipboard),
            ExplorerAction::ExportJson => {
                let artifact = self.explorer.export_json();
                self.deliver(artifact);
            }
            ExplorerAction::ExportCsv => match self.explorer.export_csv() {
                Ok(Some(artifact)) => self.deliver(Some(artifact)),
                Ok(None) => self.message = Some("CSV export is only available in table view".to_string()),
                Err(err) => self.message = Some(err.to_string()),
            },
            ExplorerAction::StartSearch => {
                let current = self.explorer.search().to_string();
                self.draft = Some((current.clone(), current));
            }
            ExplorerAction::ClearSearch => {
                if self.explorer.search().is_empty() {
                    return Flow::Quit;
                }
                self.explorer.set_search("");
            }
        }

        self.clamp_cursor();
        Flow::Continue
    }

    /// Apply a search-line edit. The search is live: every keystroke
    /// re-filters.
    pub fn edit_search(&mut self, edit: SearchEdit) {
        let Some((draft, previous)) = self.draft.as_mut() else {
            return;
        };
        match edit {
            SearchEdit::Insert(ch) => draft.push(ch),
            SearchEdit::Backspace => {
                draft.pop();
            }
            SearchEdit::Commit => {
                self.draft = None;
                return;
            }
            SearchEdit::Cancel => {
                let previous = std::mem::take(previous);
                self.draft = None;
                self.explorer.set_search(previous);
                self.clamp_cursor();
                return;
            }
        }
        let text = draft.clone();
        self.explorer.set_search(text);
        self.cursor = 0;
        self.scroll = 0;
    }

    fn activate(&mut self, clipboard: &dyn Clipboard) {
        if self.explorer.mode().is_table() {
            self.copy(clipboard);
            return;
        }
        let Some(row) = self.current_row() else {
            return;
        };
        match row.kind {
            RowKind::Header { .. } => {
                self.explorer.toggle(&row.path);
            }
            RowKind::ShowMore { .. } => {
                self.explorer.show_more(&row.path);
            }
            RowKind::ExpandDeeper => {
                let depth = self.explorer.expand_deeper();
                self.message = Some(format!("Depth {}", depth));
            }
            RowKind::Leaf { .. } => {}
        }
    }

    fn show_more(&mut self) {
        if self.explorer.mode().is_table() {
            self.explorer.show_more_rows();
            return;
        }
        match self.current_row() {
            Some(RenderedRow {
                kind: RowKind::ShowMore { .. },
                path,
                ..
            }) => {
                self.explorer.show_more(&path);
            }
            Some(row) => {
                // Grow the array holding the cursor row
                let array = row.path.parent().unwrap_or_else(NodePath::root);
                if self.explorer.show_more(&array).is_none() {
                    self.explorer.show_more(&row.path);
                }
            }
            None => {}
        }
    }

    fn copy(&mut self, clipboard: &dyn Clipboard) {
        let copied = if self.explorer.mode().is_table() {
            match self.current_position() {
                Some(position) => self.explorer.copy_cell(position, self.column, clipboard),
                None => Ok(false),
            }
        } else {
            match self.current_row() {
                Some(row) => self.explorer.copy_value(&row.path, clipboard),
                None => Ok(false),
            }
        };
        self.message = match copied {
            Ok(true) => Some("Copied".to_string()),
            Ok(false) => None,
            Err(err) => Some(format!("Copy failed: {}", err)),
        };
    }

    fn deliver(&mut self, artifact: Option<Artifact>) {
        let Some(artifact) = artifact else {
            self.message = Some("Nothing to export".to_string());
            return;
        };
        self.message = Some(match self.sink.deliver(&artifact) {
            Ok(path) => format!("Exported {}", path.display()),
            Err(err) => format!("Export failed: {}", err),
        });
    }

    /// Keep the cursor inside a body of `body_height` lines
    pub fn scroll_to_cursor(&mut self, body_height: usize) {
        let rows_height = if self.explorer.mode().is_table() {
            body_height.saturating_sub(TABLE_HEADER_LINES)
        } else {
            body_height
        }
        .max(1);

        if self.cursor < self.scroll {
            self.scroll = self.cursor;
        } else if self.cursor >= self.scroll + rows_height {
            self.scroll = self.cursor + 1 - rows_height;
        }
    }

    /// Lines for a terminal of `width` x `height`
    pub fn frame(&self, width: usize, height: usize) -> Vec<String> {
        let body_height = height.saturating_sub(CHROME_LINES).max(1);
        let view = self.explorer.view();

        let mut lines: Vec<String> = match &view {
            ExplorerView::NoData | ExplorerView::InvalidData => {
                let text = view.placeholder().unwrap_or_default();
                vec![StyledText::dim(text).render(self.style.color)]
            }
            ExplorerView::Tree(rows) => render_tree(rows, Some(self.cursor), self.style)
                .into_iter()
                .skip(self.scroll)
                .take(body_height)
                .collect(),
            ExplorerView::Table(table) => {
                let cursor = CellCursor {
                    row: self.cursor,
                    column: self.column,
                };
                let all = render_table(table, Some(cursor), self.style);
                let rows_height = body_height.saturating_sub(TABLE_HEADER_LINES);
                let mut lines: Vec<String> = all.iter().take(TABLE_HEADER_LINES).cloned().collect();
                lines.extend(
                    all.into_iter()
                        .skip(TABLE_HEADER_LINES + self.scroll)
                        .take(rows_height),
                );
                lines
            }
        };

        lines.resize(body_height, String::new());

        let rule = if self.style.unicode { icons::RULE } else { icons_ascii::RULE };
        lines.push(StyledText::dim(rule.repeat(width.max(1))).render(self.style.color));

        let status = StatusLine {
            mode: self.explorer.mode(),
            tabular: self.explorer.is_tabular(),
            search: self.explorer.search(),
            editing: self.draft.as_ref().map(|(draft, _)| draft.as_str()),
            max_depth: self.explorer.max_depth(),
            rows: self.row_count(),
            total: match &view {
                ExplorerView::Table(table) => Some(table.total),
                _ => None,
            },
            message: self.message.as_deref(),
        };
        lines.push(render_status_bar(&status, self.style));
        lines.push(render_help_bar(self.explorer.mode()));
        lines
    }
}
