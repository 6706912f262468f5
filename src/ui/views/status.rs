use treelens::domain::value_objects::ViewMode;

use super::RenderStyle;
use crate::ui::primitives::StyledText;
use crate::ui::theme::{icons, icons_ascii};

/// What the status bar reports about the explorer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusLine<'a> {
    pub mode: ViewMode,
    pub tabular: bool,
    pub search: &'a str,
    /// Search text while it is being edited
    pub editing: Option<&'a str>,
    pub max_depth: usize,
    pub rows: usize,
    /// Rows in the payload (table view)
    pub total: Option<usize>,
    pub message: Option<&'a str>,
}

pub fn render_status_bar(status: &StatusLine<'_>, style: RenderStyle) -> String {
    let mode = match status.mode {
        ViewMode::Tree => "Tree",
        ViewMode::Table => "Table",
    };
    let mut parts = vec![StyledText::info(mode).bold().render(style.color)];

    if !status.tabular {
        parts.push(StyledText::dim("table unavailable").render(style.color));
    }

    let search_icon = if style.unicode { icons::SEARCH } else { icons_ascii::SEARCH };
    match status.editing {
        Some(draft) => parts.push(format!("{} {}_", search_icon, draft)),
        None if !status.search.is_empty() => parts.push(format!("{} {}", search_icon, status.search)),
        None => {}
    }

    parts.push(format!("depth {}", status.max_depth));
    match status.total {
        Some(total) => parts.push(format!("showing {} of {}", status.rows, total)),
        None => parts.push(format!("{} rows", status.rows)),
    }

    let mut line = parts.join("  ");
    if let Some(message) = status.message {
        line.push_str("  ");
        line.push_str(&StyledText::success(message).render(style.color));
    }
    line
}

/// Keyboard shortcuts for the interactive explorer
pub fn render_help_bar(mode: ViewMode) -> String {
    match mode {
        ViewMode::Tree => String::from(
            "[/] Search  [Enter] Toggle  [d] Deeper  [a] All  [t] Table  [y] Copy  [e] JSON  [q] Quit",
        ),
        ViewMode::Table => String::from(
            "[/] Search  [←→] Column  [m] More  [t] Tree  [y] Copy cell  [e] JSON  [c] CSV  [q] Quit",
        ),
    }
}
