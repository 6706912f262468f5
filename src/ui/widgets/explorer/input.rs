//! Keyboard input mapping for the interactive explorer.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExplorerAction {
    Up,
    Down,
    PageUp,
    PageDown,
    Top,
    Bottom,
    /// Previous table column
    Left,
    /// Next table column
    Right,
    /// Toggle a header, show more, or expand deeper (depends on the row)
    Activate,
    ShowMore,
    ExpandDeeper,
    ExpandAll,
    ToggleMode,
    Copy,
    ExportJson,
    ExportCsv,
    StartSearch,
    /// Clear an active search, or quit when there is none
    ClearSearch,
    Quit,
}

/// Edits while the search line is focused
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchEdit {
    Insert(char),
    Backspace,
    Commit,
    Cancel,
}

fn is_interrupt(key: &KeyEvent) -> bool {
    key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c')
}

/// Convert a keyboard event to an explorer action
pub fn key_to_action(key: KeyEvent) -> Option<ExplorerAction> {
    if is_interrupt(&key) {
        return Some(ExplorerAction::Quit);
    }

    match key.code {
        KeyCode::Up | KeyCode::Char('k') => Some(ExplorerAction::Up),
        KeyCode::Down | KeyCode::Char('j') => Some(ExplorerAction::Down),
        KeyCode::PageUp => Some(ExplorerAction::PageUp),
        KeyCode::PageDown => Some(ExplorerAction::PageDown),
        KeyCode::Home | KeyCode::Char('g') => Some(ExplorerAction::Top),
        KeyCode::End | KeyCode::Char('G') => Some(ExplorerAction::Bottom),
        KeyCode::Left | KeyCode::Char('h') => Some(ExplorerAction::Left),
        KeyCode::Right | KeyCode::Char('l') => Some(ExplorerAction::Right),
        KeyCode::Enter | KeyCode::Char(' ') => Some(ExplorerAction::Activate),
        KeyCode::Char('m') => Some(ExplorerAction::ShowMore),
        KeyCode::Char('d') => Some(ExplorerAction::ExpandDeeper),
        KeyCode::Char('a') => Some(ExplorerAction::ExpandAll),
        KeyCode::Char('t') | KeyCode::Tab => Some(ExplorerAction::ToggleMode),
        KeyCode::Char('y') => Some(ExplorerAction::Copy),
        KeyCode::Char('e') => Some(ExplorerAction::ExportJson),
        KeyCode::Char('c') => Some(ExplorerAction::ExportCsv),
        KeyCode::Char('/') => Some(ExplorerAction::StartSearch),
        KeyCode::Esc => Some(ExplorerAction::ClearSearch),
        KeyCode::Char('q') => Some(ExplorerAction::Quit),
        _ => None,
    }
}

/// Convert a keyboard event to a search-line edit
pub fn key_to_search_edit(key: KeyEvent) -> Option<SearchEdit> {
    if is_interrupt(&key) {
        return Some(SearchEdit::Cancel);
    }

    match key.code {
        KeyCode::Char(ch) => Some(SearchEdit::Insert(ch)),
        KeyCode::Backspace => Some(SearchEdit::Backspace),
        KeyCode::Enter => Some(SearchEdit::Commit),
        KeyCode::Esc => Some(SearchEdit::Cancel),
        _ => None,
    }
}
