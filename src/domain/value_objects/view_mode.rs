//! View mode value object

use serde::{Deserialize, Serialize};

/// How the explorer presents the current payload
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    /// Collapsible tree (always available)
    #[default]
    Tree,
    /// Flat table (only for tabular payloads)
    Table,
}

impl ViewMode {
    pub fn other(self) -> Self {
        match self {
            ViewMode::Tree => ViewMode::Table,
            ViewMode::Table => ViewMode::Tree,
        }
    }

    pub fn is_table(self) -> bool {
        matches!(self, ViewMode::Table)
    }
}

impl std::fmt::Display for ViewMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ViewMode::Tree => write!(f, "tree"),
            ViewMode::Table => write!(f, "table"),
        }
    }
}
