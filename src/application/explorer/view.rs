//! What the front end should draw

use crate::domain::services::{RenderedRow, TableView};

#[derive(Debug, Clone, PartialEq)]
pub enum ExplorerView<'a> {
    /// No payload delivered yet (or an explicit null)
    NoData,
    /// Payload is a bare scalar
    InvalidData,
    Tree(Vec<RenderedRow>),
    Table(TableView<'a>),
}

impl ExplorerView<'_> {
    pub const NO_DATA: &'static str = "No data yet";
    pub const INVALID_DATA: &'static str = "Invalid data";

    /// Placeholder text, for the two non-content views
    pub fn placeholder(&self) -> Option<&'static str> {
        match self {
            ExplorerView::NoData => Some(Self::NO_DATA),
            ExplorerView::InvalidData => Some(Self::INVALID_DATA),
            _ => None,
        }
    }
}
