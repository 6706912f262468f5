//! Text rendering of explorer views.
//!
//! Views turn domain rows into terminal lines. They never touch the
//! terminal themselves, so the interactive widget and `print` share them.

pub mod status;
pub mod table;
pub mod tree;

use crate::ui::context::UiContext;

/// Output styling switches taken from the UI context
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderStyle {
    pub color: bool,
    pub unicode: bool,
}

impl RenderStyle {
    pub const PLAIN: RenderStyle = RenderStyle {
        color: false,
        unicode: false,
    };

    pub fn from_ui(ui: &UiContext) -> Self {
        Self {
            color: ui.color,
            unicode: ui.unicode,
        }
    }
}
