use treelens::domain::entities::NodeKind;
use treelens::domain::services::{RenderedRow, RowKind};

use super::RenderStyle;
use crate::ui::primitives::StyledText;
use crate::ui::theme::{self, icons, icons_ascii};

/// Render a single tree row to a string
pub fn render_tree_row(row: &RenderedRow, is_active: bool, style: RenderStyle) -> String {
    let indent = "  ".repeat(row.depth);
    let cursor = if is_active { "> " } else { "  " };

    let body = match &row.kind {
        RowKind::Header {
            label,
            open,
            container,
            len,
        } => {
            let icon = theme::expansion_icon(*open, style.unicode);
            let count = match container {
                NodeKind::Array => format!("[{}]", len),
                _ => format!("{{{}}}", len),
            };
            format!(
                "{} {} {}",
                icon,
                StyledText::plain(label.as_str()).bold().render(style.color),
                StyledText::dim(count).render(style.color)
            )
        }
        RowKind::Leaf { label, value } => format!(
            "  {}: {}",
            label,
            StyledText::value(value.text.as_str(), value.class).render(style.color)
        ),
        RowKind::ShowMore { remaining } => {
            let icon = if style.unicode { icons::MORE } else { icons_ascii::MORE };
            StyledText::info(format!("{} Show more ({} remaining)", icon, remaining))
                .render(style.color)
        }
        RowKind::ExpandDeeper => {
            let icon = if style.unicode { icons::DEEPER } else { icons_ascii::DEEPER };
            StyledText::info(format!("{} Expand deeper", icon)).render(style.color)
        }
    };

    let line = format!("{}{}{}", cursor, indent, body);
    if is_active && style.color {
        StyledText::plain(line).reverse().render(true)
    } else {
        line
    }
}

/// Render every row; `cursor` marks the active row
pub fn render_tree(rows: &[RenderedRow], cursor: Option<usize>, style: RenderStyle) -> Vec<String> {
    rows.iter()
        .enumerate()
        .map(|(idx, row)| render_tree_row(row, cursor == Some(idx), style))
        .collect()
}
