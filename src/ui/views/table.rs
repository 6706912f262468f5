use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use treelens::domain::services::TableView;

use super::RenderStyle;
use crate::ui::primitives::StyledText;
use crate::ui::theme::{icons, icons_ascii};

/// Widest a column may grow before cells are truncated
pub const MAX_COLUMN_WIDTH: usize = 32;

const POSITION_HEADER: &str = "#";
const GAP: &str = "  ";

/// Active cell in the table (row index into `TableView::rows`, column index)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellCursor {
    pub row: usize,
    pub column: usize,
}

/// Render a table view: header, rule, rows, and the "show more" footer
pub fn render_table(view: &TableView<'_>, cursor: Option<CellCursor>, style: RenderStyle) -> Vec<String> {
    let position_width = view
        .rows
        .iter()
        .map(|row| row.position.to_string().width())
        .max()
        .unwrap_or(0)
        .max(POSITION_HEADER.width());

    let widths: Vec<usize> = view
        .columns
        .iter()
        .enumerate()
        .map(|(idx, column)| {
            view.rows
                .iter()
                .map(|row| row.cells[idx].display.text.width())
                .chain(std::iter::once(column.label.width()))
                .max()
                .unwrap_or(0)
                .min(MAX_COLUMN_WIDTH)
        })
        .collect();

    let mut lines = Vec::with_capacity(view.rows.len() + 3);

    let mut header = pad(POSITION_HEADER, position_width);
    for (column, width) in view.columns.iter().zip(&widths) {
        header.push_str(GAP);
        header.push_str(&StyledText::plain(pad(&column.label, *width)).bold().render(style.color));
    }
    lines.push(header.trim_end().to_string());

    let rule_char = if style.unicode { icons::RULE } else { icons_ascii::RULE };
    let total_width = position_width + widths.iter().map(|w| w + GAP.len()).sum::<usize>();
    lines.push(StyledText::dim(rule_char.repeat(total_width)).render(style.color));

    for (row_idx, row) in view.rows.iter().enumerate() {
        let mut line = StyledText::dim(pad(&row.position.to_string(), position_width)).render(style.color);
        for (col_idx, (cell, width)) in row.cells.iter().zip(&widths).enumerate() {
            line.push_str(GAP);
            let text = pad(&truncate(&cell.display.text, *width, style.unicode), *width);
            let mut styled = StyledText::value(text, cell.display.class);
            if cursor == Some(CellCursor { row: row_idx, column: col_idx }) {
                styled = styled.reverse();
            }
            line.push_str(&styled.render(style.color));
        }
        lines.push(line.trim_end().to_string());
    }

    if view.has_more() {
        let icon = if style.unicode { icons::MORE } else { icons_ascii::MORE };
        lines.push(
            StyledText::info(format!(
                "{} Show more ({} of {} rows shown)",
                icon, view.visible, view.total
            ))
            .render(style.color),
        );
    }

    lines
}

fn pad(text: &str, width: usize) -> String {
    let used = text.width();
    if used >= width {
        text.to_string()
    } else {
        format!("{}{}", text, " ".repeat(width - used))
    }
}

/// Cut `text` to at most `width` display columns, marking the cut
pub fn truncate(text: &str, width: usize, unicode: bool) -> String {
    if text.width() <= width {
        return text.to_string();
    }
    let marker = if unicode { icons::MORE } else { icons_ascii::MORE };
    let budget = width.saturating_sub(marker.width());

    let mut out = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        used += w;
        out.push(ch);
    }
    out.push_str(marker);
    out
}
