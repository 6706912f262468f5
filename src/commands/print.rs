use anyhow::Result;

use treelens::application::{viewport_px, ExplorerView};
use treelens::domain::services::RowKind;
use treelens::domain::value_objects::ViewMode;
use treelens::Config;

use super::open_explorer;
use crate::cli::{ColorWhen, SourceArgs};
use crate::ui::context::UiContext;
use crate::ui::json::emit_event;
use crate::ui::json::events::{CompleteEvent, PlaceholderEvent, RowEvent, StartEvent, TableRowEvent};
use crate::ui::views::table::render_table;
use crate::ui::views::tree::render_tree;
use crate::ui::views::RenderStyle;

/// Options for a one-shot render
#[derive(Debug, Clone, Default)]
pub struct PrintOptions {
    pub search: Option<String>,
    pub table: bool,
    pub height: Option<u16>,
    pub depth: Option<usize>,
    pub expand_all: bool,
}

pub fn cmd_print(
    source: &SourceArgs,
    options: &PrintOptions,
    config: &Config,
    json: bool,
    verbose: u8,
    color: Option<ColorWhen>,
) -> Result<()> {
    let ui = UiContext::new(json, verbose, color, config);

    let mut settings = config.explorer_settings();
    if let Some(depth) = options.depth {
        settings.max_depth = depth.max(1);
    }
    let row_height = settings.window.row_height_px;

    let (mut explorer, _) = open_explorer(source, settings)?;

    if let Some(rows) = options.height {
        let subscription = explorer.subscribe_viewport(viewport_px(rows, row_height));
        explorer.unsubscribe_viewport(subscription);
    }
    if options.expand_all {
        explorer.expand_all();
    }
    if let Some(search) = &options.search {
        explorer.set_search(search.as_str());
    }
    if options.table && !explorer.set_view_mode(ViewMode::Table) && !json {
        eprintln!("note: table view needs an array of flat objects; printing the tree");
    }

    if json {
        emit_event(&StartEvent::new("print"))?;
        emit_view(&explorer.view())?;
        emit_event(&CompleteEvent::success("print"))?;
        return Ok(());
    }

    let style = RenderStyle::from_ui(&ui);
    let view = explorer.view();
    let lines = match &view {
        ExplorerView::NoData | ExplorerView::InvalidData => {
            vec![view.placeholder().unwrap_or_default().to_string()]
        }
        ExplorerView::Tree(rows) => render_tree(rows, None, style),
        ExplorerView::Table(table) => render_table(table, None, style),
    };
    for line in lines {
        println!("{}", line);
    }
    Ok(())
}

fn emit_view(view: &ExplorerView<'_>) -> std::io::Result<()> {
    match view {
        ExplorerView::NoData | ExplorerView::InvalidData => {
            emit_event(&PlaceholderEvent::new(view.placeholder().unwrap_or_default()))
        }
        ExplorerView::Tree(rows) => {
            for row in rows {
                let address = row.path.address().to_string();
                let event = match &row.kind {
                    RowKind::Header { label, open, .. } => RowEvent {
                        event: "row",
                        depth: row.depth,
                        address,
                        kind: "header",
                        label: Some(label.as_str()),
                        value: None,
                        class: None,
                        open: Some(*open),
                        remaining: None,
                    },
                    RowKind::Leaf { label, value } => RowEvent {
                        event: "row",
                        depth: row.depth,
                        address,
                        kind: "leaf",
                        label: Some(label.as_str()),
                        value: Some(value.text.as_str()),
                        class: Some(value.class.as_str()),
                        open: None,
                        remaining: None,
                    },
                    RowKind::ShowMore { remaining } => RowEvent {
                        event: "row",
                        depth: row.depth,
                        address,
                        kind: "show_more",
                        label: None,
                        value: None,
                        class: None,
                        open: None,
                        remaining: Some(*remaining),
                    },
                    RowKind::ExpandDeeper => RowEvent {
                        event: "row",
                        depth: row.depth,
                        address,
                        kind: "expand_deeper",
                        label: None,
                        value: None,
                        class: None,
                        open: None,
                        remaining: None,
                    },
                };
                emit_event(&event)?;
            }
            Ok(())
        }
        ExplorerView::Table(table) => {
            for row in &table.rows {
                let cells = table
                    .columns
                    .iter()
                    .zip(&row.cells)
                    .map(|(column, cell)| (column.label.as_str(), cell.display.text.as_str()))
                    .collect();
                emit_event(&TableRowEvent {
                    event: "table_row",
                    position: row.position,
                    cells,
                })?;
            }
            Ok(())
        }
    }
}
