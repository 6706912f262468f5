use anyhow::{bail, Result};

use treelens::domain::value_objects::ViewMode;
use treelens::infrastructure::document::is_stdin;
use treelens::infrastructure::{DirectorySink, Osc52Clipboard, OverwritePolicy, PayloadWatcher};
use treelens::Config;

use super::open_explorer;
use crate::cli::{ColorWhen, SourceArgs};
use crate::ui::context::UiContext;
use crate::ui::views::RenderStyle;
use crate::ui::widgets::explorer::{run_interactive, ExplorerScreen, Reloader};

pub fn cmd_view(
    source: &SourceArgs,
    watch: bool,
    table: bool,
    search: Option<&str>,
    config: &Config,
    verbose: u8,
    color: Option<ColorWhen>,
) -> Result<()> {
    let ui = UiContext::new(false, verbose, color, config);
    if !ui.terminal.is_tty {
        bail!("view needs an interactive terminal; use `treelens print` instead");
    }
    if watch && is_stdin(&source.file) {
        bail!("--watch needs a file path, not stdin");
    }

    let (mut explorer, schema) = open_explorer(source, config.explorer_settings())?;
    if table && !explorer.set_view_mode(ViewMode::Table) {
        log::warn!("table view requested for a non-tabular payload");
    }
    if let Some(search) = search {
        explorer.set_search(search);
    }

    let reloader = if watch {
        Some(Reloader {
            watcher: PayloadWatcher::new(&source.file)?,
            schema,
        })
    } else {
        None
    };

    let policy = if config.export.overwrite {
        OverwritePolicy::Replace
    } else {
        OverwritePolicy::Rename
    };
    let sink = DirectorySink::new(config.export.directory.clone(), policy);

    let mut screen = ExplorerScreen::new(explorer, sink, RenderStyle::from_ui(&ui));
    let clipboard = Osc52Clipboard::stdout();
    run_interactive(
        &mut screen,
        reloader,
        &clipboard,
        config.explorer_settings().window.row_height_px,
    )?;
    Ok(())
}
