use std::path::PathBuf;

use anyhow::Result;

use treelens::domain::ports::ArtifactSink;
use treelens::domain::services::{Artifact, ExportFormat};
use treelens::domain::value_objects::{ContentHash, ViewMode};
use treelens::infrastructure::{DirectorySink, OverwritePolicy};
use treelens::{Config, TreelensError};

use super::open_explorer;
use crate::cli::{ColorWhen, SourceArgs};
use crate::ui::context::UiContext;
use crate::ui::json::emit_event;
use crate::ui::json::events::{ArtifactEvent, CompleteEvent, StartEvent};
use crate::ui::primitives::StyledText;
use crate::ui::context::stdin_is_tty;
use crate::ui::theme::{self, icons, icons_ascii};

/// Options for a single export
#[derive(Debug, Clone)]
pub struct ExportOptions {
    pub format: ExportFormat,
    pub output: Option<PathBuf>,
    pub force: bool,
}

const NOT_TABULAR_NOTE: &str = "CSV export needs an array of flat objects; nothing written";

pub fn cmd_export(
    source: &SourceArgs,
    options: &ExportOptions,
    config: &Config,
    json: bool,
    verbose: u8,
    color: Option<ColorWhen>,
) -> Result<()> {
    let ui = UiContext::new(json, verbose, color, config);
    let ExportOptions { format, output, force } = options;
    let (format, force) = (*format, *force);
    if json {
        emit_event(&StartEvent::new("export"))?;
    }

    let (mut explorer, _) = open_explorer(source, config.explorer_settings())?;

    let artifact = match format {
        ExportFormat::Json => explorer.export_json(),
        ExportFormat::Csv => {
            explorer.set_view_mode(ViewMode::Table);
            explorer.export_csv()?
        }
    };

    let Some(artifact) = artifact else {
        let note = match format {
            ExportFormat::Csv => NOT_TABULAR_NOTE,
            ExportFormat::Json => "document has no payload; nothing written",
        };
        if json {
            let mut complete = CompleteEvent::success("export");
            complete.message = Some(note.to_string());
            emit_event(&complete)?;
        } else {
            eprintln!("note: {}", note);
        }
        return Ok(());
    };

    let policy = if force || config.export.overwrite {
        OverwritePolicy::Replace
    } else {
        OverwritePolicy::Refuse
    };
    let mut sink = match output {
        Some(path) => DirectorySink::to_file(path, policy),
        None => DirectorySink::new(config.export.directory.clone(), policy),
    };

    let target = sink.target_for(&artifact);
    if policy == OverwritePolicy::Refuse && target.exists() && !json && stdin_is_tty() {
        if !confirm_overwrite(&target)? {
            return Err(TreelensError::OverwriteDeclined { path: target }.into());
        }
        sink = match output {
            Some(path) => DirectorySink::to_file(path, OverwritePolicy::Replace),
            None => DirectorySink::new(config.export.directory.clone(), OverwritePolicy::Replace),
        };
    }

    let written = sink.deliver(&artifact)?;
    report(&artifact, format, &written, &ui)?;
    Ok(())
}

fn confirm_overwrite(target: &std::path::Path) -> Result<bool> {
    let answer = dialoguer::Confirm::with_theme(&theme::prompt_theme())
        .with_prompt(format!("{} exists. Overwrite?", target.display()))
        .default(false)
        .interact()?;
    Ok(answer)
}

fn report(artifact: &Artifact, format: ExportFormat, written: &std::path::Path, ui: &UiContext) -> Result<()> {
    let hash = ContentHash::from_bytes(artifact.contents.as_bytes());

    if ui.json {
        let format = format.to_string();
        emit_event(&ArtifactEvent {
            event: "artifact",
            format: &format,
            media_type: artifact.media_type,
            path: written.display().to_string(),
            bytes: artifact.contents.len(),
            hash: hash.to_string(),
        })?;
        emit_event(&CompleteEvent::success("export"))?;
        return Ok(());
    }

    let icon = if ui.unicode { icons::SUCCESS } else { icons_ascii::SUCCESS };
    println!(
        "{} Wrote {} ({} bytes, {})",
        StyledText::success(icon).render(ui.color),
        written.display(),
        artifact.contents.len(),
        StyledText::dim(hash.as_str()).render(ui.color)
    );
    Ok(())
}
