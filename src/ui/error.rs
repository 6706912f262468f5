use treelens::TreelensError;

use crate::ui::json::{emit_event, events::CompleteEvent};
use crate::ui::primitives::StyledText;
use crate::ui::context::Terminal;
use crate::ui::theme::{icons, icons_ascii};

/// Follow-up hint for errors the user can fix
fn hint_for(err: &TreelensError) -> Option<&'static str> {
    match err {
        TreelensError::InvalidDocument { .. } => {
            Some("Input must be JSON or YAML (use a .yaml/.yml extension for YAML).")
        }
        TreelensError::InvalidLabels { .. } => Some("Labels file example: {\"cust_id\": \"Customer ID\"}"),
        TreelensError::OverwriteDeclined { .. } => Some("Re-run with --force to replace the file."),
        TreelensError::InvalidConfig { .. } => Some("Fix the TOML syntax or remove the file."),
        _ => None,
    }
}

pub fn format_error(err: &anyhow::Error, color: bool, unicode: bool) -> String {
    let icon = if unicode { icons::ERROR } else { icons_ascii::ERROR };
    let mut out = format!("{} {}\n", StyledText::error(icon).bold().render(color), err);
    if let Some(hint) = err.downcast_ref::<TreelensError>().and_then(hint_for) {
        out.push_str(&StyledText::dim(format!("  {}\n", hint)).render(color));
    }
    out
}

pub fn print_error(err: &anyhow::Error, command: &str, json: bool) {
    if json {
        let _ = emit_event(&CompleteEvent::failure(command, err.to_string()));
        return;
    }

    let terminal = Terminal::detect();
    eprint!("{}", format_error(err, terminal.color, terminal.unicode));
}
