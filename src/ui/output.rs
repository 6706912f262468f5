use std::path::Path;

use treelens::domain::value_objects::ConfigWarning;

use crate::ui::primitives::StyledText;
use crate::ui::theme::{icons, icons_ascii};

pub fn print_config_warnings(path: &Path, warnings: &[ConfigWarning], color: bool, unicode: bool) {
    for line in format_config_warnings(path, warnings, unicode) {
        eprintln!("{}", StyledText::warning(line).render(color));
    }
}

fn format_config_warnings(path: &Path, warnings: &[ConfigWarning], unicode: bool) -> Vec<String> {
    let icon = if unicode { icons::WARNING } else { icons_ascii::WARNING };
    let mut lines = Vec::new();
    for w in warnings {
        match w.line {
            Some(line) => lines.push(format!(
                "{} Unknown config key '{}' in {}:{}",
                icon,
                w.key,
                path.display(),
                line
            )),
            None => lines.push(format!(
                "{} Unknown config key '{}' in {}",
                icon,
                w.key,
                path.display()
            )),
        }
        if let Some(suggestion) = &w.suggestion {
            lines.push(format!("   Did you mean '{}'?", suggestion));
        }
    }
    lines
}
