//! Configuration warning value object.

use std::fmt;
use std::path::PathBuf;

/// Non-fatal configuration warning (an unknown key in a config file).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    /// The unknown key (last segment of its dotted path)
    pub key: String,
    /// The file where the key was found
    pub file: PathBuf,
    /// The line number (1-indexed) if it could be located
    pub line: Option<usize>,
    /// Closest known key, when one is near enough
    pub suggestion: Option<String>,
}

impl fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.line {
            Some(line) => write!(
                f,
                "unknown config key '{}' in {}:{}",
                self.key,
                self.file.display(),
                line
            )?,
            None => write!(
                f,
                "unknown config key '{}' in {}",
                self.key,
                self.file.display()
            )?,
        }
        if let Some(suggestion) = &self.suggestion {
            write!(f, " (did you mean '{}'?)", suggestion)?;
        }
        Ok(())
    }
}
