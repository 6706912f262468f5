//! Clipboard port
//!
//! Copy actions hand text to whatever clipboard the front end has. A failed
//! copy is reported but never disturbs explorer state.

use std::sync::Mutex;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClipboardError {
    #[error("clipboard unavailable: {0}")]
    Unavailable(String),
    #[error("clipboard write failed: {0}")]
    Io(#[from] std::io::Error),
}

pub trait Clipboard {
    fn set_text(&self, text: &str) -> Result<(), ClipboardError>;
}

/// In-memory clipboard that remembers every copy
#[derive(Debug, Default)]
pub struct MemoryClipboard {
    copies: Mutex<Vec<String>>,
}

impl MemoryClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last(&self) -> Option<String> {
        self.copies.lock().ok()?.last().cloned()
    }

    pub fn copies(&self) -> Vec<String> {
        self.copies
            .lock()
            .map(|copies| copies.clone())
            .unwrap_or_default()
    }
}

impl Clipboard for MemoryClipboard {
    fn set_text(&self, text: &str) -> Result<(), ClipboardError> {
        self.copies
            .lock()
            .map_err(|_| ClipboardError::Unavailable("poisoned".to_string()))?
            .push(text.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_clipboard_records_copies() {
        let clipboard = MemoryClipboard::new();
        assert!(clipboard.last().is_none());
        clipboard.set_text("one").unwrap();
        clipboard.set_text("two").unwrap();
        assert_eq!(clipboard.last().as_deref(), Some("two"));
        assert_eq!(clipboard.copies(), vec!["one", "two"]);
    }
}
