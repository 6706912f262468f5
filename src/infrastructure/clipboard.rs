//! OSC 52 clipboard
//!
//! Terminals that support OSC 52 put the payload of
//! `ESC ] 52 ; c ; <base64> ESC \` on the system clipboard. This works over
//! SSH and needs no platform clipboard library.

use std::io::Write;
use std::sync::Mutex;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

use crate::domain::ports::{Clipboard, ClipboardError};

pub struct Osc52Clipboard<W: Write> {
    out: Mutex<W>,
}

impl<W: Write> Osc52Clipboard<W> {
    pub fn new(out: W) -> Self {
        Self {
            out: Mutex::new(out),
        }
    }

    pub fn into_inner(self) -> Result<W, ClipboardError> {
        self.out
            .into_inner()
            .map_err(|_| ClipboardError::Unavailable("poisoned".to_string()))
    }
}

impl Osc52Clipboard<std::io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(std::io::stdout())
    }
}

pub fn osc52_sequence(text: &str) -> String {
    format!("\x1b]52;c;{}\x1b\\", STANDARD.encode(text))
}

impl<W: Write> Clipboard for Osc52Clipboard<W> {
    fn set_text(&self, text: &str) -> Result<(), ClipboardError> {
        let mut out = self
            .out
            .lock()
            .map_err(|_| ClipboardError::Unavailable("poisoned".to_string()))?;
        out.write_all(osc52_sequence(text).as_bytes())?;
        out.flush()?;
        Ok(())
    }
}
