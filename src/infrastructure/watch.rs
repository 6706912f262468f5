//! Payload file watching
//!
//! Watches the directory holding the payload file (editors often replace a
//! file by renaming over it) and reports a new envelope only when the file's
//! content hash actually changed.

use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::sync::mpsc::{channel, Receiver};
use std::time::Duration;

use notify::{Config, Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher};

use crate::domain::entities::DataEnvelope;
use crate::domain::value_objects::ContentHash;
use crate::error::TreelensResult;

use super::document::{parse_document, DocumentFormat};

/// Remembers the last seen content hash
#[derive(Debug, Default)]
pub struct ChangeDetector {
    last: Option<ContentHash>,
}

impl ChangeDetector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `content`; true when it differs from the previous content
    pub fn observe(&mut self, content: &[u8]) -> bool {
        let hash = ContentHash::from_bytes(content);
        if self.last.as_ref() == Some(&hash) {
            return false;
        }
        self.last = Some(hash);
        true
    }
}

pub struct PayloadWatcher {
    path: PathBuf,
    file_name: Option<OsString>,
    format: DocumentFormat,
    detector: ChangeDetector,
    rx: Receiver<notify::Result<Event>>,
    _watcher: RecommendedWatcher,
}

impl PayloadWatcher {
    pub fn new(path: &Path) -> TreelensResult<Self> {
        let (tx, rx) = channel();
        let mut watcher = RecommendedWatcher::new(
            move |res: notify::Result<Event>| {
                let _ = tx.send(res);
            },
            Config::default(),
        )?;

        let dir = path
            .parent()
            .filter(|parent| !parent.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."));
        watcher.watch(dir, RecursiveMode::NonRecursive)?;

        let mut detector = ChangeDetector::new();
        if let Ok(content) = std::fs::read(path) {
            detector.observe(&content);
        }

        log::info!("watching {}", path.display());
        Ok(Self {
            path: path.to_path_buf(),
            file_name: path.file_name().map(OsString::from),
            format: DocumentFormat::for_path(path),
            detector,
            rx,
            _watcher: watcher,
        })
    }

    /// Wait up to `timeout` for a change; returns the new envelope if the
    /// content changed and parsed.
    pub fn poll(&mut self, timeout: Duration) -> Option<DataEnvelope> {
        let first = self.rx.recv_timeout(timeout).ok()?;
        let mut touched = self.concerns_payload(first);
        while let Ok(event) = self.rx.try_recv() {
            touched |= self.concerns_payload(event);
        }
        if !touched {
            return None;
        }
        self.reload()
    }

    fn concerns_payload(&self, event: notify::Result<Event>) -> bool {
        match event {
            Ok(event) => {
                !matches!(event.kind, EventKind::Access(_))
                    && event
                        .paths
                        .iter()
                        .any(|p| p.file_name().map(OsString::from) == self.file_name)
            }
            Err(err) => {
                log::warn!("watch error: {}", err);
                false
            }
        }
    }

    fn reload(&mut self) -> Option<DataEnvelope> {
        let content = match std::fs::read(&self.path) {
            Ok(content) => content,
            Err(err) => {
                log::warn!("cannot read {}: {}", self.path.display(), err);
                return None;
            }
        };
        if !self.detector.observe(&content) {
            log::debug!("{} touched without content change", self.path.display());
            return None;
        }

        match parse_document(&content, self.format, &self.path.display().to_string()) {
            Ok(document) => {
                log::info!("{} changed; reloading", self.path.display());
                Some(DataEnvelope::from_document(document))
            }
            Err(err) => {
                log::warn!("{}", err);
                None
            }
        }
    }
}
