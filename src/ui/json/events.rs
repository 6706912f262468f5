//! Shared JSON event types for consistent CLI output.

use serde::Serialize;

/// Event emitted when a command starts.
#[derive(Debug, Clone, Serialize)]
pub struct StartEvent<'a> {
    pub event: &'static str,
    pub command: &'a str,
    pub version: &'static str,
}

impl<'a> StartEvent<'a> {
    pub fn new(command: &'a str) -> Self {
        Self {
            event: "start",
            command,
            version: env!("CARGO_PKG_VERSION"),
        }
    }
}

/// Event emitted when a command finishes.
#[derive(Debug, Clone, Serialize)]
pub struct CompleteEvent<'a> {
    pub event: &'static str,
    pub command: &'a str,
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl<'a> CompleteEvent<'a> {
    pub fn success(command: &'a str) -> Self {
        Self {
            event: "complete",
            command,
            success: true,
            message: None,
        }
    }

    pub fn failure(command: &'a str, message: impl Into<String>) -> Self {
        Self {
            event: "complete",
            command,
            success: false,
            message: Some(message.into()),
        }
    }
}

/// One rendered tree row (print command).
#[derive(Debug, Clone, Serialize)]
pub struct RowEvent<'a> {
    pub event: &'static str,
    pub depth: usize,
    pub address: String,
    pub kind: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub class: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub open: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remaining: Option<usize>,
}

/// Placeholder shown instead of a tree or table.
#[derive(Debug, Clone, Serialize)]
pub struct PlaceholderEvent {
    pub event: &'static str,
    pub message: &'static str,
}

impl PlaceholderEvent {
    pub fn new(message: &'static str) -> Self {
        Self {
            event: "placeholder",
            message,
        }
    }
}

/// One table row (print command, table mode).
#[derive(Debug, Clone, Serialize)]
pub struct TableRowEvent<'a> {
    pub event: &'static str,
    pub position: usize,
    pub cells: Vec<(&'a str, &'a str)>,
}

/// An artifact written by the export command.
#[derive(Debug, Clone, Serialize)]
pub struct ArtifactEvent<'a> {
    pub event: &'static str,
    pub format: &'a str,
    pub media_type: &'a str,
    pub path: String,
    pub bytes: usize,
    pub hash: String,
}
