//! Error types for Treelens
//!
//! Uses `thiserror` for library errors. The explorer core never returns
//! these: every core failure degrades in place. They cover the edges
//! (loading envelopes, config, writing artifacts, watching files).

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for Treelens operations
pub type TreelensResult<T> = Result<T, TreelensError>;

/// Main error type for Treelens operations
#[derive(Error, Debug)]
pub enum TreelensError {
    /// Input document could not be parsed
    #[error("invalid document {source_name}: {message}")]
    InvalidDocument {
        source_name: String,
        message: String,
    },

    /// Config file could not be parsed
    #[error("invalid config in {file}: {message}")]
    InvalidConfig { file: PathBuf, message: String },

    /// Label mapping file is not a flat object
    #[error("label mapping in {file} must be a JSON object of key -> label")]
    InvalidLabels { file: PathBuf },

    /// Export format not understood
    #[error("unsupported export format '{0}' (expected 'json' or 'csv')")]
    UnsupportedFormat(String),

    /// Export target exists and overwrite was declined
    #[error("refusing to overwrite {path}")]
    OverwriteDeclined { path: PathBuf },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parsing error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML parsing error
    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml_ng::Error),

    /// CSV writer error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// File watcher error
    #[error("watch error: {0}")]
    Watch(#[from] notify::Error),
}
