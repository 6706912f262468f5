//! Configuration type definitions

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::application::ExplorerSettings;
use crate::domain::services::{WindowPolicy, DEFAULT_MAX_DEPTH, DEPTH_STEP};
use crate::domain::services::window::{MIN_CHUNK, ROW_HEIGHT_PX, TABLE_INCREMENT};
use crate::error::TreelensResult;

use super::loader;
use super::ConfigWarning;

/// Explorer tunables
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExplorerConfig {
    #[serde(default = "default_max_depth")]
    pub max_depth: usize,

    #[serde(default = "default_depth_step")]
    pub depth_step: usize,

    #[serde(default = "default_row_height")]
    pub row_height_px: u32,

    #[serde(default = "default_min_chunk")]
    pub min_chunk: usize,

    #[serde(default = "default_table_increment")]
    pub table_increment: usize,
}

impl Default for ExplorerConfig {
    fn default() -> Self {
        Self {
            max_depth: default_max_depth(),
            depth_step: default_depth_step(),
            row_height_px: default_row_height(),
            min_chunk: default_min_chunk(),
            table_increment: default_table_increment(),
        }
    }
}

fn default_max_depth() -> usize {
    DEFAULT_MAX_DEPTH
}

fn default_depth_step() -> usize {
    DEPTH_STEP
}

fn default_row_height() -> u32 {
    ROW_HEIGHT_PX
}

fn default_min_chunk() -> usize {
    MIN_CHUNK
}

fn default_table_increment() -> usize {
    TABLE_INCREMENT
}

fn default_true() -> bool {
    true
}

/// Output configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub verbosity: Verbosity,

    #[serde(default)]
    pub color: ColorMode,

    #[serde(default = "default_true")]
    pub unicode: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            verbosity: Verbosity::default(),
            color: ColorMode::default(),
            unicode: true,
        }
    }
}

/// Color output mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    #[default]
    Auto,
    Always,
    Never,
}

/// Verbosity level
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Verbosity {
    Quiet,
    #[default]
    Normal,
    Verbose,
    Debug,
}

/// Export configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportConfig {
    /// Directory artifacts are written to
    #[serde(default = "default_export_dir")]
    pub directory: PathBuf,

    /// Replace existing artifacts without asking
    #[serde(default)]
    pub overwrite: bool,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            directory: default_export_dir(),
            overwrite: false,
        }
    }
}

fn default_export_dir() -> PathBuf {
    PathBuf::from(".")
}

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub explorer: ExplorerConfig,

    #[serde(default)]
    pub output: OutputConfig,

    #[serde(default)]
    pub export: ExportConfig,
}

impl Config {
    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> TreelensResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Apply environment variable overrides (TREELENS_* prefix)
    pub fn with_env_overrides(self) -> Self {
        loader::with_env_overrides(self)
    }

    /// Explorer settings, with degenerate values clamped to something usable
    pub fn explorer_settings(&self) -> ExplorerSettings {
        let explorer = &self.explorer;
        ExplorerSettings {
            max_depth: explorer.max_depth.max(1),
            depth_step: explorer.depth_step.max(1),
            window: WindowPolicy {
                row_height_px: explorer.row_height_px.max(1),
                min_chunk: explorer.min_chunk.max(1),
                table_increment: explorer.table_increment.max(1),
            },
            ..ExplorerSettings::default()
        }
    }
}
