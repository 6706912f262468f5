//! Configuration module for Treelens
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (TREELENS_*)
//! 3. Project config (./.treelens.toml)
//! 4. User config (~/.config/treelens/config.toml)
//! 5. Built-in defaults (lowest priority)

mod loader;
mod types;

pub use crate::domain::value_objects::ConfigWarning;

pub use loader::{config_candidates, load_layered, with_overrides_from, PROJECT_CONFIG};
pub use types::{ColorMode, Config, ExplorerConfig, ExportConfig, OutputConfig, Verbosity};
