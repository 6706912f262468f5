//! Label override file loading

use std::path::Path;

use crate::domain::entities::LabelOverrides;
use crate::error::{TreelensError, TreelensResult};

use super::document::read_document;

/// Load a flat `key -> label` JSON/YAML object. Non-string values are
/// skipped with a warning.
pub fn load_labels(path: &Path) -> TreelensResult<LabelOverrides> {
    let document = read_document(path)?;
    let (labels, skipped) = LabelOverrides::from_json(&document).ok_or_else(|| {
        TreelensError::InvalidLabels {
            file: path.to_path_buf(),
        }
    })?;

    for key in skipped {
        log::warn!("{}: label for '{}' is not a string; ignored", path.display(), key);
    }
    log::info!("loaded {} label overrides from {}", labels.len(), path.display());
    Ok(labels)
}
