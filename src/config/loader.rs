//! Configuration loading

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{TreelensError, TreelensResult};

use super::types::{ColorMode, Config, Verbosity};
use super::ConfigWarning;

/// Project-level config file name
pub const PROJECT_CONFIG: &str = ".treelens.toml";

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> TreelensResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| TreelensError::InvalidConfig {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(&content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Candidate config files, highest priority first
pub fn config_candidates(project_root: Option<&Path>) -> Vec<PathBuf> {
    let mut candidates = Vec::new();
    if let Some(root) = project_root {
        candidates.push(root.join(PROJECT_CONFIG));
    }
    if let Some(user_dir) = dirs::config_dir() {
        candidates.push(user_dir.join("treelens").join("config.toml"));
    }
    candidates
}

/// First existing config file, loaded with warnings.
///
/// A file that fails to parse is an error; missing files are skipped.
pub fn load_layered(
    project_root: Option<&Path>,
) -> TreelensResult<(Config, Vec<ConfigWarning>, Option<PathBuf>)> {
    for candidate in config_candidates(project_root) {
        if candidate.is_file() {
            let (config, warnings) = load_with_warnings(&candidate)?;
            log::debug!("loaded config from {}", candidate.display());
            return Ok((with_env_overrides(config), warnings, Some(candidate)));
        }
    }
    Ok((with_env_overrides(Config::default()), Vec::new(), None))
}

/// Apply environment variable overrides (TREELENS_* prefix)
pub fn with_env_overrides(config: Config) -> Config {
    with_overrides_from(config, |key| std::env::var(key).ok())
}

/// Apply overrides read through `get_env`
pub fn with_overrides_from<F>(mut config: Config, get_env: F) -> Config
where
    F: Fn(&str) -> Option<String>,
{
    // TREELENS_MAX_DEPTH
    if let Some(depth) = get_env("TREELENS_MAX_DEPTH").and_then(|v| v.trim().parse().ok()) {
        config.explorer.max_depth = depth;
    }

    // TREELENS_ROW_HEIGHT
    if let Some(height) = get_env("TREELENS_ROW_HEIGHT").and_then(|v| v.trim().parse().ok()) {
        config.explorer.row_height_px = height;
    }

    // TREELENS_VERBOSITY
    if let Some(verbosity) = get_env("TREELENS_VERBOSITY") {
        config.output.verbosity = match verbosity.to_lowercase().as_str() {
            "quiet" => Verbosity::Quiet,
            "verbose" => Verbosity::Verbose,
            "debug" => Verbosity::Debug,
            _ => Verbosity::Normal,
        };
    }

    // TREELENS_COLOR
    if let Some(color) = get_env("TREELENS_COLOR") {
        config.output.color = match color.to_lowercase().as_str() {
            "always" => ColorMode::Always,
            "never" => ColorMode::Never,
            _ => ColorMode::Auto,
        };
    }

    config
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    content
        .lines()
        .position(|line| line.contains(needle))
        .map(|i| i + 1)
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "explorer",
        "max_depth",
        "depth_step",
        "row_height_px",
        "min_chunk",
        "table_increment",
        "output",
        "verbosity",
        "color",
        "unicode",
        "export",
        "directory",
        "overwrite",
    ];

    let mut best: Option<(&str, usize)> = None;
    for candidate in CANDIDATES {
        let dist = levenshtein(unknown, candidate);
        best = match best {
            None => Some((candidate, dist)),
            Some((_, best_dist)) if dist < best_dist => Some((candidate, dist)),
            Some(current) => Some(current),
        };
    }

    match best {
        Some((candidate, dist)) if dist <= 2 => Some(candidate.to_string()),
        _ => None,
    }
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    let mut prev: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr = vec![0usize; b_bytes.len() + 1];

    for (i, &ac) in a_bytes.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_bytes.iter().enumerate() {
            let cost = usize::from(ac != bc);
            curr[j + 1] = (prev[j + 1] + 1).min(curr[j] + 1).min(prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_bytes.len()]
}
