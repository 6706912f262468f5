//! Directory artifact sink
//!
//! Writes exported artifacts into a directory. Every write goes to a
//! temporary file in the same directory and is then persisted over the
//! target, so readers never observe a half-written artifact.

use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use crate::domain::ports::ArtifactSink;
use crate::domain::services::Artifact;
use crate::error::{TreelensError, TreelensResult};

/// What to do when the target file already exists
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverwritePolicy {
    Replace,
    /// Fail with [`TreelensError::OverwriteDeclined`]
    Refuse,
    /// Write `data-1.json`, `data-2.json`, ... instead
    Rename,
}

#[derive(Debug, Clone)]
pub struct DirectorySink {
    directory: PathBuf,
    policy: OverwritePolicy,
    /// Explicit file name replacing the artifact's own
    file_name: Option<PathBuf>,
}

impl DirectorySink {
    pub fn new(directory: impl Into<PathBuf>, policy: OverwritePolicy) -> Self {
        Self {
            directory: directory.into(),
            policy,
            file_name: None,
        }
    }

    /// Sink that writes exactly to `path`
    pub fn to_file(path: &Path, policy: OverwritePolicy) -> Self {
        let directory = path
            .parent()
            .filter(|parent| !parent.as_os_str().is_empty())
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from("."));
        Self {
            directory,
            policy,
            file_name: path.file_name().map(PathBuf::from),
        }
    }

    /// Where `artifact` would be written, before the overwrite policy applies
    pub fn target_for(&self, artifact: &Artifact) -> PathBuf {
        match &self.file_name {
            Some(name) => self.directory.join(name),
            None => self.directory.join(artifact.file_name),
        }
    }

    fn resolve_target(&self, artifact: &Artifact) -> TreelensResult<PathBuf> {
        let target = self.target_for(artifact);
        if !target.exists() {
            return Ok(target);
        }
        match self.policy {
            OverwritePolicy::Replace => Ok(target),
            OverwritePolicy::Refuse => Err(TreelensError::OverwriteDeclined { path: target }),
            OverwritePolicy::Rename => Ok(next_free_name(&target)),
        }
    }
}

impl ArtifactSink for DirectorySink {
    fn deliver(&self, artifact: &Artifact) -> TreelensResult<PathBuf> {
        std::fs::create_dir_all(&self.directory)?;
        let target = self.resolve_target(artifact)?;
        atomic_write(&target, artifact.contents.as_bytes())?;
        log::info!("wrote {} ({})", target.display(), artifact.media_type);
        Ok(target)
    }
}

/// Write `content` to `path` via a sibling temp file and rename
pub fn atomic_write(path: &Path, content: &[u8]) -> TreelensResult<()> {
    let dir = path
        .parent()
        .filter(|parent| !parent.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    let mut temp = NamedTempFile::new_in(dir)?;
    temp.write_all(content)?;
    temp.as_file().sync_all()?;
    temp.persist(path).map_err(|err| TreelensError::Io(err.error))?;
    Ok(())
}

fn next_free_name(target: &Path) -> PathBuf {
    let stem = target
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let extension = target
        .extension()
        .map(|e| format!(".{}", e.to_string_lossy()))
        .unwrap_or_default();

    (1..)
        .map(|n| target.with_file_name(format!("{}-{}{}", stem, n, extension)))
        .find(|candidate| !candidate.exists())
        .unwrap_or_else(|| target.to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::services::export_json;
    use serde_json::json;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn writes_into_directory() {
        let dir = tempdir().unwrap();
        let sink = DirectorySink::new(dir.path(), OverwritePolicy::Refuse);
        let path = sink.deliver(&export_json(&json!({"a": 1}))).unwrap();

        assert_eq!(path, dir.path().join("data.json"));
        assert_eq!(fs::read_to_string(&path).unwrap(), "{\n  \"a\": 1\n}");
    }

    #[test]
    fn refuse_policy_keeps_existing_file() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("data.json"), "old").unwrap();
        let sink = DirectorySink::new(dir.path(), OverwritePolicy::Refuse);

        let err = sink.deliver(&export_json(&json!(1))).unwrap_err();
        assert!(matches!(err, TreelensError::OverwriteDeclined { .. }));
        assert_eq!(fs::read_to_string(dir.path().join("data.json")).unwrap(), "old");
    }

    #[test]
    fn replace_policy_overwrites() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("data.json"), "old").unwrap();
        let sink = DirectorySink::new(dir.path(), OverwritePolicy::Replace);

        sink.deliver(&export_json(&json!(1))).unwrap();
        assert_eq!(fs::read_to_string(dir.path().join("data.json")).unwrap(), "1");
    }

    #[test]
    fn rename_policy_picks_free_name() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("data.json"), "old").unwrap();
        fs::write(dir.path().join("data-1.json"), "older").unwrap();
        let sink = DirectorySink::new(dir.path(), OverwritePolicy::Rename);

        let path = sink.deliver(&export_json(&json!(1))).unwrap();
        assert_eq!(path, dir.path().join("data-2.json"));
    }

    #[test]
    fn explicit_file_name_wins() {
        let dir = tempdir().unwrap();
        let target = dir.path().join("nested").join("rows.json");
        let sink = DirectorySink::to_file(&target, OverwritePolicy::Refuse);

        assert_eq!(sink.deliver(&export_json(&json!([]))).unwrap(), target);
        assert_eq!(fs::read_to_string(&target).unwrap(), "[]");
    }
}
