//! Commit store
//!
//! Every commit owns a directory named after its hash that mirrors the
//! working tree layout and holds a full copy of every file tracked at commit
//! time:
//!
//! ```text
//! .tvc/commits/<hash>/<relative-path>
//! ```
//!
//! Snapshots are never amended or deleted once written.

use crate::artifacts::diff::snapshot_diff::SnapshotDiff;
use crate::artifacts::log::history::History;
use crate::artifacts::objects::digest::{CommitHash, Fingerprint};
use crate::artifacts::objects::hasher;
use crate::errors::{Error, Result};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

#[derive(Debug)]
pub struct Database {
    path: Box<Path>,
}

impl Database {
    pub fn new(path: Box<Path>) -> Self {
        Database { path }
    }

    pub fn commits_path(&self) -> &Path {
        &self.path
    }

    pub fn commit_path(&self, commit_hash: &CommitHash) -> PathBuf {
        self.path.join(commit_hash.as_str())
    }

    /// Location of `name`'s copy inside a commit's snapshot
    pub fn snapshot_path(&self, commit_hash: &CommitHash, name: &str) -> PathBuf {
        self.commit_path(commit_hash).join(name)
    }

    /// Copy a file's bytes into a commit snapshot
    ///
    /// # Returns
    ///
    /// The fingerprint of the stored bytes
    pub fn store_file(
        &self,
        commit_hash: &CommitHash,
        name: &str,
        data: &[u8],
    ) -> Result<Fingerprint> {
        let snapshot_path = self.snapshot_path(commit_hash, name);

        if let Some(parent) = snapshot_path.parent() {
            std::fs::create_dir_all(parent).map_err(Error::at(parent))?;
        }
        std::fs::write(&snapshot_path, data).map_err(Error::at(&snapshot_path))?;

        tracing::debug!(commit = %commit_hash.to_short(), path = name, "stored snapshot file");

        Ok(hasher::bytes_fingerprint(data))
    }

    /// Every file in a commit's snapshot, as sorted `/`-separated relative paths
    pub fn list_files(&self, commit_hash: &CommitHash) -> Result<Vec<String>> {
        let commit_path = self.commit_path(commit_hash);
        if !commit_path.is_dir() {
            return Err(Error::CorruptLog(format!(
                "snapshot for commit {} is missing",
                commit_hash
            )));
        }

        let mut files = Vec::new();
        for entry in WalkDir::new(&commit_path).sort_by_file_name() {
            let entry = entry?;
            if !entry.file_type().is_file() {
                continue;
            }

            if let Ok(relative_path) = entry.path().strip_prefix(&commit_path) {
                files.push(to_index_name(relative_path));
            }
        }

        Ok(files)
    }

    /// Files to restore, and from which commit, to move from `from` to `to`
    pub fn snapshot_diff(
        &self,
        history: &History,
        from: &CommitHash,
        to: &CommitHash,
    ) -> Result<SnapshotDiff<'_>> {
        let mut snapshot_diff = SnapshotDiff::new(self);
        snapshot_diff.compare_commits(history, from, to)?;
        Ok(snapshot_diff)
    }
}

/// Render a relative path with `/` separators regardless of platform
pub(crate) fn to_index_name(relative_path: &Path) -> String {
    relative_path
        .components()
        .map(|component| component.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}
