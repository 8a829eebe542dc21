//! Snapshot diffs between two commits
//!
//! Commits store full snapshots rather than deltas, so the set of files that
//! has to change to move from one commit to another is rebuilt from the log:
//! every commit strictly after `from`, up to and including `to`, is visited in
//! order and each file in its snapshot is assigned to that commit. Later
//! visits overwrite earlier ones, so every path ends up pointing at the
//! snapshot closest to `to`.
//!
//! When `from` is newer than `to` the log is walked backwards, so the walk
//! always proceeds from `from` toward `to`.

use crate::areas::database::Database;
use crate::artifacts::log::history::History;
use crate::artifacts::log::log_entry::LogEntry;
use crate::artifacts::objects::digest::CommitHash;
use crate::errors::{Error, Result};
use std::collections::BTreeMap;

/// Path to the commit whose snapshot holds the wanted content
pub type ChangeSet = BTreeMap<String, CommitHash>;

#[derive(Debug)]
pub struct SnapshotDiff<'r> {
    database: &'r Database,
    change_set: ChangeSet,
}

impl<'r> SnapshotDiff<'r> {
    pub fn new(database: &'r Database) -> Self {
        SnapshotDiff {
            database,
            change_set: BTreeMap::new(),
        }
    }

    pub fn into_changes(self) -> ChangeSet {
        self.change_set
    }

    #[tracing::instrument(skip_all, fields(from = %from.to_short(), to = %to.to_short()))]
    pub fn compare_commits(
        &mut self,
        history: &History,
        from: &CommitHash,
        to: &CommitHash,
    ) -> Result<()> {
        if from == to {
            return Ok(());
        }

        let from_position = Self::locate(history, from)?;
        let to_position = Self::locate(history, to)?;

        for entry in Self::walk(history.entries(), from_position, to_position) {
            for path in self.database.list_files(&entry.commit_hash)? {
                self.change_set.insert(path, entry.commit_hash.clone());
            }
        }

        tracing::debug!(changes = self.change_set.len(), "computed snapshot diff");

        Ok(())
    }

    fn locate(history: &History, commit_hash: &CommitHash) -> Result<usize> {
        history.position(commit_hash).ok_or_else(|| {
            Error::CorruptLog(format!("commit {} is not in the log", commit_hash))
        })
    }

    /// Entries after `from` up to and including `to`, in traversal order
    fn walk(entries: &[LogEntry], from: usize, to: usize) -> Vec<&LogEntry> {
        if from < to {
            entries[from + 1..=to].iter().collect()
        } else {
            entries[to..from].iter().rev().collect()
        }
    }
}
