//! Ordered commit history
//!
//! The log is the only record of commit order: position in the file is
//! chronological order, oldest first.

use crate::artifacts::log::log_entry::LogEntry;
use crate::artifacts::objects::digest::CommitHash;
use derive_new::new;

/// All log entries in append order
#[derive(Debug, Clone, Default, PartialEq, Eq, new)]
pub struct History {
    entries: Vec<LogEntry>,
}

impl History {
    pub fn entries(&self) -> &[LogEntry] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Hash of the newest commit
    pub fn latest(&self) -> Option<&CommitHash> {
        self.entries.last().map(|entry| &entry.commit_hash)
    }

    /// Position of the first entry recorded for `commit_hash`
    pub fn position(&self, commit_hash: &CommitHash) -> Option<usize> {
        self.entries
            .iter()
            .position(|entry| &entry.commit_hash == commit_hash)
    }

    pub fn contains(&self, commit_hash: &CommitHash) -> bool {
        self.position(commit_hash).is_some()
    }

    pub fn entry(&self, commit_hash: &CommitHash) -> Option<&LogEntry> {
        self.position(commit_hash).map(|index| &self.entries[index])
    }

    /// Distinct hashes starting with `prefix`, in log order
    pub fn hashes_with_prefix<'h>(
        &'h self,
        prefix: &'h str,
    ) -> impl Iterator<Item = &'h CommitHash> + 'h {
        let mut seen = std::collections::HashSet::new();
        self.entries
            .iter()
            .map(|entry| &entry.commit_hash)
            .filter(move |hash| hash.as_str().starts_with(prefix))
            .filter(move |hash| seen.insert(*hash))
    }
}
