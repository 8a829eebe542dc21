//! Commit log
//!
//! The log is an append-only text file with one line per commit, oldest
//! first. Lines are never rewritten; the position of a line is the commit's
//! place in history.
//!
//! The log is all-or-nothing: a single malformed line fails the whole load.

use crate::artifacts::log::history::History;
use crate::artifacts::log::log_entry::LogEntry;
use crate::artifacts::objects::digest::CommitHash;
use crate::errors::{Error, Result};
use derive_new::new;
use std::io::Write;
use std::path::Path;

#[derive(Debug, new)]
pub struct Log {
    /// Path to the log file (typically `.tvc/log`)
    path: Box<Path>,
}

impl Log {
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append a commit record and flush it to disk
    pub fn append(&self, entry: &LogEntry) -> Result<()> {
        let mut log_file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(Error::at(&self.path))?;

        log_file
            .write_all(format!("{}\n", entry.serialize()).as_bytes())
            .and_then(|_| log_file.sync_all())
            .map_err(Error::at(&self.path))?;

        Ok(())
    }

    /// Parse every recorded commit, in append order
    pub fn load_all(&self) -> Result<History> {
        if !self.path.exists() {
            return Ok(History::default());
        }

        let content = std::fs::read_to_string(&self.path).map_err(Error::at(&self.path))?;

        let entries = content
            .lines()
            .enumerate()
            .filter(|(_, line)| !line.is_empty())
            .map(|(number, line)| {
                LogEntry::parse(line).ok_or_else(|| {
                    Error::CorruptLog(format!("line {} is malformed: {:?}", number + 1, line))
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(History::new(entries))
    }

    /// Hash of the newest commit, if any
    pub fn latest(&self) -> Result<Option<CommitHash>> {
        Ok(self.load_all()?.latest().cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_fs::TempDir;
    use assert_fs::prelude::{FileWriteStr, PathChild};
    use pretty_assertions::assert_eq;
    use rstest::{fixture, rstest};

    fn entry(n: u8, message: &str) -> LogEntry {
        LogEntry::new(
            CommitHash::try_parse(format!("{:02x}", n).repeat(32)).unwrap(),
            "Mat".to_string(),
            message.to_string(),
        )
    }

    #[fixture]
    fn dir() -> TempDir {
        TempDir::new().unwrap()
    }

    #[rstest]
    fn test_missing_log_is_empty(dir: TempDir) {
        let log = Log::new(dir.path().join("log").into_boxed_path());

        assert!(log.load_all().unwrap().is_empty());
        assert_eq!(log.latest().unwrap(), None);
    }

    #[rstest]
    fn test_appended_entries_load_in_order(dir: TempDir) {
        let log = Log::new(dir.path().join("log").into_boxed_path());
        let entries = vec![entry(1, "first"), entry(2, "second"), entry(3, "third")];

        for entry in &entries {
            log.append(entry).unwrap();
        }

        let history = log.load_all().unwrap();
        assert_eq!(history.entries(), entries.as_slice());
        assert_eq!(log.latest().unwrap(), Some(entries[2].commit_hash.clone()));
        assert_eq!(history.position(&entries[1].commit_hash), Some(1));
    }

    #[rstest]
    fn test_append_never_rewrites_existing_lines(dir: TempDir) {
        let log = Log::new(dir.path().join("log").into_boxed_path());
        log.append(&entry(1, "first")).unwrap();
        let before = std::fs::read_to_string(log.path()).unwrap();

        log.append(&entry(2, "second")).unwrap();
        let after = std::fs::read_to_string(log.path()).unwrap();

        assert!(after.starts_with(&before));
        assert_eq!(after.lines().count(), 2);
    }

    #[rstest]
    fn test_single_malformed_line_fails_whole_load(dir: TempDir) {
        let log = Log::new(dir.path().join("log").into_boxed_path());
        log.append(&entry(1, "first")).unwrap();
        let content = std::fs::read_to_string(log.path()).unwrap();
        dir.child("log")
            .write_str(&format!("{}this is not a commit\n", content))
            .unwrap();

        let result = log.load_all();
        assert!(matches!(result, Err(Error::CorruptLog(message)) if message.contains("line 2")));
    }
}
