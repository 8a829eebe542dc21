//! Log line grammar
//!
//! Each commit occupies exactly one line of the log file:
//!
//! ```text
//! <hash> | <author>: <message>
//! ```
//!
//! The author cannot contain `:`, so the first `": "` after the `" | "`
//! separator always ends the author field. Messages are single-line.

use crate::artifacts::objects::digest::CommitHash;
use derive_new::new;
use std::sync::LazyLock;

static LOG_LINE_REGEX: LazyLock<regex::Regex> = LazyLock::new(|| {
    regex::Regex::new(r"^([0-9a-f]{64}) \| ([^:\n]*): (.*)$").expect("log line regex is valid")
});

/// A single commit record
#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct LogEntry {
    pub commit_hash: CommitHash,
    pub author: String,
    pub message: String,
}

impl LogEntry {
    /// Parse one log line, returning `None` if it does not match the grammar
    pub fn parse(line: &str) -> Option<Self> {
        let captures = LOG_LINE_REGEX.captures(line)?;

        Some(LogEntry::new(
            CommitHash::try_parse(&captures[1])?,
            captures[2].to_string(),
            captures[3].to_string(),
        ))
    }

    pub fn serialize(&self) -> String {
        format!("{} | {}: {}", self.commit_hash, self.author, self.message)
    }
}
