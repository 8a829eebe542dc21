//! User supplied commit references
//!
//! A reference is either the symbolic token `latest`, meaning the newest
//! entry in the log, or a commit hash. Hashes may be abbreviated to any
//! unique prefix of at least four characters.

use crate::artifacts::log::history::History;
use crate::artifacts::objects::digest::CommitHash;
use crate::errors::{Error, Result};

/// Symbolic name for the newest commit in the log
pub const LATEST_REF: &str = "latest";

/// Shortest accepted abbreviated hash
const MIN_PREFIX_LENGTH: usize = 4;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommitRef {
    /// The newest commit in the log
    Latest,
    /// An explicit, possibly abbreviated, commit hash
    Hash(String),
}

impl CommitRef {
    pub fn parse(target: &str) -> Self {
        match target {
            LATEST_REF => CommitRef::Latest,
            hash => CommitRef::Hash(hash.to_string()),
        }
    }

    /// Resolve the reference against the log
    ///
    /// Only hashes recorded in `history` resolve; anything else is `NotFound`.
    pub fn resolve(&self, history: &History) -> Result<CommitHash> {
        match self {
            CommitRef::Latest => history
                .latest()
                .cloned()
                .ok_or_else(|| Error::NotFound("no commits yet: 'latest' does not exist".into())),
            CommitRef::Hash(hash) => Self::resolve_hash(hash, history),
        }
    }

    fn resolve_hash(hash: &str, history: &History) -> Result<CommitHash> {
        let not_found = || Error::NotFound(format!("commit {} not found", hash));

        if let Some(commit_hash) = CommitHash::try_parse(hash) {
            return history
                .contains(&commit_hash)
                .then_some(commit_hash)
                .ok_or_else(not_found);
        }

        let looks_like_prefix = hash.len() >= MIN_PREFIX_LENGTH
            && hash.bytes().all(|b| matches!(b, b'0'..=b'9' | b'a'..=b'f'));
        if !looks_like_prefix {
            return Err(not_found());
        }

        let mut candidates = history.hashes_with_prefix(hash);
        match (candidates.next(), candidates.next()) {
            (Some(commit_hash), None) => Ok(commit_hash.clone()),
            (Some(_), Some(_)) => Err(Error::NotFound(format!(
                "short commit hash {} is ambiguous",
                hash
            ))),
            (None, _) => Err(not_found()),
        }
    }
}
