//! Error kinds surfaced by repository operations
//!
//! Every failure a command can hit maps onto one variant here, so the binary
//! can print a message (and a hint where one exists) and exit with code 1.

use crate::artifacts::objects::digest::CommitHash;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// A required argument is missing or malformed
    #[error("{0}")]
    Usage(String),

    /// A file or commit reference could not be resolved
    #[error("{0}")]
    NotFound(String),

    #[error("no author name configured")]
    Unconfigured,

    #[error("nothing to commit, working tree clean")]
    NothingToCommit,

    #[error("HEAD is detached: new commits can only be made on top of the latest commit {latest}")]
    DetachedHead { latest: CommitHash },

    #[error("log is corrupt: {0}")]
    CorruptLog(String),

    #[error("index is corrupt: {0}")]
    CorruptIndex(String),

    #[error("head is corrupt: {0}")]
    CorruptHead(String),

    #[error("failed to access {}", .path.display())]
    File {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Walk(#[from] walkdir::Error),
}

impl Error {
    /// Follow-up advice printed after the error message
    pub fn hint(&self) -> Option<&'static str> {
        match self {
            Error::Unconfigured => Some("run `tvc config name <your name>` to set the author"),
            Error::DetachedHead { .. } => Some("run `tvc checkout latest` before committing"),
            _ => None,
        }
    }

    /// Wrap an I/O error with the path it happened on
    pub(crate) fn at(path: &Path) -> impl FnOnce(std::io::Error) -> Error + '_ {
        move |source| Error::File {
            path: path.to_path_buf(),
            source,
        }
    }
}
