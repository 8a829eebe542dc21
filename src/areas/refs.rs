//! HEAD reference
//!
//! HEAD names the commit currently reflected in the working tree. It is a
//! single line holding a full commit hash, stored in its own file and written
//! in one step. It does not exist until the first commit is made.

use crate::artifacts::core::write_atomically;
use crate::artifacts::objects::digest::CommitHash;
use crate::errors::{Error, Result};
use derive_new::new;
use std::path::Path;

/// Name of the HEAD file inside the repository directory
pub const HEAD_REF_NAME: &str = "head";

#[derive(Debug, new)]
pub struct Refs {
    /// Path to the repository directory (typically `.tvc`)
    path: Box<Path>,
}

impl Refs {
    pub fn head_path(&self) -> Box<Path> {
        self.path.join(HEAD_REF_NAME).into_boxed_path()
    }

    /// Read the commit HEAD points at
    ///
    /// # Returns
    ///
    /// None if no commit has been made yet
    pub fn read_head(&self) -> Result<Option<CommitHash>> {
        let head_path = self.head_path();
        if !head_path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(&head_path).map_err(Error::at(&head_path))?;
        let content = content.trim();

        if content.is_empty() {
            return Ok(None);
        }

        CommitHash::try_parse(content)
            .map(Some)
            .ok_or_else(|| Error::CorruptHead(format!("{:?} is not a commit hash", content)))
    }

    /// Point HEAD at `commit_hash`
    pub fn update_head(&self, commit_hash: &CommitHash) -> Result<()> {
        let head_path = self.head_path();

        write_atomically(&head_path, format!("{}\n", commit_hash).as_bytes())
            .map_err(Error::at(&head_path))
    }
}
