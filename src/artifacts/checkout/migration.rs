//! Checkout migration
//!
//! Plans and applies the file system changes for a checkout:
//!
//! 1. Collect the parent directories every restored file needs
//! 2. Resolve the snapshot copy each file is restored from
//! 3. Hand the plan to the workspace, which creates directories first and
//!    then overwrites files

use crate::areas::repository::Repository;
use crate::artifacts::diff::snapshot_diff::ChangeSet;
use crate::errors::Result;
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

/// A single planned restore: working tree path and the snapshot copy to read
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Restore {
    pub path: PathBuf,
    pub source: PathBuf,
}

pub struct Migration<'r> {
    repository: &'r Repository,
    change_set: ChangeSet,
    /// Planned restores, in path order
    restores: Vec<Restore>,
    /// Directories to create before restoring files
    mkdirs: BTreeSet<PathBuf>,
}

impl<'r> Migration<'r> {
    pub fn new(repository: &'r Repository, change_set: ChangeSet) -> Self {
        Self {
            repository,
            change_set,
            restores: Vec::new(),
            mkdirs: BTreeSet::new(),
        }
    }

    pub fn restores(&self) -> &[Restore] {
        &self.restores
    }

    pub fn mkdirs(&self) -> &BTreeSet<PathBuf> {
        &self.mkdirs
    }

    /// Plan and apply the checkout, returning the number of restored files
    pub fn apply_changes(&mut self) -> Result<usize> {
        self.plan_changes();
        self.repository.workspace().apply_migration(self)?;

        Ok(self.restores.len())
    }

    fn plan_changes(&mut self) {
        let database = self.repository.database();

        for (name, commit_hash) in &self.change_set {
            let path = PathBuf::from(name);

            self.mkdirs.extend(
                path.ancestors()
                    .skip(1)
                    .filter(|parent| *parent != Path::new(""))
                    .map(Path::to_path_buf),
            );

            self.restores.push(Restore {
                source: database.snapshot_path(commit_hash, name),
                path,
            });
        }
    }
}
