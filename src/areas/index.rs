//! Index of tracked files
//!
//! The index records every tracked working tree path together with the
//! fingerprint of its content at the last commit. A path is *staged* when its
//! current content no longer matches that fingerprint; a path added but never
//! committed has no fingerprint and is therefore always staged.
//!
//! ## Index File Format
//!
//! One `<path>:<fingerprint>` line per tracked file, sorted by path. The file
//! is rewritten as a whole on every save.

use crate::areas::workspace::Workspace;
use crate::artifacts::core::write_atomically;
use crate::artifacts::index::index_entry::IndexEntry;
use crate::artifacts::objects::digest::Fingerprint;
use crate::artifacts::objects::hasher;
use crate::errors::{Error, Result};
use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;

#[derive(Debug, Clone)]
pub struct Index {
    /// Path to the index file (typically `.tvc/index`)
    path: Box<Path>,
    /// Tracked files mapped by path
    entries: BTreeMap<String, IndexEntry>,
    /// Flag indicating if the index has been modified since loading
    changed: bool,
}

impl Index {
    pub fn new(path: Box<Path>) -> Self {
        Index {
            path,
            entries: BTreeMap::new(),
            changed: false,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn is_changed(&self) -> bool {
        self.changed
    }

    /// Load the index from disk
    ///
    /// A missing index file leaves the index empty.
    pub fn rehydrate(&mut self) -> Result<()> {
        self.entries.clear();
        self.changed = false;

        if !self.path.exists() {
            return Ok(());
        }

        let content = std::fs::read_to_string(&self.path).map_err(Error::at(&self.path))?;

        for (number, line) in content.lines().enumerate() {
            if line.is_empty() {
                continue;
            }

            let entry = IndexEntry::parse(line).ok_or_else(|| {
                Error::CorruptIndex(format!("line {} is malformed: {:?}", number + 1, line))
            })?;
            self.entries.insert(entry.name.clone(), entry);
        }

        Ok(())
    }

    /// Start tracking `name`
    ///
    /// Already tracked paths keep their fingerprint, so re-adding an unchanged
    /// committed file does not stage it. Returns whether the path was new.
    pub fn add(&mut self, name: &str) -> bool {
        if self.entries.contains_key(name) {
            return false;
        }

        self.entries
            .insert(name.to_string(), IndexEntry::new(name.to_string(), None));
        self.changed = true;

        true
    }

    pub fn entries(&self) -> impl Iterator<Item = &IndexEntry> {
        self.entries.values()
    }

    /// All tracked paths, sorted
    pub fn tracked_files(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Tracked paths whose working tree content differs from the last commit
    pub fn staged_files(&self, workspace: &Workspace) -> Result<BTreeSet<String>> {
        let mut staged = BTreeSet::new();

        for entry in self.entries() {
            let fingerprint = hasher::file_fingerprint(&workspace.path().join(&entry.name))?;

            if entry.is_stale(&fingerprint) {
                staged.insert(entry.name.clone());
            }
        }

        Ok(staged)
    }

    /// Record the committed fingerprint of a tracked path
    ///
    /// Untracked paths are ignored.
    pub fn update_version(&mut self, name: &str, fingerprint: Fingerprint) {
        if let Some(entry) = self.entries.get_mut(name) {
            entry.version = Some(fingerprint);
            self.changed = true;
        }
    }

    /// Persist the full index, replacing the previous file
    pub fn write_updates(&mut self) -> Result<()> {
        let content = self
            .entries()
            .map(|entry| entry.serialize() + "\n")
            .collect::<String>();

        write_atomically(&self.path, content.as_bytes()).map_err(Error::at(&self.path))?;
        self.changed = false;

        Ok(())
    }
}
