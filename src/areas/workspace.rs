use crate::areas::database::to_index_name;
use crate::areas::repository::REPOSITORY_DIR;
use crate::artifacts::checkout::migration::Migration;
use crate::errors::{Error, Result};
use std::path::{Component, Path, PathBuf};
use walkdir::WalkDir;

#[derive(Debug)]
pub struct Workspace {
    path: Box<Path>,
}

impl Workspace {
    pub fn new(path: Box<Path>) -> Self {
        Workspace { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Expand a user supplied path into the files it names
    ///
    /// Directories are walked recursively. Returned names are relative to the
    /// workspace root and `/`-separated; anything inside the repository
    /// directory is skipped. Symbolic links are never followed nor tracked,
    /// whether named directly or met during a walk.
    pub fn list_files(&self, root_file_path: &Path) -> Result<Vec<String>> {
        let relative_path = self.relative_path(root_file_path)?;
        let absolute_path = self.path.join(&relative_path);

        let metadata = std::fs::symlink_metadata(&absolute_path).map_err(|_| {
            Error::NotFound(format!(
                "pathspec '{}' did not match any files",
                root_file_path.display()
            ))
        })?;

        if Self::is_ignored(&relative_path) {
            return Ok(Vec::new());
        }

        if metadata.file_type().is_symlink() {
            tracing::warn!(path = %relative_path.display(), "skipping symbolic link");
            return Ok(Vec::new());
        }

        if metadata.is_file() {
            return Ok(vec![Self::trackable_name(&relative_path)?]);
        }

        let mut files = Vec::new();
        let walker = WalkDir::new(&absolute_path)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|entry| {
                entry
                    .path()
                    .strip_prefix(&self.path)
                    .map(|path| !Self::is_ignored(path))
                    .unwrap_or(false)
            });

        for entry in walker {
            let entry = entry?;
            let Ok(path) = entry.path().strip_prefix(&self.path) else {
                continue;
            };

            if entry.path_is_symlink() {
                tracing::warn!(path = %path.display(), "skipping symbolic link");
            } else if entry.file_type().is_file() {
                files.push(Self::trackable_name(path)?);
            }
        }

        Ok(files)
    }

    /// Resolve a user supplied path to one relative to the workspace root
    ///
    /// Resolution is lexical so a symbolic link is judged by where it sits,
    /// not by what it points at.
    fn relative_path(&self, root_file_path: &Path) -> Result<PathBuf> {
        let outside = || {
            Error::NotFound(format!(
                "pathspec '{}' is outside the repository",
                root_file_path.display()
            ))
        };

        let absolute_path = self.path.join(root_file_path);
        let stripped = absolute_path.strip_prefix(&self.path).map_err(|_| outside())?;

        let mut relative_path = PathBuf::new();
        for component in stripped.components() {
            match component {
                Component::CurDir => {}
                Component::ParentDir => {
                    if !relative_path.pop() {
                        return Err(outside());
                    }
                }
                Component::Normal(name) => relative_path.push(name),
                Component::RootDir | Component::Prefix(_) => return Err(outside()),
            }
        }

        Ok(relative_path)
    }

    /// Index name for `path`, refusing names the line-based index cannot hold
    fn trackable_name(path: &Path) -> Result<String> {
        let name = to_index_name(path);
        if name.contains(['\n', '\r']) {
            return Err(Error::Usage(format!(
                "cannot track {:?}: file names with line breaks are not supported",
                name
            )));
        }

        Ok(name)
    }

    fn is_ignored(path: &Path) -> bool {
        path.components().any(|component| {
            if let Component::Normal(name) = component {
                name == REPOSITORY_DIR
            } else {
                false
            }
        })
    }

    pub fn read_file(&self, name: &str) -> Result<Vec<u8>> {
        let file_path = self.path.join(name);

        std::fs::read(&file_path).map_err(Error::at(&file_path))
    }

    // Directories are created parent first before any file is restored.
    pub fn apply_migration(&self, migration: &Migration) -> Result<()> {
        migration
            .mkdirs()
            .iter()
            .map(|dir_path| self.make_directory(dir_path))
            .collect::<Result<Vec<()>>>()?;

        for restore in migration.restores() {
            let path = self.path.join(&restore.path);

            if path.is_dir() {
                std::fs::remove_dir_all(&path).map_err(Error::at(&path))?;
            }

            std::fs::copy(&restore.source, &path).map_err(Error::at(&restore.source))?;
            tracing::debug!(path = %restore.path.display(), "restored file");
        }

        Ok(())
    }

    fn make_directory(&self, dir_path: &Path) -> Result<()> {
        let dir_path = self.path.join(dir_path);

        if dir_path.is_file() {
            std::fs::remove_file(&dir_path).map_err(Error::at(&dir_path))?;
        }

        if !dir_path.exists() {
            std::fs::create_dir(&dir_path).map_err(Error::at(&dir_path))?;
        }

        Ok(())
    }
}
