use crate::areas::config::Config;
use crate::areas::database::Database;
use crate::areas::index::Index;
use crate::areas::log::Log;
use crate::areas::refs::Refs;
use crate::areas::workspace::Workspace;
use crate::errors::{Error, Result};
use std::cell::{RefCell, RefMut};
use std::path::Path;
use std::sync::Arc;
use tokio::sync::Mutex;

/// Name of the directory holding all repository state
pub const REPOSITORY_DIR: &str = ".tvc";

pub struct Repository {
    path: Box<Path>,
    writer: RefCell<Box<dyn std::io::Write>>,
    index: Arc<Mutex<Index>>,
    database: Database,
    workspace: Workspace,
    refs: Refs,
    log: Log,
    config: Config,
}

impl Repository {
    /// Open the repository rooted at `path`
    ///
    /// Nothing is written until a command needs it; the state directory is
    /// created on first use.
    pub fn new(path: &Path, writer: Box<dyn std::io::Write>) -> Result<Self> {
        if !path.exists() {
            std::fs::create_dir_all(path).map_err(Error::at(path))?;
        }
        let path = path.canonicalize().map_err(Error::at(path))?;
        let repository_path = path.join(REPOSITORY_DIR);

        Ok(Repository {
            index: Arc::new(Mutex::new(Index::new(
                repository_path.join("index").into_boxed_path(),
            ))),
            database: Database::new(repository_path.join("commits").into_boxed_path()),
            workspace: Workspace::new(path.clone().into_boxed_path()),
            refs: Refs::new(repository_path.clone().into_boxed_path()),
            log: Log::new(repository_path.join("log").into_boxed_path()),
            config: Config::new(repository_path.join("config").into_boxed_path()),
            writer: RefCell::new(writer),
            path: path.into_boxed_path(),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn repository_path(&self) -> Box<Path> {
        self.path.join(REPOSITORY_DIR).into_boxed_path()
    }

    pub fn writer(&'_ self) -> RefMut<'_, Box<dyn std::io::Write>> {
        self.writer.borrow_mut()
    }

    pub fn index(&self) -> Arc<Mutex<Index>> {
        self.index.clone()
    }

    pub fn database(&self) -> &Database {
        &self.database
    }

    pub fn workspace(&self) -> &Workspace {
        &self.workspace
    }

    pub fn refs(&self) -> &Refs {
        &self.refs
    }

    pub fn commit_log(&self) -> &Log {
        &self.log
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Create the state directory and commit store if they are missing
    pub(crate) fn ensure_layout(&self) -> Result<()> {
        let commits_path = self.database.commits_path();
        std::fs::create_dir_all(commits_path).map_err(Error::at(commits_path))
    }
}
