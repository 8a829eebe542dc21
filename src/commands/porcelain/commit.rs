use crate::areas::repository::Repository;
use crate::artifacts::log::log_entry::LogEntry;
use crate::artifacts::objects::hasher;
use crate::errors::{Error, Result};
use std::io::Write;

impl Repository {
    pub async fn commit(&mut self, message: &str) -> Result<()> {
        let message = message.trim();
        if message.is_empty() {
            return Err(Error::Usage("a commit message is required".to_string()));
        }
        if message.contains(['\n', '\r']) {
            return Err(Error::Usage(
                "the commit message must be a single line".to_string(),
            ));
        }

        let author = self.config().author()?.ok_or(Error::Unconfigured)?;

        let index = self.index();
        let mut index = index.lock().await;

        // Load the index file from the disk
        index.rehydrate()?;

        let staged = index.staged_files(self.workspace())?;
        if staged.is_empty() {
            return Err(Error::NothingToCommit);
        }

        // Commits only ever extend the newest commit
        let history = self.commit_log().load_all()?;
        let head = self.refs().read_head()?;
        if let Some(latest) = history.latest()
            && head.as_ref() != Some(latest)
        {
            return Err(Error::DetachedHead {
                latest: latest.clone(),
            });
        }

        let commit_hash = hasher::commit_fingerprint(
            self.workspace().path(),
            staged.iter().map(String::as_str),
            message,
        )?;
        if history.contains(&commit_hash) {
            tracing::warn!(
                commit = %commit_hash,
                "commit hash already exists in the log, overwriting its snapshot"
            );
        }

        self.ensure_layout()?;

        // The snapshot holds every tracked file, not only the staged ones
        let tracked = index.tracked_files().map(str::to_string).collect::<Vec<_>>();
        for name in tracked {
            let data = self.workspace().read_file(&name)?;
            let fingerprint = self.database().store_file(&commit_hash, &name, &data)?;
            index.update_version(&name, fingerprint);
        }

        index.write_updates()?;
        self.commit_log().append(&LogEntry::new(
            commit_hash.clone(),
            author,
            message.to_string(),
        ))?;
        self.refs().update_head(&commit_hash)?;

        tracing::info!(commit = %commit_hash, staged = staged.len(), "created commit");

        let is_root = if history.is_empty() {
            "(root-commit) "
        } else {
            ""
        };
        writeln!(
            self.writer(),
            "[{}{}] {}",
            is_root,
            commit_hash.to_short(),
            message
        )?;

        Ok(())
    }
}
