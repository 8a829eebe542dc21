use crate::areas::repository::Repository;
use crate::artifacts::checkout::migration::Migration;
use crate::artifacts::log::commit_ref::CommitRef;
use crate::artifacts::objects::digest::CommitHash;
use crate::errors::{Error, Result};
use std::io::Write;

impl Repository {
    pub async fn checkout(&mut self, target: &str) -> Result<()> {
        let target = target.trim();
        if target.is_empty() {
            return Err(Error::Usage(
                "checkout needs a commit hash or 'latest'".to_string(),
            ));
        }

        let history = self.commit_log().load_all()?;
        let target_hash = CommitRef::parse(target).resolve(&history)?;
        let current_hash = self
            .refs()
            .read_head()?
            .ok_or_else(|| Error::NotFound("HEAD does not point at a commit".to_string()))?;

        let change_set = self
            .database()
            .snapshot_diff(&history, &current_hash, &target_hash)?
            .into_changes();

        let mut migration = Migration::new(self, change_set);
        let restored = migration.apply_changes()?;

        self.refs().update_head(&target_hash)?;

        tracing::info!(
            from = %current_hash,
            to = %target_hash,
            restored,
            "checked out commit"
        );

        if restored > 0 {
            writeln!(
                self.writer(),
                "Updated {} path{} from {}",
                restored,
                if restored == 1 { "" } else { "s" },
                target_hash.to_short()
            )?;
        }
        let message = history
            .entry(&target_hash)
            .map(|entry| entry.message.as_str())
            .unwrap_or_default();
        self.print_head_position(message, &target_hash)?;

        Ok(())
    }

    fn print_head_position(&self, message: &str, commit_hash: &CommitHash) -> Result<()> {
        writeln!(
            self.writer(),
            "HEAD is now at {} {}",
            commit_hash.to_short(),
            message
        )?;

        Ok(())
    }
}
