use crate::areas::repository::Repository;
use crate::errors::Result;
use colored::Colorize;
use std::io::Write;

impl Repository {
    pub async fn status(&mut self) -> Result<()> {
        let index = self.index();
        let mut index = index.lock().await;

        // Load the index file from the disk
        index.rehydrate()?;

        let history = self.commit_log().load_all()?;
        match self.refs().read_head()? {
            Some(head) => {
                writeln!(self.writer(), "On commit {}", head.to_short())?;
                if let Some(latest) = history.latest()
                    && latest != &head
                {
                    writeln!(
                        self.writer(),
                        "HEAD is detached behind latest commit {}",
                        latest.to_short()
                    )?;
                }
            }
            None => writeln!(self.writer(), "No commits yet")?,
        }

        let staged = index.staged_files(self.workspace())?;
        for name in &staged {
            writeln!(self.writer(), "{} {}", "staged:".green(), name)?;
        }
        for name in index.tracked_files().filter(|name| !staged.contains(*name)) {
            writeln!(self.writer(), "tracked: {}", name)?;
        }

        Ok(())
    }
}
