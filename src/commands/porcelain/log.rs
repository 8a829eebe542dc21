use crate::areas::repository::Repository;
use crate::artifacts::log::log_entry::LogEntry;
use crate::errors::Result;
use colored::Colorize;
use std::io::Write;

impl Repository {
    /// Print the log newest first, marking the commit HEAD points at
    pub fn log(&self) -> Result<()> {
        let history = self.commit_log().load_all()?;
        let head = self.refs().read_head()?;

        for entry in history.entries().iter().rev() {
            let is_head = head.as_ref() == Some(&entry.commit_hash);
            self.display_entry(entry, is_head)?;
        }

        Ok(())
    }

    fn display_entry(&self, entry: &LogEntry, is_head: bool) -> Result<()> {
        let decoration = if is_head {
            format!(" {}", "(HEAD)".cyan().bold())
        } else {
            String::new()
        };

        writeln!(
            self.writer(),
            "{} | {}: {}{}",
            entry.commit_hash.as_str().yellow(),
            entry.author,
            entry.message,
            decoration
        )?;

        Ok(())
    }
}
