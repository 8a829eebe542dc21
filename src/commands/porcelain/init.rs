use crate::areas::repository::Repository;
use crate::errors::Result;
use std::io::Write;

impl Repository {
    pub async fn init(&mut self) -> Result<()> {
        self.ensure_layout()?;

        writeln!(
            self.writer(),
            "Initialized empty tvc repository in {}",
            self.repository_path().display()
        )?;

        Ok(())
    }
}
