use crate::areas::repository::Repository;
use crate::errors::Result;
use std::path::Path;

impl Repository {
    pub async fn add(&mut self, paths: &[String]) -> Result<()> {
        let index = self.index();
        let mut index = index.lock().await;

        // Load the index file from the disk
        index.rehydrate()?;

        // Expand every path before touching the index so a bad path adds nothing
        let names = paths
            .iter()
            .map(|path| self.workspace().list_files(Path::new(path)))
            .collect::<Result<Vec<_>>>()?
            .into_iter()
            .flatten();

        for name in names {
            if index.add(&name) {
                tracing::debug!(path = %name, "tracking file");
            }
        }

        if index.is_changed() {
            self.ensure_layout()?;
            index.write_updates()?;
        }

        Ok(())
    }
}
