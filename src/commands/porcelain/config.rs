use crate::areas::repository::Repository;
use crate::errors::{Error, Result};
use std::io::Write;

impl Repository {
    /// Print the value of `key`, or set it when `value` is given
    pub async fn configure(&mut self, key: &str, value: Option<&str>) -> Result<()> {
        match value {
            Some(value) => {
                self.ensure_layout()?;
                self.config().set(key, value)
            }
            None => {
                let value = self
                    .config()
                    .get(key)?
                    .ok_or_else(|| Error::NotFound(format!("config key {} is not set", key)))?;
                writeln!(self.writer(), "{}", value)?;

                Ok(())
            }
        }
    }
}
