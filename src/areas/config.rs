//! Repository configuration
//!
//! A plain `<key>: <value>` file. The only key the core reads is `name`, the
//! author recorded in the log; the `TVC_AUTHOR_NAME` environment variable
//! takes precedence over it.

use crate::artifacts::core::write_atomically;
use crate::errors::{Error, Result};
use derive_new::new;
use std::collections::BTreeMap;
use std::path::Path;

/// Key holding the author name
pub const AUTHOR_KEY: &str = "name";

/// Environment override for the author name
pub const AUTHOR_ENV: &str = "TVC_AUTHOR_NAME";

const KEY_SEPARATOR: &str = ": ";

#[derive(Debug, new)]
pub struct Config {
    /// Path to the config file (typically `.tvc/config`)
    path: Box<Path>,
}

impl Config {
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// All configured values; a missing file yields an empty map
    pub fn load(&self) -> Result<BTreeMap<String, String>> {
        if !self.path.exists() {
            return Ok(BTreeMap::new());
        }

        let content = std::fs::read_to_string(&self.path).map_err(Error::at(&self.path))?;

        Ok(content
            .lines()
            .filter_map(|line| line.split_once(KEY_SEPARATOR))
            .map(|(key, value)| (key.trim().to_string(), value.trim().to_string()))
            .collect())
    }

    pub fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.load()?.remove(key))
    }

    /// Set `key` to `value`, rewriting the whole file
    pub fn set(&self, key: &str, value: &str) -> Result<()> {
        Self::validate(key, value)?;

        let mut values = self.load()?;
        values.insert(key.to_string(), value.trim().to_string());

        let content = values
            .iter()
            .map(|(key, value)| format!("{}{}{}\n", key, KEY_SEPARATOR, value))
            .collect::<String>();

        write_atomically(&self.path, content.as_bytes()).map_err(Error::at(&self.path))
    }

    /// The configured author, if any
    ///
    /// Names read from the environment or a hand-edited file are held to the
    /// same rules as `config name`, since the author is embedded in log lines.
    pub fn author(&self) -> Result<Option<String>> {
        if let Ok(name) = std::env::var(AUTHOR_ENV)
            && !name.trim().is_empty()
        {
            let name = name.trim();
            Self::validate_author(name)
                .map_err(|e| Error::Usage(format!("{} (from {})", e, AUTHOR_ENV)))?;
            return Ok(Some(name.to_string()));
        }

        match self.get(AUTHOR_KEY)?.filter(|name| !name.is_empty()) {
            Some(name) => {
                Self::validate_author(&name)
                    .map_err(|e| Error::Usage(format!("{} (from {})", e, self.path.display())))?;
                Ok(Some(name))
            }
            None => Ok(None),
        }
    }

    fn validate(key: &str, value: &str) -> Result<()> {
        if key.is_empty() || key.contains(|c: char| c == ':' || c.is_whitespace()) {
            return Err(Error::Usage(format!("invalid config key {:?}", key)));
        }

        if value.trim().is_empty() || value.contains(['\n', '\r']) {
            return Err(Error::Usage(format!(
                "config value for {} must be a single non-empty line",
                key
            )));
        }

        if key == AUTHOR_KEY {
            Self::validate_author(value)?;
        }

        Ok(())
    }

    fn validate_author(name: &str) -> Result<()> {
        if name.contains(['\n', '\r']) {
            return Err(Error::Usage("author name must be a single line".to_string()));
        }

        if name.contains(':') {
            return Err(Error::Usage("author name cannot contain ':'".to_string()));
        }

        Ok(())
    }
}
