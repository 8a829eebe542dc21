//! Index entry structure
//!
//! Each line of the index file holds one tracked path and the fingerprint of
//! its last committed content:
//!
//! ```text
//! <path>:<fingerprint>
//! ```
//!
//! A freshly added file that was never committed has an empty fingerprint.

use crate::artifacts::objects::digest::Fingerprint;
use derive_new::new;

/// Separator between the path and the fingerprint
const FIELD_SEPARATOR: char = ':';

#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct IndexEntry {
    /// Working tree relative path, `/`-separated
    pub name: String,
    /// Fingerprint recorded at the last commit, `None` if never committed
    pub version: Option<Fingerprint>,
}

impl IndexEntry {
    /// Parse a single index line
    ///
    /// The line is split on its last `:` so paths may themselves contain colons.
    pub fn parse(line: &str) -> Option<Self> {
        let (name, version) = line.rsplit_once(FIELD_SEPARATOR)?;
        if name.is_empty() {
            return None;
        }

        let version = match version {
            "" => None,
            version => Some(Fingerprint::try_parse(version)?),
        };

        Some(IndexEntry::new(name.to_string(), version))
    }

    pub fn serialize(&self) -> String {
        format!(
            "{}{}{}",
            self.name,
            FIELD_SEPARATOR,
            self.version.as_ref().map(Fingerprint::as_str).unwrap_or_default()
        )
    }

    /// Whether content with `fingerprint` differs from the committed version
    pub fn is_stale(&self, fingerprint: &Fingerprint) -> bool {
        self.version.as_ref() != Some(fingerprint)
    }
}
