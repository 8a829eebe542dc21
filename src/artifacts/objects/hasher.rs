//! Content fingerprints for files and commits
//!
//! A commit hash covers the commit message followed by every staged path and
//! its bytes, fed in lexicographic path order into a single SHA-256 stream.
//! Sorting makes the hash independent of the order files were staged in.

use crate::artifacts::objects::digest::{CommitHash, Fingerprint};
use crate::errors::{Error, Result};
use sha2::{Digest, Sha256};
use std::collections::BTreeSet;
use std::path::Path;

/// Fingerprint the full contents of the file at `path`
pub fn file_fingerprint(path: &Path) -> Result<Fingerprint> {
    let mut file = std::fs::File::open(path).map_err(Error::at(path))?;
    let mut hasher = Sha256::new();
    std::io::copy(&mut file, &mut hasher).map_err(Error::at(path))?;

    Ok(Fingerprint::from_digest(&hasher.finalize()))
}

/// Fingerprint an in-memory buffer
pub fn bytes_fingerprint(data: &[u8]) -> Fingerprint {
    Fingerprint::from_digest(&Sha256::digest(data))
}

/// Compute the hash of a commit over its staged files
///
/// # Arguments
///
/// * `root` - Working tree root the staged paths are relative to
/// * `staged` - Staged paths, in any order
/// * `message` - Commit message
pub fn commit_fingerprint<'a>(
    root: &Path,
    staged: impl IntoIterator<Item = &'a str>,
    message: &str,
) -> Result<CommitHash> {
    let staged = staged.into_iter().collect::<BTreeSet<_>>();

    let mut hasher = Sha256::new();
    hasher.update(message.as_bytes());

    for name in staged {
        let path = root.join(name);
        let data = std::fs::read(&path).map_err(Error::at(&path))?;

        hasher.update(name.as_bytes());
        hasher.update(&data);
    }

    Ok(CommitHash::from_digest(&hasher.finalize()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_fs::TempDir;
    use assert_fs::prelude::{FileWriteStr, PathChild};
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;
    use rstest::{fixture, rstest};

    #[fixture]
    fn workspace() -> TempDir {
        let dir = TempDir::new().unwrap();
        dir.child("a.txt").write_str("alpha").unwrap();
        dir.child("b.txt").write_str("beta").unwrap();
        dir.child("nested/c.txt").write_str("gamma").unwrap();
        dir
    }

    #[rstest]
    fn test_file_fingerprint_matches_known_sha256(workspace: TempDir) {
        let fingerprint = file_fingerprint(&workspace.path().join("a.txt")).unwrap();

        // sha256("alpha")
        assert_eq!(
            fingerprint.as_str(),
            "8ed3f6ad685b959ead7022518e1af76cd816f8e8ec7ccdda1ed4018e8f2223f8"
        );
        assert_eq!(fingerprint, bytes_fingerprint(b"alpha"));
    }

    #[rstest]
    fn test_file_fingerprint_of_missing_file_fails(workspace: TempDir) {
        let result = file_fingerprint(&workspace.path().join("missing.txt"));

        assert!(matches!(result, Err(Error::File { .. })));
    }

    #[rstest]
    fn test_commit_fingerprint_depends_on_message(workspace: TempDir) {
        let first = commit_fingerprint(workspace.path(), ["a.txt"], "first").unwrap();
        let second = commit_fingerprint(workspace.path(), ["a.txt"], "second").unwrap();

        assert_ne!(first, second);
    }

    #[rstest]
    fn test_commit_fingerprint_depends_on_content(workspace: TempDir) {
        let before = commit_fingerprint(workspace.path(), ["a.txt"], "msg").unwrap();
        workspace.child("a.txt").write_str("changed").unwrap();
        let after = commit_fingerprint(workspace.path(), ["a.txt"], "msg").unwrap();

        assert_ne!(before, after);
    }

    proptest! {
        #[test]
        fn test_commit_fingerprint_ignores_staging_order(
            order in Just(vec!["a.txt", "b.txt", "nested/c.txt"]).prop_shuffle(),
            message in "[a-zA-Z ]{1,20}"
        ) {
            let dir = workspace();
            let sorted = commit_fingerprint(dir.path(), ["a.txt", "b.txt", "nested/c.txt"], &message).unwrap();
            let shuffled = commit_fingerprint(dir.path(), order, &message).unwrap();

            prop_assert_eq!(sorted, shuffled);
        }
    }
}
