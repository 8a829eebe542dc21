//! tvc: a minimal local version control tool
//!
//! Tracked files are snapshotted into content-addressed commit directories.
//! Checking out an earlier commit restores only the files that changed
//! between HEAD and the target, reconstructed from the ordered commit log.
//!
//! - `areas`: On-disk stores (index, log, HEAD, commit store, workspace, config)
//! - `artifacts`: Data structures and algorithms (digests, log grammar, diffs)
//! - `commands`: User-facing commands as `Repository` methods

pub mod areas;
pub mod artifacts;
pub mod commands;
mod errors;

pub use errors::{Error, Result};
