//! Diffs between commits
//!
//! - `snapshot_diff`: Which files must be restored, and from which commit's
//!   snapshot, to move the working tree from one commit to another

pub mod snapshot_diff;
