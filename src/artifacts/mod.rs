//! Version control data structures and algorithms
//!
//! - `checkout`: Planning and applying checkout migrations
//! - `core`: Shared utilities (pager wrapper, atomic writes)
//! - `diff`: Snapshot diffs between commits
//! - `index`: Index file entries
//! - `log`: Log grammar, ordered history and commit references
//! - `objects`: Content digests and fingerprinting

pub mod checkout;
pub mod core;
pub mod diff;
pub mod index;
pub mod log;
pub mod objects;
