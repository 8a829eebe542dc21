//! Content addressing
//!
//! - `digest`: Validated SHA-256 identifiers for commits and file contents
//! - `hasher`: Fingerprinting of files and commits

pub mod digest;
pub mod hasher;
