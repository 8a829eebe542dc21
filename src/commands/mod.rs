//! Command implementations
//!
//! - `porcelain`: User-facing commands (add, commit, log, checkout, ...)

pub mod porcelain;
