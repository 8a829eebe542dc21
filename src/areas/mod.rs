//! Core repository components
//!
//! This module contains the building blocks of a repository:
//!
//! - `config`: Key-value settings, notably the author name
//! - `database`: Commit store holding one full snapshot per commit
//! - `index`: Tracked files and their last committed fingerprints
//! - `log`: Append-only commit history
//! - `refs`: The HEAD pointer
//! - `repository`: High-level repository operations and coordination
//! - `workspace`: Working directory file system operations

pub mod config;
pub mod database;
pub mod index;
pub mod log;
pub mod refs;
pub mod repository;
pub mod workspace;
