//! Commit log
//!
//! - `log_entry`: Line grammar of the log file
//! - `history`: The parsed, ordered sequence of commits
//! - `commit_ref`: Resolution of user supplied references against the history

pub mod commit_ref;
pub mod history;
pub mod log_entry;
