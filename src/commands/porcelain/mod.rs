//! Porcelain commands
//!
//! Each command is an `impl Repository` block that loads what it needs from
//! disk, performs one operation and writes its report to the repository
//! writer.
//!
//! ## Commands
//!
//! - `init`: Create the repository directory
//! - `add`: Start tracking files
//! - `commit`: Snapshot every tracked file
//! - `log`: Show commit history
//! - `checkout`: Restore the working tree to another commit
//! - `status`: Show staged and tracked files
//! - `config`: Read or write configuration values

pub mod add;
pub mod checkout;
pub mod commit;
pub mod config;
pub mod init;
pub mod log;
pub mod status;
