//! Checkout operations
//!
//! Moving the working tree to another commit means restoring every file named
//! in the snapshot diff from the commit that holds its wanted content. Files
//! the diff does not mention are never touched, so uncommitted edits to them
//! survive a checkout. There is no conflict detection: restored files are
//! overwritten unconditionally.

pub mod migration;
