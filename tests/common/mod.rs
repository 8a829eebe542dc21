#![allow(dead_code)]

pub mod command;
pub mod file;

use std::path::Path;

/// Name of the repository state directory
pub const REPOSITORY_DIR: &str = ".tvc";

/// Read a file from the repository state directory
pub fn read_state_file(dir: &Path, name: &str) -> String {
    let path = dir.join(REPOSITORY_DIR).join(name);
    std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read {:?}: {}", path, e))
}

/// The commit HEAD currently points at
pub fn read_head(dir: &Path) -> String {
    read_state_file(dir, "head").trim().to_string()
}

/// Commit hashes recorded in the log, oldest first
pub fn read_log_hashes(dir: &Path) -> Vec<String> {
    read_state_file(dir, "log")
        .lines()
        .filter_map(|line| line.split(" | ").next())
        .map(str::to_string)
        .collect()
}

/// Content of `name` inside the snapshot of `commit_hash`
pub fn read_snapshot_file(dir: &Path, commit_hash: &str, name: &str) -> String {
    read_state_file(dir, &format!("commits/{}/{}", commit_hash, name))
}
