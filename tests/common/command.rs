use crate::common::file::{FileSpec, write_file};
use crate::common::read_head;
use assert_cmd::Command;
use assert_fs::TempDir;
use rstest::fixture;
use std::path::Path;

pub const AUTHOR_NAME: &str = "fake_user";

#[fixture]
pub fn repository_dir() -> TempDir {
    TempDir::new().expect("Failed to create temp dir")
}

/// A repository with one commit tracking three files
#[fixture]
pub fn init_repository_dir(repository_dir: TempDir) -> TempDir {
    run_tvc_command(repository_dir.path(), &["init"])
        .assert()
        .success();

    write_file(FileSpec::new(
        repository_dir.path().join("1.txt"),
        "one".to_string(),
    ));
    write_file(FileSpec::new(
        repository_dir.path().join("a").join("2.txt"),
        "two".to_string(),
    ));
    write_file(FileSpec::new(
        repository_dir.path().join("a").join("b").join("3.txt"),
        "three".to_string(),
    ));

    run_tvc_command(repository_dir.path(), &["add", "."])
        .assert()
        .success();

    tvc_commit(repository_dir.path(), "Initial commit")
        .assert()
        .success();

    repository_dir
}

/// A repository with three commits, each changing `file.txt`
#[fixture]
pub fn repository_with_multiple_commits(repository_dir: TempDir) -> TempDir {
    for (n, content) in ["content 1", "content 2", "content 3"].iter().enumerate() {
        write_file(FileSpec::new(
            repository_dir.path().join("file.txt"),
            content.to_string(),
        ));
        run_tvc_command(repository_dir.path(), &["add", "file.txt"])
            .assert()
            .success();
        tvc_commit(repository_dir.path(), &format!("Commit {}", n + 1))
            .assert()
            .success();
    }

    repository_dir
}

pub fn run_tvc_command(dir: &Path, args: &[&str]) -> Command {
    let mut cmd = Command::cargo_bin("tvc").expect("Failed to find tvc binary");
    cmd.env("NO_PAGER", "1");
    cmd.env_remove("TVC_AUTHOR_NAME");
    cmd.env_remove("TVC_LOG");
    cmd.current_dir(dir);
    for arg in args {
        cmd.arg(arg);
    }
    cmd
}

pub fn tvc_commit(dir: &Path, message: &str) -> Command {
    let mut cmd = run_tvc_command(dir, &["commit", message]);
    cmd.env("TVC_AUTHOR_NAME", AUTHOR_NAME);
    cmd
}

pub fn tvc_checkout(dir: &Path, target: &str) -> Command {
    run_tvc_command(dir, &["checkout", target])
}

/// Commit and return the new HEAD
pub fn commit_and_read_head(dir: &Path, message: &str) -> String {
    tvc_commit(dir, message).assert().success();
    read_head(dir)
}
