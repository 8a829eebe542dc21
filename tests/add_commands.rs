use assert_fs::TempDir;
use common::command::{init_repository_dir, repository_dir, run_tvc_command, tvc_commit};
use common::file::{FileSpec, write_file, write_generated_files};
use common::read_state_file;
use pretty_assertions::assert_eq;
use predicates::prelude::*;
use rstest::rstest;

mod common;

#[rstest]
fn add_single_file_tracks_it_as_never_committed(repository_dir: TempDir) {
    write_file(FileSpec::new(
        repository_dir.path().join("foo"),
        "abc".to_string(),
    ));

    run_tvc_command(repository_dir.path(), &["add", "foo"])
        .assert()
        .success();

    assert_eq!(read_state_file(repository_dir.path(), "index"), "foo:\n");
}

#[rstest]
fn add_multiple_files_keeps_index_sorted(repository_dir: TempDir) {
    let files = write_generated_files(repository_dir.path(), 4);
    let mut names = files
        .iter()
        .map(|file| file.path.file_name().unwrap().to_string_lossy().to_string())
        .collect::<Vec<_>>();

    let mut args = vec!["add"];
    args.extend(names.iter().rev().map(String::as_str));
    run_tvc_command(repository_dir.path(), &args)
        .assert()
        .success();

    names.sort();
    let expected = names
        .iter()
        .map(|name| format!("{}:\n", name))
        .collect::<String>();
    assert_eq!(read_state_file(repository_dir.path(), "index"), expected);
}

#[rstest]
fn add_directory_tracks_nested_files(repository_dir: TempDir) {
    write_file(FileSpec::new(
        repository_dir.path().join("a").join("2.txt"),
        "two".to_string(),
    ));
    write_file(FileSpec::new(
        repository_dir.path().join("a").join("b").join("3.txt"),
        "three".to_string(),
    ));

    run_tvc_command(repository_dir.path(), &["add", "a"])
        .assert()
        .success();

    assert_eq!(
        read_state_file(repository_dir.path(), "index"),
        "a/2.txt:\na/b/3.txt:\n"
    );
}

#[rstest]
fn add_current_directory_skips_repository_directory(init_repository_dir: TempDir) {
    run_tvc_command(init_repository_dir.path(), &["add", "."])
        .assert()
        .success();

    let index = read_state_file(init_repository_dir.path(), "index");
    assert!(!index.contains(".tvc"));
    assert_eq!(index.lines().count(), 3);
}

#[rstest]
fn adding_a_non_existent_file_fails_without_touching_the_index(repository_dir: TempDir) {
    write_file(FileSpec::new(
        repository_dir.path().join("foo"),
        "abc".to_string(),
    ));

    run_tvc_command(repository_dir.path(), &["add", "foo", "missing.txt"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains(
            "pathspec 'missing.txt' did not match any files",
        ));

    assert!(!repository_dir.path().join(".tvc").join("index").exists());
}

#[rstest]
fn adding_an_unchanged_committed_file_twice_does_not_stage_it(repository_dir: TempDir) {
    write_file(FileSpec::new(
        repository_dir.path().join("foo"),
        "abc".to_string(),
    ));
    run_tvc_command(repository_dir.path(), &["add", "foo"])
        .assert()
        .success();
    tvc_commit(repository_dir.path(), "first").assert().success();

    for _ in 0..2 {
        run_tvc_command(repository_dir.path(), &["add", "foo"])
            .assert()
            .success();
    }

    run_tvc_command(repository_dir.path(), &["status"])
        .assert()
        .success()
        .stdout(predicate::str::contains("tracked: foo"))
        .stdout(predicate::str::contains("staged:").not());

    tvc_commit(repository_dir.path(), "second")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("nothing to commit"));
}

#[rstest]
fn add_without_paths_is_a_no_op(repository_dir: TempDir) {
    run_tvc_command(repository_dir.path(), &["add"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    assert!(!repository_dir.path().join(".tvc").join("index").exists());
}

#[cfg(unix)]
#[rstest]
fn add_skips_symbolic_links(repository_dir: TempDir) {
    let outside = TempDir::new().unwrap();
    write_file(FileSpec::new(
        outside.path().join("secret.txt"),
        "secret".to_string(),
    ));
    write_file(FileSpec::new(
        repository_dir.path().join("foo"),
        "abc".to_string(),
    ));
    std::os::unix::fs::symlink(
        outside.path().join("secret.txt"),
        repository_dir.path().join("link"),
    )
    .unwrap();

    run_tvc_command(repository_dir.path(), &["add", "link"])
        .assert()
        .success();
    run_tvc_command(repository_dir.path(), &["add", "."])
        .assert()
        .success();

    assert_eq!(read_state_file(repository_dir.path(), "index"), "foo:\n");
}

#[cfg(unix)]
#[rstest]
fn add_refuses_file_names_with_line_breaks(repository_dir: TempDir) {
    write_file(FileSpec::new(
        repository_dir.path().join("foo"),
        "abc".to_string(),
    ));
    write_file(FileSpec::new(
        repository_dir.path().join("bad\nname"),
        "oops".to_string(),
    ));

    run_tvc_command(repository_dir.path(), &["add", "."])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("line breaks are not supported"));

    assert!(!repository_dir.path().join(".tvc").join("index").exists());
}
