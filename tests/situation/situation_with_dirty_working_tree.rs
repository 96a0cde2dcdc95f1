use crate::common::command::{json_of, run_git_command, run_gitstamp_command};
use assert_fs::TempDir;
use assert_fs::prelude::{FileWriteStr, PathChild};
use fake::Fake;
use fake::faker::lorem::en::{Word, Words};
use predicates::prelude::predicate;
use rstest::rstest;

#[rstest]
fn untracked_file_makes_working_tree_dirty(
    #[from(crate::common::command::linear_repository)] repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let file_name = format!("{}.txt", Word().fake::<String>());
    repository_dir
        .child(file_name)
        .write_str(&Words(5..10).fake::<Vec<String>>().join(" "))?;

    let assert = run_gitstamp_command(repository_dir.path(), &["situation", "--json"])
        .assert()
        .success();
    pretty_assertions::assert_eq!(json_of(&assert)["clean"], false);

    run_gitstamp_command(repository_dir.path(), &["situation"])
        .assert()
        .success()
        .stdout(predicate::str::contains("status:    dirty"));

    Ok(())
}

#[rstest]
fn staged_file_makes_working_tree_dirty(
    #[from(crate::common::command::linear_repository)] repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    repository_dir.child("staged.txt").write_str("staged")?;
    run_git_command(repository_dir.path(), &["add", "staged.txt"])
        .assert()
        .success();

    let assert = run_gitstamp_command(repository_dir.path(), &["situation", "--json"])
        .assert()
        .success();
    pretty_assertions::assert_eq!(json_of(&assert)["clean"], false);

    Ok(())
}

#[rstest]
fn ignored_file_keeps_working_tree_clean(
    #[from(crate::common::command::linear_repository)] repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    repository_dir.child(".git/info/exclude").write_str("*.log\n")?;
    repository_dir.child("build.log").write_str("noise")?;

    let assert = run_gitstamp_command(repository_dir.path(), &["situation", "--json"])
        .assert()
        .success();
    pretty_assertions::assert_eq!(json_of(&assert)["clean"], true);

    Ok(())
}
