use crate::common::command::{git_tag, pin_ref_mtime, run_git_command, run_gitstamp_command};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use rstest::rstest;

#[rstest]
fn describe_from_linked_worktree(
    #[from(crate::common::command::linear_repository)] repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = repository_dir.path();
    git_tag(dir, "alpha", "HEAD");
    git_tag(dir, "zeta", "HEAD");
    pin_ref_mtime(dir, "refs/tags/alpha", 1_000_000_000);
    pin_ref_mtime(dir, "refs/tags/zeta", 1_000_000_100);
    run_git_command(dir, &["worktree", "add", "--quiet", "--detach", "wt", "HEAD"])
        .assert()
        .success();
    let worktree = dir.join("wt");

    run_gitstamp_command(dir, &["tags"])
        .assert()
        .success()
        .stdout(predicate::str::diff("zeta\nalpha\n"));

    run_gitstamp_command(&worktree, &["tags"])
        .assert()
        .success()
        .stdout(predicate::str::diff("zeta\nalpha\n"));

    run_gitstamp_command(&worktree, &["describe"])
        .assert()
        .success()
        .stdout(predicate::str::diff("zeta\n"));

    Ok(())
}
