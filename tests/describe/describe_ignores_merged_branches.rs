use crate::common::BASE_TIMESTAMP;
use crate::common::command::{git_commit, git_tag, json_of, run_git_command, run_gitstamp_command};
use assert_fs::TempDir;
use rstest::rstest;

#[rstest]
fn describe_ignores_merged_branches(
    #[from(crate::common::command::linear_repository)] repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = repository_dir.path();
    git_tag(dir, "v1.0", "HEAD~2");

    // side branch tagged closer to the merge than anything on main
    run_git_command(dir, &["checkout", "--quiet", "-b", "side"])
        .assert()
        .success();
    git_commit(dir, "Side work", BASE_TIMESTAMP + 600)
        .assert()
        .success();
    git_tag(dir, "side-1", "HEAD");

    run_git_command(dir, &["checkout", "--quiet", "main"])
        .assert()
        .success();
    git_commit(dir, "Main work", BASE_TIMESTAMP + 700)
        .assert()
        .success();
    run_git_command(dir, &["merge", "--quiet", "--no-ff", "-m", "Merge side", "side"])
        .env("GIT_AUTHOR_DATE", format!("@{} +0000", BASE_TIMESTAMP + 800))
        .env("GIT_COMMITTER_DATE", format!("@{} +0000", BASE_TIMESTAMP + 800))
        .assert()
        .success();

    let assert = run_gitstamp_command(dir, &["describe", "--json"])
        .assert()
        .success();
    let json = json_of(&assert);

    // merge -> main work -> commit 3 -> commit 2 -> commit 1
    pretty_assertions::assert_eq!(json["tag"], "refs/tags/v1.0");
    pretty_assertions::assert_eq!(json["depth"], 4);

    Ok(())
}
