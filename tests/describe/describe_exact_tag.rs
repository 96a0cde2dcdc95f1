use crate::common::command::{git_tag, json_of, rev_parse, run_gitstamp_command};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use rstest::rstest;

#[rstest]
fn describe_exact_tag(
    #[from(crate::common::command::linear_repository)] repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    git_tag(repository_dir.path(), "v1.0", "HEAD");

    run_gitstamp_command(repository_dir.path(), &["describe"])
        .assert()
        .success()
        .stdout(predicate::str::diff("v1.0\n"));

    let assert = run_gitstamp_command(repository_dir.path(), &["describe", "--json"])
        .assert()
        .success();
    let json = json_of(&assert);

    pretty_assertions::assert_eq!(
        json,
        serde_json::json!({
            "hash": rev_parse(repository_dir.path(), "HEAD"),
            "tag": "refs/tags/v1.0",
            "depth": 0,
        })
    );

    Ok(())
}
