use crate::common::command::{json_of, rev_parse, run_gitstamp_command, short_id};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use rstest::rstest;

#[rstest]
fn describe_without_tags(
    #[from(crate::common::command::linear_repository)] repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = repository_dir.path();

    run_gitstamp_command(dir, &["describe"])
        .assert()
        .success()
        .stdout(predicate::str::diff(format!("{}\n", short_id(dir, "HEAD"))));

    let assert = run_gitstamp_command(dir, &["describe", "HEAD~1", "--json"])
        .assert()
        .success();

    pretty_assertions::assert_eq!(
        json_of(&assert),
        serde_json::json!({
            "hash": rev_parse(dir, "HEAD~1"),
            "tag": null,
            "depth": 1,
        })
    );

    Ok(())
}
