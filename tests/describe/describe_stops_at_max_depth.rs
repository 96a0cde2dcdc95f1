use crate::common::command::{git_tag, json_of, run_gitstamp_command, short_id};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use rstest::rstest;

#[rstest]
fn describe_stops_at_max_depth(
    #[from(crate::common::command::linear_repository)] repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = repository_dir.path();
    git_tag(dir, "v1.0", "HEAD~2");

    let assert = run_gitstamp_command(dir, &["describe", "--max-depth", "1", "--json"])
        .assert()
        .success();
    let json = json_of(&assert);

    pretty_assertions::assert_eq!(json["tag"], serde_json::Value::Null);
    pretty_assertions::assert_eq!(json["depth"], 1);

    run_gitstamp_command(dir, &["describe"])
        .env("GITSTAMP_MAX_DEPTH", "2")
        .assert()
        .success()
        .stdout(predicate::str::diff(format!("v1.0-2-g{}\n", short_id(dir, "HEAD"))));

    Ok(())
}
