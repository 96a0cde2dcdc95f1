use crate::common::NO_COMMIT;
use crate::common::command::{json_of, run_gitstamp_command};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use rstest::rstest;

#[rstest]
fn situation_of_empty_repository(
    #[from(crate::common::command::empty_repository)] repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let assert = run_gitstamp_command(repository_dir.path(), &["situation", "--json"])
        .assert()
        .success();

    pretty_assertions::assert_eq!(
        json_of(&assert),
        serde_json::json!({
            "hash": NO_COMMIT,
            "timestamp": 0,
            "branch": "main",
            "tags": [],
            "clean": true,
        })
    );

    run_gitstamp_command(repository_dir.path(), &["tags"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    Ok(())
}

#[rstest]
fn named_revision_in_empty_repository_fails(
    #[from(crate::common::command::empty_repository)] repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    run_gitstamp_command(repository_dir.path(), &["situation", "main"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("revision 'main' not found"));

    Ok(())
}
