use crate::common::BASE_TIMESTAMP;
use assert_cmd::Command;
use assert_fs::TempDir;
use derive_new::new;
use filetime::FileTime;
use rstest::fixture;
use std::path::Path;

#[fixture]
pub fn repository_dir() -> TempDir {
    TempDir::new().expect("Failed to create temp dir")
}

/// A freshly initialised repository whose HEAD points at the unborn `main` branch
#[fixture]
pub fn empty_repository(repository_dir: TempDir) -> TempDir {
    run_git_command(repository_dir.path(), &["init", "--quiet"])
        .assert()
        .success();
    run_git_command(
        repository_dir.path(),
        &["symbolic-ref", "HEAD", "refs/heads/main"],
    )
    .assert()
    .success();

    repository_dir
}

/// `main` with three commits, one minute apart
#[fixture]
pub fn linear_repository(empty_repository: TempDir) -> TempDir {
    for i in 0..3 {
        git_commit(
            empty_repository.path(),
            &format!("Commit {}", i + 1),
            BASE_TIMESTAMP + i * 60,
        )
        .assert()
        .success();
    }

    empty_repository
}

pub fn run_gitstamp_command(dir: &Path, args: &[&str]) -> Command {
    let mut cmd = Command::cargo_bin("gitstamp").expect("Failed to find gitstamp binary");
    cmd.current_dir(dir)
        .env_remove("GITSTAMP_REPOSITORY")
        .env_remove("GITSTAMP_TAG_PATTERN")
        .env_remove("GITSTAMP_MAX_DEPTH")
        .env_remove("RUST_LOG");
    for arg in args {
        cmd.arg(arg);
    }
    cmd
}

/// Run the real git executable, isolated from user and system configuration
pub fn run_git_command(dir: &Path, args: &[&str]) -> Command {
    let author = generate_random_author();

    let mut cmd = Command::new("git");
    cmd.current_dir(dir)
        .env("GIT_CONFIG_NOSYSTEM", "1")
        .env("GIT_CONFIG_GLOBAL", "/dev/null")
        .env("GIT_AUTHOR_NAME", &author.name)
        .env("GIT_AUTHOR_EMAIL", &author.email)
        .env("GIT_COMMITTER_NAME", &author.name)
        .env("GIT_COMMITTER_EMAIL", &author.email)
        .args(["-c", "commit.gpgsign=false", "-c", "tag.gpgsign=false"]);
    for arg in args {
        cmd.arg(arg);
    }
    cmd
}

#[derive(Debug, Clone, new)]
struct RandomAuthor {
    name: String,
    email: String,
}

fn generate_random_author() -> RandomAuthor {
    use fake::Fake;
    use fake::faker::internet::en::FreeEmail;
    use fake::faker::name::en::Name;

    let name = Name().fake::<String>().replace(" ", "_");
    let email = FreeEmail().fake::<String>();
    RandomAuthor::new(name, email)
}

fn git_date(timestamp: i64) -> String {
    format!("@{timestamp} +0000")
}

/// Create an empty commit with fixed author and committer time
pub fn git_commit(dir: &Path, message: &str, timestamp: i64) -> Command {
    let mut cmd = run_git_command(dir, &["commit", "--quiet", "--allow-empty", "-m", message]);
    cmd.env("GIT_AUTHOR_DATE", git_date(timestamp))
        .env("GIT_COMMITTER_DATE", git_date(timestamp));
    cmd
}

pub fn git_tag(dir: &Path, name: &str, revision: &str) {
    run_git_command(dir, &["tag", name, revision])
        .assert()
        .success();
}

/// Create an annotated tag whose tagger line carries `timestamp`
pub fn git_annotated_tag(dir: &Path, name: &str, revision: &str, timestamp: i64) {
    run_git_command(dir, &["tag", "-a", name, "-m", name, revision])
        .env("GIT_COMMITTER_DATE", git_date(timestamp))
        .assert()
        .success();
}

pub fn rev_parse(dir: &Path, revision: &str) -> String {
    let output = run_git_command(dir, &["rev-parse", revision])
        .output()
        .expect("Failed to run git rev-parse");

    String::from_utf8(output.stdout)
        .expect("rev-parse output is not UTF-8")
        .trim()
        .to_string()
}

pub fn short_id(dir: &Path, revision: &str) -> String {
    rev_parse(dir, revision)[..7].to_string()
}

/// Set the modification time of a loose reference file
pub fn pin_ref_mtime(dir: &Path, ref_name: &str, timestamp: i64) {
    let path = dir.join(".git").join(ref_name);
    filetime::set_file_mtime(&path, FileTime::from_unix_time(timestamp, 0))
        .expect("Failed to set reference mtime");
}

pub fn stdout_of(assert: &assert_cmd::assert::Assert) -> String {
    String::from_utf8(assert.get_output().stdout.clone()).expect("stdout is not UTF-8")
}

pub fn json_of(assert: &assert_cmd::assert::Assert) -> serde_json::Value {
    serde_json::from_slice(&assert.get_output().stdout).expect("stdout is not JSON")
}
