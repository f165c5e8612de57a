use assert_cmd::cargo; // handy crate for testing CLIs
use std::process::Command;
use tempfile::TempDir;

/// Fresh repository with one empty commit, so `git diff HEAD` is empty.
fn init_repo() -> TempDir {
    let dir = TempDir::new().expect("temp dir");
    let git = |args: &[&str]| {
        let status = Command::new("git")
            .args(args)
            .current_dir(dir.path())
            .status()
            .expect("git runs");
        assert!(status.success(), "git {args:?} failed");
    };
    git(&["init", "-q"]);
    git(&["config", "user.email", "test@example.com"]);
    git(&["config", "user.name", "Test"]);
    git(&["commit", "--allow-empty", "-q", "-m", "init"]);
    dir
}

#[test]
fn prints_help() {
    let mut cmd = cargo::cargo_bin_cmd!();

    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicates::str::contains("Usage"));
}

#[test]
fn prints_version() {
    let mut cmd = cargo::cargo_bin_cmd!();

    cmd.arg("--version")
        .assert()
        .success()
        .stdout(predicates::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn empty_diff_short_circuits_without_committing() {
    let repo = init_repo();
    let mut cmd = cargo::cargo_bin_cmd!();

    cmd.current_dir(repo.path())
        .arg("--no-model")
        .assert()
        .success()
        .stdout(predicates::str::contains("No changes to summarize"));

    let count = Command::new("git")
        .args(["rev-list", "--count", "HEAD"])
        .current_dir(repo.path())
        .output()
        .expect("git runs");
    assert_eq!(String::from_utf8_lossy(&count.stdout).trim(), "1");
}

#[test]
fn empty_diff_needs_no_api_key() {
    let repo = init_repo();
    let mut cmd = cargo::cargo_bin_cmd!();

    cmd.current_dir(repo.path())
        .env_remove("OPENAI_API_KEY")
        .assert()
        .success()
        .stdout(predicates::str::contains("No changes to summarize"));
}

#[test]
fn rejects_user_supplied_message_flag() {
    let mut cmd = cargo::cargo_bin_cmd!();

    cmd.args(["--no-model", "-m", "my own message"])
        .assert()
        .failure()
        .stderr(predicates::str::contains("not allowed"));
}
