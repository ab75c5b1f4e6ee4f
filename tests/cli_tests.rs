use assert_cmd::Command;
use predicates::prelude::*;

fn cmd() -> Command {
    Command::cargo_bin("review-assistant").unwrap()
}

#[test]
fn checklist_prints_unchecked_task_list() {
    cmd()
        .arg("checklist")
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "Review Progress: 0% (0 of 25 items checked)",
        ))
        .stdout(predicate::str::contains("## λ Functionality & Logic"))
        .stdout(predicate::str::contains(
            "- [ ] Are secrets/credentials properly handled?",
        ))
        .stdout(predicate::str::contains("- [x]").not());
}

#[test]
fn templates_prints_all_groups() {
    cmd()
        .arg("templates")
        .assert()
        .success()
        .stdout(predicate::str::contains("## Review Openers"))
        .stdout(predicate::str::contains("## Positive Feedback"))
        .stdout(predicate::str::contains("## Constructive Suggestions"))
        .stdout(predicate::str::contains("- Excellent error handling!"));
}

#[test]
fn rejects_unknown_tab() {
    cmd()
        .args(["--tab", "settings", "checklist"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value 'settings'"));
}

#[test]
fn log_file_is_created() {
    let dir = tempfile::tempdir().unwrap();
    let log_path = dir.path().join("assistant.log");

    cmd()
        .arg("--log-file")
        .arg(&log_path)
        .arg("templates")
        .assert()
        .success();

    assert!(log_path.exists(), "log file should be created");
}

#[test]
fn bad_log_level_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    cmd()
        .env_remove("RUST_LOG")
        .arg("--log-file")
        .arg(dir.path().join("a.log"))
        .args(["--log-level", "app=loud"])
        .arg("templates")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid log level"));
}
