use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::TempDir;

fn tasks_file(dir: &TempDir) -> PathBuf {
    dir.path().join("tasks.json")
}

fn bin(file: &Path) -> Command {
    let mut cmd = Command::cargo_bin("task-tracker").unwrap();
    cmd.env_remove("TASK_TRACKER_FILE")
        .env_remove("RUST_LOG")
        .arg("--file")
        .arg(file);
    cmd
}

#[test]
fn test_add_and_list() {
    let dir = TempDir::new().unwrap();
    let file = tasks_file(&dir);

    bin(&file)
        .args(["add", "Buy", "milk"])
        .assert()
        .success()
        .stdout("Task added: \"Buy milk\"\n");

    bin(&file)
        .arg("list")
        .assert()
        .success()
        .stdout("1. [ ] Buy milk\n");
}

#[test]
fn test_complete_and_list() {
    let dir = TempDir::new().unwrap();
    let file = tasks_file(&dir);
    bin(&file).args(["add", "Buy milk"]).assert().success();

    bin(&file)
        .args(["complete", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Task 1 marked as complete: \"Buy milk\"",
        ));

    bin(&file)
        .arg("list")
        .assert()
        .success()
        .stdout("1. [x] Buy milk\n");

    let before = fs::read(&file).unwrap();
    bin(&file)
        .args(["complete", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("already marked as complete"));
    assert_eq!(fs::read(&file).unwrap(), before);
}

#[test]
fn test_invalid_number_exits_zero() {
    let dir = TempDir::new().unwrap();
    let file = tasks_file(&dir);
    bin(&file).args(["add", "Buy milk"]).assert().success();
    let before = fs::read(&file).unwrap();

    bin(&file)
        .args(["complete", "abc"])
        .assert()
        .code(0)
        .stdout(predicate::str::contains("Invalid task number 'abc'"));
    assert_eq!(fs::read(&file).unwrap(), before);
}

#[test]
fn test_remove_out_of_range_exits_zero() {
    let dir = TempDir::new().unwrap();
    let file = tasks_file(&dir);
    bin(&file).args(["add", "one"]).assert().success();
    bin(&file).args(["add", "two"]).assert().success();

    bin(&file)
        .args(["remove", "5"])
        .assert()
        .code(0)
        .stdout(predicate::str::contains("Valid task numbers are 1 to 2."));
}

#[test]
fn test_remove_shifts_display_index() {
    let dir = TempDir::new().unwrap();
    let file = tasks_file(&dir);
    for description in ["one", "two", "three"] {
        bin(&file).args(["add", description]).assert().success();
    }

    bin(&file)
        .args(["REMOVE", "2"])
        .assert()
        .success()
        .stdout("Task 2 removed: \"two\"\n");

    bin(&file)
        .arg("list")
        .assert()
        .success()
        .stdout("1. [ ] one\n2. [ ] three\n");
}

#[test]
fn test_no_command_exits_one() {
    let dir = TempDir::new().unwrap();

    bin(&tasks_file(&dir))
        .assert()
        .code(1)
        .stdout(predicate::str::starts_with("Error: No command provided."))
        .stdout(predicate::str::contains("--- Task Tracker Help ---"));
}

#[test]
fn test_unknown_command_exits_one() {
    let dir = TempDir::new().unwrap();

    bin(&tasks_file(&dir))
        .arg("frobnicate")
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Unknown command 'frobnicate'"))
        .stdout(predicate::str::contains("Usage:"));
}

#[test]
fn test_hyphenated_command_is_unknown() {
    let dir = TempDir::new().unwrap();

    bin(&tasks_file(&dir))
        .arg("-x")
        .assert()
        .code(1)
        .stdout(predicate::str::starts_with("Error: Unknown command '-x'"))
        .stdout(predicate::str::contains("--- Task Tracker Help ---"));
}

#[test]
fn test_negative_number_reaches_command() {
    let dir = TempDir::new().unwrap();
    let file = tasks_file(&dir);
    bin(&file).args(["add", "one"]).assert().success();

    bin(&file)
        .args(["remove", "-1"])
        .assert()
        .code(0)
        .stdout(predicate::str::contains("Task number -1 not found."));
}

#[test]
fn test_legacy_entries_survive_add() {
    let dir = TempDir::new().unwrap();
    let file = tasks_file(&dir);
    fs::write(
        &file,
        r#"[{"description":"keep me","status":"complete"},{"description":"legacy"}]"#,
    )
    .unwrap();

    bin(&file)
        .arg("list")
        .assert()
        .success()
        .stdout("1. [x] keep me\n2. [ ] legacy\n");

    bin(&file).args(["add", "new"]).assert().success();
    let saved: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&file).unwrap()).unwrap();
    assert_eq!(
        saved,
        serde_json::json!([
            { "description": "keep me", "status": "complete" },
            { "description": "legacy", "status": "pending" },
            { "description": "new", "status": "pending" }
        ])
    );
}

#[test]
fn test_help_exits_zero() {
    let dir = TempDir::new().unwrap();

    bin(&tasks_file(&dir))
        .arg("Help")
        .assert()
        .success()
        .stdout(predicate::str::contains("task-tracker complete <number>"));
}

#[test]
fn test_missing_argument_exits_zero() {
    let dir = TempDir::new().unwrap();
    let file = tasks_file(&dir);

    bin(&file)
        .arg("add")
        .assert()
        .code(0)
        .stdout(predicate::str::contains(
            "'add' command requires a task description.",
        ));
    assert!(!file.exists());
}

#[test]
fn test_corrupt_file_lists_empty() {
    let dir = TempDir::new().unwrap();
    let file = tasks_file(&dir);
    fs::write(&file, "{ not json").unwrap();

    bin(&file)
        .arg("list")
        .assert()
        .success()
        .stdout("No tasks found. Add one with the 'add' command!\n");

    bin(&file).args(["add", "fresh"]).assert().success();
    let saved: serde_json::Value = serde_json::from_str(&fs::read_to_string(&file).unwrap()).unwrap();
    assert_eq!(
        saved,
        serde_json::json!([{ "description": "fresh", "status": "pending" }])
    );
}

#[test]
fn test_file_from_environment() {
    let dir = TempDir::new().unwrap();
    let file = tasks_file(&dir);

    Command::cargo_bin("task-tracker")
        .unwrap()
        .env("TASK_TRACKER_FILE", &file)
        .args(["add", "from env"])
        .assert()
        .success();

    assert!(fs::read_to_string(&file).unwrap().contains("from env"));
}

#[test]
fn test_verbose_logs_to_stderr() {
    let dir = TempDir::new().unwrap();
    let file = tasks_file(&dir);

    let mut cmd = Command::cargo_bin("task-tracker").unwrap();
    cmd.env_remove("RUST_LOG")
        .arg("--verbose")
        .arg("--file")
        .arg(&file)
        .arg("list")
        .assert()
        .success()
        .stdout("No tasks found. Add one with the 'add' command!\n")
        .stderr(predicate::str::contains("no task file"));
}
