use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

const HEADER: &str = "Last Name,First Name,Middle Name,Organization,Work Phone,Personal Phone";
const ADD_JANE: &str = "2\nDoe\nJane\n\nAcme\n555-1000\n555-2000\n";

fn phonebook_cmd(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("phonebook").unwrap();
    cmd.current_dir(dir.path())
        .env("HOME", dir.path())
        .env("XDG_CONFIG_HOME", dir.path().join("config"))
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_add_writes_header_and_row() {
    let dir = TempDir::new().unwrap();

    phonebook_cmd(&dir)
        .write_stdin(format!("{}5\n", ADD_JANE))
        .assert()
        .success()
        .stdout(predicate::str::contains("1. Display entries"))
        .stdout(predicate::str::contains("Entry added (0): Doe, Jane"));

    let on_disk = fs::read_to_string(dir.path().join("phonebook.csv")).unwrap();
    let lines: Vec<&str> = on_disk.lines().collect();
    assert_eq!(lines, vec![HEADER, "Doe,Jane,,Acme,555-1000,555-2000"]);
}

#[test]
fn test_entries_survive_a_restart() {
    let dir = TempDir::new().unwrap();

    phonebook_cmd(&dir)
        .write_stdin(format!("{}5\n", ADD_JANE))
        .assert()
        .success();

    phonebook_cmd(&dir)
        .write_stdin("4\nacme\n1\n1\n10\n5\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Doe, Jane").count(2))
        .stdout(predicate::str::contains("555-2000"));
}

#[test]
fn test_missing_file_starts_empty() {
    let dir = TempDir::new().unwrap();

    phonebook_cmd(&dir)
        .write_stdin("1\n1\n10\n5\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("No entries on page 1."));

    assert!(!dir.path().join("phonebook.csv").exists());
}

#[test]
fn test_out_of_range_edit_leaves_file_alone() {
    let dir = TempDir::new().unwrap();
    phonebook_cmd(&dir)
        .write_stdin(format!("{}5\n", ADD_JANE))
        .assert()
        .success();
    let before = fs::read_to_string(dir.path().join("phonebook.csv")).unwrap();

    phonebook_cmd(&dir)
        .write_stdin("3\n7\nX\nX\nX\nX\nX\nX\n5\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("No entry at index 7; nothing changed."));

    let after = fs::read_to_string(dir.path().join("phonebook.csv")).unwrap();
    assert_eq!(before, after);
}

#[test]
fn test_edit_rewrites_row() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("phonebook.csv"),
        format!("{}\nDoe,Jane,,Acme,555-1000,555-2000\nRoe,Rick,,,,\n", HEADER),
    )
    .unwrap();

    phonebook_cmd(&dir)
        .write_stdin("3\n1\nRoe\nRichard\nQ\n\"Quotes\", Inc.\n1\n2\n5\n")
        .assert()
        .success();

    let on_disk = fs::read_to_string(dir.path().join("phonebook.csv")).unwrap();
    let lines: Vec<&str> = on_disk.lines().collect();
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[1], "Doe,Jane,,Acme,555-1000,555-2000");
    assert_eq!(lines[2], "Roe,Richard,Q,\"\"\"Quotes\"\", Inc.\",1,2");
}

#[test]
fn test_bad_input_does_not_crash() {
    let dir = TempDir::new().unwrap();

    phonebook_cmd(&dir)
        .write_stdin("7\n1\nabc\n1\n\n5\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Invalid choice. Please try again."))
        .stdout(predicate::str::contains("Please enter a whole number."));
}

#[test]
fn test_closed_stdin_exits_cleanly() {
    let dir = TempDir::new().unwrap();
    phonebook_cmd(&dir).write_stdin("").assert().success();
}

#[cfg(target_os = "linux")]
#[test]
fn test_config_sets_default_page_size() {
    let dir = TempDir::new().unwrap();
    let config_dir = dir.path().join("config").join("phonebook");
    fs::create_dir_all(&config_dir).unwrap();
    fs::write(config_dir.join("config.json"), r#"{"page_size": 1}"#).unwrap();
    fs::write(
        dir.path().join("phonebook.csv"),
        format!("{}\nFirstPerson,,,,,\nSecondPerson,,,,,\n", HEADER),
    )
    .unwrap();

    phonebook_cmd(&dir)
        .write_stdin("1\n2\n\n5\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("SecondPerson"))
        .stdout(predicate::str::contains("FirstPerson").not());
}

#[test]
fn test_unreadable_path_is_fatal() {
    let dir = TempDir::new().unwrap();
    fs::create_dir(dir.path().join("phonebook.csv")).unwrap();

    phonebook_cmd(&dir)
        .write_stdin("5\n")
        .assert()
        .failure()
        .stderr(predicate::str::starts_with("Error:"));
}

#[test]
fn test_verbose_logs_to_stderr() {
    let dir = TempDir::new().unwrap();

    phonebook_cmd(&dir)
        .arg("--verbose")
        .write_stdin("5\n")
        .assert()
        .success()
        .stderr(predicate::str::contains("phonebook opened"))
        .stdout(predicate::str::contains("phonebook opened").not());
}
