//! Integration tests for entry commands

#![allow(deprecated)]

use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

mod common;
use common::{init_journal, jotbook_cmd, new_entry, new_folder, run_ok};

fn entries_json(temp: &TempDir) -> serde_json::Value {
    let raw = fs::read_to_string(temp.path().join(".jotbook/journal-entries.json")).unwrap();
    serde_json::from_str(&raw).unwrap()
}

#[test]
fn test_list_no_entries() {
    let temp = TempDir::new().unwrap();
    init_journal(temp.path());

    jotbook_cmd()
        .current_dir(temp.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No entries found"));
}

#[test]
fn test_new_entry_is_persisted() {
    let temp = TempDir::new().unwrap();
    init_journal(temp.path());

    let id = new_entry(temp.path(), "First", "Hello **world**");

    let json = entries_json(&temp);
    let entry = &json[0];
    assert_eq!(entry["id"], id.as_str());
    assert_eq!(entry["title"], "First");
    assert_eq!(entry["content"], "Hello **world**");
    assert!(entry["folderId"].is_null());
    assert_eq!(entry["color"], "default");
    assert_eq!(entry["createdAt"], entry["updatedAt"]);
}

#[test]
fn test_new_empty_entry_not_saved() {
    let temp = TempDir::new().unwrap();
    init_journal(temp.path());

    jotbook_cmd()
        .current_dir(temp.path())
        .args(["new", "--content", "  "])
        .assert()
        .success()
        .stdout(predicate::str::contains("Nothing to save"));

    assert!(!temp.path().join(".jotbook/journal-entries.json").exists());
}

#[test]
fn test_new_entry_uses_configured_default_color() {
    let temp = TempDir::new().unwrap();
    init_journal(temp.path());
    run_ok(temp.path(), &["config", "default_color", "green"]);

    new_entry(temp.path(), "Tinted", "x");

    let entries = entries_json(&temp);
    assert_eq!(entries[0]["color"], "green");
    assert_eq!(entries[0]["createdAt"], entries[0]["updatedAt"]);
}

#[test]
fn test_list_newest_first_with_excerpt() {
    let temp = TempDir::new().unwrap();
    init_journal(temp.path());

    new_entry(temp.path(), "Older", "first body");
    new_entry(temp.path(), "Newer", "# Heading\nsecond *body*");

    let output = run_ok(temp.path(), &["list"]);
    let newer = output.find("Newer").unwrap();
    let older = output.find("Older").unwrap();
    assert!(newer < older);
    assert!(output.contains("Heading second body"));
    assert!(output.contains("Today, "));
}

#[test]
fn test_show_entry() {
    let temp = TempDir::new().unwrap();
    init_journal(temp.path());
    let id = new_entry(temp.path(), "Shown", "raw *text*");

    jotbook_cmd()
        .current_dir(temp.path())
        .args(["show", id.as_str()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Shown"))
        .stdout(predicate::str::contains(format!("id:      {}", id)))
        .stdout(predicate::str::contains("folder:  All Entries"))
        .stdout(predicate::str::contains("raw *text*"));
}

#[test]
fn test_edit_entry_keeps_title_when_omitted() {
    let temp = TempDir::new().unwrap();
    init_journal(temp.path());
    let id = new_entry(temp.path(), "Keep me", "before");

    run_ok(temp.path(), &["edit", id.as_str(), "--content", "after"]);

    let json = entries_json(&temp);
    assert_eq!(json[0]["title"], "Keep me");
    assert_eq!(json[0]["content"], "after");
    assert!(json[0]["updatedAt"].as_i64() >= json[0]["createdAt"].as_i64());
}

#[test]
fn test_edit_missing_entry_fails() {
    let temp = TempDir::new().unwrap();
    init_journal(temp.path());

    jotbook_cmd()
        .current_dir(temp.path())
        .args(["edit", "nope", "--content", "x"])
        .assert()
        .failure()
        .code(3)
        .stderr(predicate::str::contains("No entry with id 'nope'"));
}

#[test]
fn test_color_entry() {
    let temp = TempDir::new().unwrap();
    init_journal(temp.path());
    let id = new_entry(temp.path(), "Paint", "x");

    jotbook_cmd()
        .current_dir(temp.path())
        .args(["color", id.as_str(), "Purple"])
        .assert()
        .success()
        .stdout(predicate::str::contains("purple"));

    assert_eq!(entries_json(&temp)[0]["color"], "purple");
}

#[test]
fn test_color_rejects_unknown_color() {
    let temp = TempDir::new().unwrap();
    init_journal(temp.path());
    let id = new_entry(temp.path(), "Paint", "x");

    jotbook_cmd()
        .current_dir(temp.path())
        .args(["color", id.as_str(), "teal"])
        .assert()
        .failure()
        .code(4);

    assert_eq!(entries_json(&temp)[0]["color"], "default");
}

#[test]
fn test_delete_with_yes() {
    let temp = TempDir::new().unwrap();
    init_journal(temp.path());
    let keep = new_entry(temp.path(), "Keep", "x");
    let gone = new_entry(temp.path(), "Gone", "y");

    run_ok(temp.path(), &["delete", gone.as_str(), "--yes"]);

    let json = entries_json(&temp);
    assert_eq!(json.as_array().unwrap().len(), 1);
    assert_eq!(json[0]["id"], keep.as_str());
}

#[test]
fn test_delete_requires_confirmation() {
    let temp = TempDir::new().unwrap();
    init_journal(temp.path());
    let id = new_entry(temp.path(), "Maybe", "x");

    jotbook_cmd()
        .current_dir(temp.path())
        .args(["delete", id.as_str()])
        .write_stdin("n\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Cancelled"));
    assert_eq!(entries_json(&temp).as_array().unwrap().len(), 1);

    jotbook_cmd()
        .current_dir(temp.path())
        .args(["delete", id.as_str()])
        .write_stdin("y\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted entry"));
    assert!(entries_json(&temp).as_array().unwrap().is_empty());
}

#[test]
fn test_delete_missing_entry_fails() {
    let temp = TempDir::new().unwrap();
    init_journal(temp.path());

    jotbook_cmd()
        .current_dir(temp.path())
        .args(["delete", "nope", "--yes"])
        .assert()
        .failure()
        .code(3);
}

#[test]
fn test_move_entry_between_folders() {
    let temp = TempDir::new().unwrap();
    init_journal(temp.path());
    let folder = new_folder(temp.path(), "Work");
    let id = new_entry(temp.path(), "Task", "x");

    jotbook_cmd()
        .current_dir(temp.path())
        .args(["move", id.as_str(), folder.as_str()])
        .assert()
        .success()
        .stdout(predicate::str::contains("to Work"));
    assert_eq!(entries_json(&temp)[0]["folderId"], folder.as_str());

    let listed = run_ok(temp.path(), &["list", "--folder", folder.as_str()]);
    assert!(listed.contains("Task  [Work]"));

    jotbook_cmd()
        .current_dir(temp.path())
        .args(["move", id.as_str()])
        .assert()
        .success()
        .stdout(predicate::str::contains("to All Entries"));
    assert!(entries_json(&temp)[0]["folderId"].is_null());
}

#[test]
fn test_move_to_missing_folder_fails() {
    let temp = TempDir::new().unwrap();
    init_journal(temp.path());
    let id = new_entry(temp.path(), "Task", "x");

    jotbook_cmd()
        .current_dir(temp.path())
        .args(["move", id.as_str(), "ghost"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No folder with id 'ghost'"));
}

#[test]
fn test_list_unfiled() {
    let temp = TempDir::new().unwrap();
    init_journal(temp.path());
    let folder = new_folder(temp.path(), "Work");
    run_ok(
        temp.path(),
        &["new", "--title", "Filed", "--content", "x", "--folder", folder.as_str()],
    );
    new_entry(temp.path(), "Loose", "y");

    let output = run_ok(temp.path(), &["list", "--unfiled"]);
    assert!(output.contains("Loose"));
    assert!(!output.contains("Filed"));
}

#[test]
fn test_legacy_entries_file_loads() {
    let temp = TempDir::new().unwrap();
    init_journal(temp.path());
    fs::write(
        temp.path().join(".jotbook/journal-entries.json"),
        r#"[{"id":"old-1","title":"Legacy","content":"from before","createdAt":1700000000000,"updatedAt":1700000000000}]"#,
    )
    .unwrap();

    jotbook_cmd()
        .current_dir(temp.path())
        .args(["show", "old-1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("color:   default"))
        .stdout(predicate::str::contains("folder:  All Entries"));
}

#[test]
fn test_malformed_entries_file_reads_as_empty() {
    let temp = TempDir::new().unwrap();
    init_journal(temp.path());
    fs::write(temp.path().join(".jotbook/journal-entries.json"), "{broken").unwrap();

    jotbook_cmd()
        .current_dir(temp.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No entries found"));
}
