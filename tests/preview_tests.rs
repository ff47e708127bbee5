//! Integration tests for the preview command

#![allow(deprecated)]

use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

mod common;
use common::{init_journal, jotbook_cmd, new_entry};

#[test]
fn test_preview_prints_fragment() {
    let temp = TempDir::new().unwrap();
    init_journal(temp.path());
    let id = new_entry(temp.path(), "Day", "# Hello\n**bold** and *italic*\n[click](http://x)");

    jotbook_cmd()
        .current_dir(temp.path())
        .args(["preview", id.as_str()])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "<h1>Hello</h1><br><strong>bold</strong> and <em>italic</em><br><a href=\"http://x\">click</a>",
        ));
}

#[test]
fn test_preview_escape_flag() {
    let temp = TempDir::new().unwrap();
    init_journal(temp.path());
    let id = new_entry(temp.path(), "Raw", "<b>x</b>");

    jotbook_cmd()
        .current_dir(temp.path())
        .args(["preview", id.as_str()])
        .assert()
        .success()
        .stdout(predicate::str::contains("<b>x</b>"));

    jotbook_cmd()
        .current_dir(temp.path())
        .args(["preview", id.as_str(), "--escape"])
        .assert()
        .success()
        .stdout(predicate::str::contains("&lt;b&gt;x&lt;/b&gt;"));
}

#[test]
fn test_preview_writes_document() {
    let temp = TempDir::new().unwrap();
    init_journal(temp.path());
    let id = new_entry(temp.path(), "Page", "* a\n* b");
    let out = temp.path().join("page.html");

    jotbook_cmd()
        .current_dir(temp.path())
        .args(["preview", id.as_str(), "--output"])
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote"));

    let html = fs::read_to_string(out).unwrap();
    assert!(html.contains("<title>Page</title>"));
    assert!(html.contains("<ul><li>a</li><br><li>b</li></ul>"));
}

#[test]
fn test_preview_missing_entry_fails() {
    let temp = TempDir::new().unwrap();
    init_journal(temp.path());

    jotbook_cmd()
        .current_dir(temp.path())
        .args(["preview", "nope"])
        .assert()
        .failure()
        .code(3);
}
