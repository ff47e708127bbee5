#![allow(dead_code)]

use assert_cmd::Command;
use std::path::Path;

pub fn jotbook_cmd() -> Command {
    let mut cmd = Command::cargo_bin("jotbook").unwrap();
    cmd.env_remove("JOTBOOK_ROOT");
    cmd.env_remove("JOTBOOK_LOG");
    cmd.env_remove("EDITOR");
    cmd.env_remove("VISUAL");
    cmd
}

/// Initialize a journal in `dir`
pub fn init_journal(dir: &Path) {
    jotbook_cmd().arg("init").arg(dir).assert().success();
}

/// Run a command in `dir` and return its trimmed stdout
pub fn run_ok(dir: &Path, args: &[&str]) -> String {
    let output = jotbook_cmd()
        .current_dir(dir)
        .args(args)
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    String::from_utf8(output).unwrap().trim().to_string()
}

/// Create an entry and return its id
pub fn new_entry(dir: &Path, title: &str, content: &str) -> String {
    run_ok(dir, &["new", "--title", title, "--content", content])
}

/// Create a folder and return its id
pub fn new_folder(dir: &Path, name: &str) -> String {
    run_ok(dir, &["folder", "new", name])
}
