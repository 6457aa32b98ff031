//! Integration tests for the mdspark CLI

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::{tempdir, TempDir};

/// Command isolated from the developer's config, env and clipboard
fn mdspark(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("mdspark").unwrap();
    cmd.current_dir(dir)
        .env("HOME", dir)
        .env("XDG_CONFIG_HOME", dir.join(".config"))
        .env("NO_COLOR", "1")
        .env_remove("MDSPARK_POST")
        .env_remove("MDSPARK_ROOM_ID")
        .env_remove("MDSPARK_TOKEN")
        .env_remove("MDSPARK_BASE_URL")
        .env_remove("MDSPARK_LANG")
        .env_remove("MDSPARK_COPY")
        .env_remove("MDSPARK_LOG");
    cmd
}

fn workspace_with_hello() -> TempDir {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("hello.py"), "print(\"hi\")\n").unwrap();
    dir
}

#[test]
fn help_flag_shows_usage() {
    let dir = tempdir().unwrap();
    mdspark(dir.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("mdspark -f <FILE>"))
        .stdout(predicate::str::contains("6  other non-2xx response"));
}

#[test]
fn version_flag_shows_version() {
    let dir = tempdir().unwrap();
    mdspark(dir.path())
        .arg("-V")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn make_config_prints_template() {
    let dir = tempdir().unwrap();
    mdspark(dir.path())
        .arg("--make-config")
        .assert()
        .success()
        .stdout(predicate::str::contains("[spark]"));
}

#[test]
fn completions_for_bash() {
    let dir = tempdir().unwrap();
    mdspark(dir.path())
        .args(["--completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--file"));
}

#[test]
fn missing_file_flag_exits_with_argument_error() {
    let dir = tempdir().unwrap();
    mdspark(dir.path())
        .args(["-t", "Demo"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("-f <filename>"));
}

#[test]
fn unknown_flag_exits_with_argument_error() {
    let dir = tempdir().unwrap();
    mdspark(dir.path())
        .args(["-f", "hello.py", "--bogus"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("--bogus"));
}

#[test]
fn missing_source_file_exits_with_file_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().canonicalize().unwrap().join("nope.py");
    let cause = fs::read_to_string(&path).unwrap_err();

    mdspark(dir.path())
        .args(["-f", "nope.py", "--no-copy"])
        .assert()
        .code(3)
        .stdout(predicate::str::is_empty())
        .stderr(format!("✗ Cannot read {}: {}\n", path.display(), cause));
}

#[test]
fn prints_demo_snippet() {
    let dir = workspace_with_hello();
    mdspark(dir.path())
        .args(["-f", "hello.py", "-t", "Demo", "-c", "simple script", "--no-copy"])
        .assert()
        .success()
        .stdout("\n\n**Demo**\n\n*simple script*\n\n```python\nprint(\"hi\")\n\n```\n\n");
}

#[test]
fn prints_code_only_snippet() {
    let dir = workspace_with_hello();
    mdspark(dir.path())
        .args(["-f", "hello.py", "--no-copy"])
        .assert()
        .success()
        .stdout("\n```python\nprint(\"hi\")\n\n```\n\n");
}

#[test]
fn lang_flag_changes_fence() {
    let dir = workspace_with_hello();
    mdspark(dir.path())
        .args(["-f", "hello.py", "--lang", "py3", "--no-copy"])
        .assert()
        .success()
        .stdout(predicate::str::contains("```py3\n"));
}

#[test]
fn quiet_suppresses_snippet() {
    let dir = workspace_with_hello();
    mdspark(dir.path())
        .args(["-q", "-f", "hello.py", "--no-copy"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn post_without_credentials_is_config_error() {
    let dir = workspace_with_hello();
    mdspark(dir.path())
        .args(["-f", "hello.py", "--post", "--no-copy"])
        .assert()
        .code(7)
        .stderr(predicate::str::contains("MDSPARK_ROOM_ID"));
}
