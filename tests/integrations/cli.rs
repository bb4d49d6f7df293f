//! End-to-end tests for the `notifier` binary: exit codes, section
//! skipping, and argument passthrough.

use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;
use std::path::PathBuf;
use tempfile::NamedTempFile;

/// A helper function to run a test with a temporary config file.
fn with_config_file<F>(ini_content: &str, test_fn: F)
where
    F: FnOnce(PathBuf),
{
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{}", ini_content).unwrap();
    test_fn(file.path().to_path_buf());
}

fn notifier() -> Command {
    Command::cargo_bin("notifier").unwrap()
}

#[test]
#[cfg(unix)]
fn exits_zero_when_the_external_notifier_succeeds() {
    with_config_file("[terminal-notifier]\npath = /bin/true\n", |path| {
        notifier()
            .arg("--config")
            .arg(&path)
            .args(["-message", "hello"])
            .assert()
            .success();
    });
}

#[test]
#[cfg(unix)]
fn exits_nonzero_when_the_external_notifier_fails() {
    with_config_file("[terminal-notifier]\npath = /bin/false\n", |path| {
        notifier()
            .arg("--config")
            .arg(&path)
            .args(["-message", "hello"])
            .assert()
            .failure();
    });
}

#[test]
fn unregistered_sections_are_skipped_without_error() {
    with_config_file("[carrier-pigeon]\ncoop = roof\n", |path| {
        notifier().arg("--config").arg(&path).assert().success();
    });
}

#[test]
fn a_missing_config_file_is_not_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("no-such-rc");

    notifier()
        .arg("--config")
        .arg(&path)
        .assert()
        .success()
        .stderr(predicate::str::contains("nothing to do"));
}

#[test]
fn a_malformed_config_file_is_fatal() {
    with_config_file("[unterminated\nkey = value\n", |path| {
        notifier()
            .arg("--config")
            .arg(&path)
            .assert()
            .failure()
            .stderr(predicate::str::contains("failed to load configuration"));
    });
}

#[test]
fn a_webhook_section_missing_its_key_exits_nonzero() {
    with_config_file("[ifttt]\nevent = backup\n", |path| {
        notifier()
            .arg("--config")
            .arg(&path)
            .args(["-message", "hello"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("missing required field `key`"));
    });
}

#[test]
#[cfg(unix)]
fn arguments_are_passed_through_to_the_external_notifier() {
    use std::os::unix::fs::PermissionsExt;

    let dir = tempfile::tempdir().unwrap();
    let out_path = dir.path().join("captured-args");
    let script_path = dir.path().join("capture.sh");

    std::fs::write(
        &script_path,
        format!("#!/bin/sh\nprintf '%s\\n' \"$@\" > {}\n", out_path.display()),
    )
    .unwrap();
    std::fs::set_permissions(&script_path, std::fs::Permissions::from_mode(0o755)).unwrap();

    with_config_file(
        &format!("[terminal-notifier]\npath = {}\n", script_path.display()),
        |path| {
            notifier()
                .arg("--config")
                .arg(&path)
                .args(["-message", "backup done", "-extra"])
                .assert()
                .success();
        },
    );

    let captured = std::fs::read_to_string(&out_path).unwrap();
    assert_eq!(captured, "-message\nbackup done\n-extra\n");
}
