//! Integration tests for the greet CLI

use assert_cmd::Command;
use predicates::prelude::*;

/// Test CLI with no arguments prints the default greeting
#[test]
fn test_default_mode() {
    let mut cmd = Command::cargo_bin("greet").unwrap();
    cmd.assert().success().stdout("Hello, World!\n");
}

/// Test CLI with a bare name argument greets that name
#[test]
fn test_default_mode_with_name() {
    let mut cmd = Command::cargo_bin("greet").unwrap();
    cmd.arg("Alice").assert().success().stdout("Hello, Alice!\n");
}

#[test]
fn test_hello_command_default() {
    let mut cmd = Command::cargo_bin("greet").unwrap();
    cmd.arg("hello").assert().success().stdout("Hello, World!\n");
}

#[test]
fn test_hello_command_with_name() {
    let mut cmd = Command::cargo_bin("greet").unwrap();
    cmd.args(["hello", "Alice"])
        .assert()
        .success()
        .stdout("Hello, Alice!\n");
}

#[test]
fn test_hi_command_default() {
    let mut cmd = Command::cargo_bin("greet").unwrap();
    cmd.arg("hi").assert().success().stdout("Hi, Friend!\n");
}

#[test]
fn test_hi_command_with_name() {
    let mut cmd = Command::cargo_bin("greet").unwrap();
    cmd.args(["hi", "Bob"])
        .assert()
        .success()
        .stdout("Hi, Bob!\n");
}

#[test]
fn test_bye_command_default() {
    let mut cmd = Command::cargo_bin("greet").unwrap();
    cmd.arg("bye").assert().success().stdout("Goodbye, Friend!\n");
}

#[test]
fn test_bye_command_with_name() {
    let mut cmd = Command::cargo_bin("greet").unwrap();
    cmd.args(["bye", "Charlie"])
        .assert()
        .success()
        .stdout("Goodbye, Charlie!\n");
}

/// Multi-word names pass through as a single argument
#[test]
fn test_name_with_spaces() {
    let mut cmd = Command::cargo_bin("greet").unwrap();
    cmd.args(["hello", "Rust Developer"])
        .assert()
        .success()
        .stdout("Hello, Rust Developer!\n");
}

/// Empty names are interpolated verbatim
#[test]
fn test_empty_name() {
    let mut cmd = Command::cargo_bin("greet").unwrap();
    cmd.args(["hello", ""])
        .assert()
        .success()
        .stdout("Hello, !\n");
}

/// Quiet mode suppresses diagnostics but never the greeting itself
#[test]
fn test_quiet_flag() {
    let mut cmd = Command::cargo_bin("greet").unwrap();
    cmd.arg("--quiet").assert().success().stdout("Hello, World!\n");
}

/// Test CLI responds to --help and lists all subcommands
#[test]
fn test_cli_help() {
    let mut cmd = Command::cargo_bin("greet").unwrap();
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("hello"))
        .stdout(predicate::str::contains("hi"))
        .stdout(predicate::str::contains("bye"));
}

/// Test short help shows the one-line about text
#[test]
fn test_cli_short_help() {
    let mut cmd = Command::cargo_bin("greet").unwrap();
    cmd.arg("-h")
        .assert()
        .success()
        .stdout(predicate::str::contains("A minimal Rust CLI monorepo template"));
}

/// Test CLI responds to --version
#[test]
fn test_cli_version() {
    let mut cmd = Command::cargo_bin("greet").unwrap();
    cmd.arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("greet"));
}

/// Test the version subcommand
#[test]
fn test_version_command() {
    let mut cmd = Command::cargo_bin("greet").unwrap();
    cmd.arg("version")
        .assert()
        .success()
        .stdout(predicate::str::contains(format!(
            "greet {}",
            env!("CARGO_PKG_VERSION")
        )));
}

#[test]
fn test_version_command_detailed() {
    let mut cmd = Command::cargo_bin("greet").unwrap();
    cmd.args(["version", "--detailed"])
        .assert()
        .success()
        .stdout(predicate::str::contains("License: MIT"));
}

/// Test unknown flag shows clap's usage error
#[test]
fn test_unknown_flag() {
    let mut cmd = Command::cargo_bin("greet").unwrap();
    cmd.arg("--definitely-not-a-flag")
        .assert()
        .failure()
        .stderr(predicate::str::contains("error"));
}
