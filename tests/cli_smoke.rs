#![allow(clippy::unwrap_used)]
//! CLI smoke tests to verify basic command functionality.
//!
//! These run the binary against a throwaway config directory and only
//! exercise paths that stop before any request reaches the API.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

#[allow(deprecated)]
fn deeplcmd(config_home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("deeplcmd").unwrap();
    cmd.env("XDG_CONFIG_HOME", config_home.path())
        .env("NO_COLOR", "1")
        .env_remove("DEEPL_SERVER_URL")
        .env_remove("DEEPLCMD_LOG");
    cmd
}

#[test]
fn test_help_displays_usage() {
    let home = TempDir::new().unwrap();
    deeplcmd(&home)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("DeepL"))
        .stdout(predicate::str::contains("--key"))
        .stdout(predicate::str::contains("--keyfile"))
        .stdout(predicate::str::contains("login"))
        .stdout(predicate::str::contains("text"))
        .stdout(predicate::str::contains("file"));
}

#[test]
fn test_version_displays_version() {
    let home = TempDir::new().unwrap();
    deeplcmd(&home)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_text_help() {
    let home = TempDir::new().unwrap();
    deeplcmd(&home)
        .args(["text", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--target-language"));
}

#[test]
fn test_languages_list() {
    let home = TempDir::new().unwrap();
    deeplcmd(&home)
        .arg("languages")
        .assert()
        .success()
        .stdout(predicate::str::contains("DE"))
        .stdout(predicate::str::contains("EN-GB"))
        .stdout(predicate::str::contains("Norwegian Bokmål"));
}

#[test]
fn test_unsupported_language_prints_table() {
    let home = TempDir::new().unwrap();
    deeplcmd(&home)
        .args(["--key", "fake-key", "text", "--target-language", "XX", "Hello"])
        .assert()
        .failure()
        .code(exitcode::USAGE)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Target language XX is not recognised"))
        .stderr(predicate::str::contains("PT-BR"));
}

#[test]
fn test_missing_key() {
    let home = TempDir::new().unwrap();
    deeplcmd(&home)
        .args(["text", "--target-language", "RU", "Hello"])
        .assert()
        .failure()
        .code(exitcode::CONFIG)
        .stderr(predicate::str::contains("key not provided"));
}

#[test]
fn test_unreadable_keyfile() {
    let home = TempDir::new().unwrap();
    let missing = home.path().join("missing.key");
    deeplcmd(&home)
        .arg("--keyfile")
        .arg(&missing)
        .args(["text", "-t", "RU", "Hello"])
        .assert()
        .failure()
        .code(exitcode::NOINPUT)
        .stderr(predicate::str::contains("Failed to read key file"));
}

#[test]
fn test_login_saves_key() {
    let home = TempDir::new().unwrap();
    deeplcmd(&home)
        .args(["login", "--key", "abc123"])
        .assert()
        .success();

    let saved = fs::read_to_string(home.path().join("deeplcmd").join("credentials")).unwrap();
    assert_eq!(saved, "APIKEY=abc123\n");
}

#[test]
fn test_saved_key_is_picked_up() {
    let home = TempDir::new().unwrap();
    deeplcmd(&home)
        .args(["login", "--key", "abc123"])
        .assert()
        .success();

    // With a saved key the missing-key error no longer fires; the bad
    // language code stops the command before any request.
    deeplcmd(&home)
        .args(["text", "-t", "XX", "Hello"])
        .assert()
        .failure()
        .code(exitcode::USAGE);
}

#[test]
fn test_file_input_must_exist() {
    let home = TempDir::new().unwrap();
    let input = home.path().join("in.txt");
    let output = home.path().join("out.txt");
    deeplcmd(&home)
        .args(["--key", "fake-key", "file", "-t", "DE"])
        .arg(&input)
        .arg(&output)
        .assert()
        .failure()
        .code(exitcode::NOINPUT)
        .stderr(predicate::str::contains("File not found"));

    assert!(!output.exists());
}

#[test]
fn test_corrupt_credential_file_does_not_block_commands() {
    let home = TempDir::new().unwrap();
    let credentials = home.path().join("deeplcmd").join("credentials");
    fs::create_dir_all(credentials.parent().unwrap()).unwrap();
    fs::write(&credentials, [0xff, 0xfe, b'\n']).unwrap();

    deeplcmd(&home)
        .args(["--key", "explicit-key", "text", "-t", "XX", "Hello"])
        .assert()
        .failure()
        .code(exitcode::USAGE);

    deeplcmd(&home).arg("languages").assert().success();

    deeplcmd(&home)
        .args(["login", "--key", "fresh"])
        .assert()
        .success();
    assert_eq!(fs::read_to_string(&credentials).unwrap(), "APIKEY=fresh\n");
}
