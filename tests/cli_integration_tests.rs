//! CLI integration tests
//!
//! These tests run the built binary and verify:
//! - filter: accepted names on stdout, names from args or stdin
//! - explain: verdict lines, JSONL records, exit codes
//! - show: chain rendering
//! - error exit codes for bad rules and bad configuration

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn namefilter() -> Command {
    let mut cmd = Command::cargo_bin("namefilter").unwrap();
    cmd.env_remove("RUST_LOG");
    cmd
}

fn write_config(dir: &TempDir) -> std::path::PathBuf {
    let path = dir.path().join("namefilter.toml");
    fs::write(
        &path,
        r#"
[namefilter]
version = "1"

[filters.scan]
syntax = "packages"
rules = "+com.example, -com.example.internal"

[output]
format = "jsonl"
"#,
    )
    .unwrap();
    path
}

// ============================================================================
// FILTER COMMAND TESTS
// ============================================================================

#[test]
fn test_filter_names_from_args() {
    namefilter()
        .args([
            "filter",
            "--rules",
            "+a.*,-a\\.secret.*",
            "a.pub",
            "a.secret.key",
            "b.x",
        ])
        .assert()
        .success()
        .stdout("a.pub\n");
}

#[test]
fn test_filter_names_from_stdin() {
    namefilter()
        .args(["filter", "--rules", "-.*Test"])
        .write_stdin("com.Foo\ncom.FooTest\n\n  com.Bar  \n")
        .assert()
        .success()
        .stdout("com.Foo\ncom.Bar\n");
}

#[test]
fn test_filter_package_syntax() {
    namefilter()
        .args([
            "filter",
            "--syntax",
            "packages",
            "--rules",
            "+com.example",
            "com.example.Foo",
            "com.exampleX.Foo",
        ])
        .assert()
        .success()
        .stdout("com.example.Foo\n");
}

#[test]
fn test_filter_bad_rules_exit_code() {
    namefilter()
        .args(["filter", "--rules", "*bad", "a"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("should start with either + or -"));
}

#[test]
fn test_filter_bad_pattern_exit_code() {
    namefilter()
        .args(["filter", "--rules", "+[unclosed", "a"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("Invalid pattern"));
}

// ============================================================================
// EXPLAIN COMMAND TESTS
// ============================================================================

#[test]
fn test_explain_all_accepted() {
    namefilter()
        .args(["--color", "never", "explain", "--rules", "-x\\..*", "a.b", "c.d"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2 accepted, 0 rejected"));
}

#[test]
fn test_explain_rejected_exit_code() {
    namefilter()
        .args([
            "--color",
            "never",
            "explain",
            "--rules",
            "+a.*,-a\\.secret.*",
            "a.pub",
            "a.secret.key",
        ])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("✗ a.secret.key  (rule 2: -a\\.secret.*)"))
        .stdout(predicate::str::contains("1 accepted, 1 rejected"));
}

#[test]
fn test_explain_jsonl() {
    let output = namefilter()
        .args(["explain", "--rules", "+a.*", "-f", "jsonl", "a.b", "b.a"])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    let stdout = String::from_utf8(output.stdout).unwrap();
    let records: Vec<serde_json::Value> = stdout
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect();

    assert_eq!(records.len(), 3);
    assert_eq!(records[0]["name"], "a.b");
    assert_eq!(records[0]["accepted"], true);
    assert_eq!(records[1]["name"], "b.a");
    assert_eq!(records[1]["accepted"], false);
    assert_eq!(records[2]["type"], "summary");
}

// ============================================================================
// SHOW COMMAND TESTS
// ============================================================================

#[test]
fn test_show_human() {
    namefilter()
        .args(["--color", "never", "show", "--rules", "-x.*, +y.*"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Rules (2, default: accept):"))
        .stdout(predicate::str::contains("1. -x.*"))
        .stdout(predicate::str::contains("2. +y.*"));
}

#[test]
fn test_show_empty_rules() {
    namefilter()
        .args(["show", "--rules", ""])
        .assert()
        .success()
        .stdout(predicate::str::contains("every name is accepted"));
}

// ============================================================================
// CONFIGURATION TESTS
// ============================================================================

#[test]
fn test_named_filter_uses_config_output_format() {
    let dir = TempDir::new().unwrap();
    let config = write_config(&dir);

    namefilter()
        .args(["explain", "--filter", "scan", "--config"])
        .arg(&config)
        .args(["com.example.Api", "com.example.internal.Impl"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("\"type\":\"decision\""))
        .stdout(predicate::str::contains("\"type\":\"summary\""));
}

#[test]
fn test_named_filter_filter_command() {
    let dir = TempDir::new().unwrap();
    let config = write_config(&dir);

    namefilter()
        .args(["filter", "--filter", "scan", "--config"])
        .arg(&config)
        .write_stdin("com.example.Api\ncom.example.internal.Impl\norg.Other\n")
        .assert()
        .success()
        .stdout("com.example.Api\n");
}

#[test]
fn test_unknown_filter() {
    let dir = TempDir::new().unwrap();
    let config = write_config(&dir);

    namefilter()
        .args(["show", "--filter", "missing", "--config"])
        .arg(&config)
        .assert()
        .code(2)
        .stderr(predicate::str::contains("No filter named 'missing'"));
}

#[test]
fn test_missing_config_file() {
    let dir = TempDir::new().unwrap();

    namefilter()
        .args(["show", "--filter", "scan", "--config"])
        .arg(dir.path().join("absent.toml"))
        .assert()
        .code(2)
        .stderr(predicate::str::contains("not found"));
}

#[test]
fn test_malformed_config_exit_code() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("namefilter.toml");
    fs::write(&path, "[namefilter\nversion = \"1\"\n").unwrap();

    namefilter()
        .args(["show", "--filter", "scan", "--config"])
        .arg(&path)
        .assert()
        .code(3)
        .stderr(predicate::str::contains("Configuration error"));
}

#[test]
fn test_unsupported_config_version_exit_code() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("namefilter.toml");
    fs::write(
        &path,
        r#"
[namefilter]
version = "2"

[filters.scan]
rules = "+a.*"
"#,
    )
    .unwrap();

    namefilter()
        .args(["show", "--filter", "scan", "--config"])
        .arg(&path)
        .assert()
        .code(3)
        .stderr(predicate::str::contains("Unsupported configuration version '2'"));
}

#[test]
fn test_uncompilable_config_filter_exit_code() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("namefilter.toml");
    fs::write(
        &path,
        r#"
[namefilter]
version = "1"

[filters.scan]
rules = "+[unclosed"
"#,
    )
    .unwrap();

    namefilter()
        .args(["show", "--filter", "scan", "--config"])
        .arg(&path)
        .assert()
        .code(3);
}

#[test]
fn test_missing_rule_source_is_usage_error() {
    namefilter().args(["filter", "a.b"]).assert().failure();
}
