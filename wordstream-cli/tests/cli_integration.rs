//! Integration tests for the wordstream CLI

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// Helper to get the path to a test fixture
fn fixture_path(name: &str) -> String {
    format!("tests/fixtures/{}", name)
}

#[test]
fn test_process_text_report() {
    let mut cmd = Command::cargo_bin("wordstream").unwrap();
    cmd.arg("process")
        .arg("-i")
        .arg(fixture_path("sample.txt"))
        .arg("-n")
        .arg("3");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Words:          24"))
        .stdout(predicate::str::contains("most_frequent (top 3):"))
        .stdout(predicate::str::contains("1. was (4)"))
        .stdout(predicate::str::contains("1. foolishness (11)"));
}

#[test]
fn test_json_output() {
    let mut cmd = Command::cargo_bin("wordstream").unwrap();
    let output = cmd
        .arg("process")
        .arg("-i")
        .arg(fixture_path("sample.txt"))
        .arg("-f")
        .arg("json")
        .output()
        .unwrap();

    assert!(output.status.success());
    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["num_words"], 24);
    assert_eq!(report["distinct_words"], 10);
    let names: Vec<_> = report["rankings"]
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["name"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(names, vec!["most_frequent", "longest", "shortest"]);
}

#[test]
fn test_markdown_output() {
    let mut cmd = Command::cargo_bin("wordstream").unwrap();
    cmd.arg("process")
        .arg("-i")
        .arg(fixture_path("sample.txt"))
        .arg("-f")
        .arg("markdown");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("# Word statistics"))
        .stdout(predicate::str::contains("| Words | 24 |"))
        .stdout(predicate::str::contains("## longest"));
}

#[test]
fn test_stdin_input() {
    let mut cmd = Command::cargo_bin("wordstream").unwrap();
    cmd.arg("process")
        .arg("-i")
        .arg("-")
        .arg("--case-sensitive")
        .write_stdin("Rust rust RUST rust");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Words:          4"))
        .stdout(predicate::str::contains("1. rust (2)"));
}

#[test]
fn test_glob_pattern_accumulates() {
    let mut cmd = Command::cargo_bin("wordstream").unwrap();
    cmd.arg("process")
        .arg("-i")
        .arg(fixture_path("*.txt"))
        .arg("--longest")
        .arg("0")
        .arg("--shortest")
        .arg("0");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Words:          26"))
        .stdout(predicate::str::contains("longest").not())
        .stdout(predicate::str::contains("1. the (5)"));
}

#[test]
fn test_output_to_file() {
    let temp_dir = TempDir::new().unwrap();
    let output_file = temp_dir.path().join("report.txt");

    let mut cmd = Command::cargo_bin("wordstream").unwrap();
    cmd.arg("process")
        .arg("-i")
        .arg(fixture_path("sample.txt"))
        .arg("-o")
        .arg(&output_file);

    cmd.assert().success().stdout(predicate::str::is_empty());

    let content = fs::read_to_string(&output_file).unwrap();
    assert!(content.contains("Distinct words: 10"));
}

#[test]
fn test_config_file() {
    let temp_dir = TempDir::new().unwrap();
    let config = temp_dir.path().join("wordstream.toml");
    fs::write(
        &config,
        "[stats]\nmost_frequent = 1\nlongest = 0\nshortest = 0\ntop_chars = 0\n\n[output]\ndefault_format = \"markdown\"\n",
    )
    .unwrap();

    let mut cmd = Command::cargo_bin("wordstream").unwrap();
    cmd.arg("process")
        .arg("-i")
        .arg(fixture_path("sample.txt"))
        .arg("-c")
        .arg(&config);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("## most_frequent"))
        .stdout(predicate::str::contains("## longest").not())
        .stdout(predicate::str::contains("Top characters").not());
}

#[test]
fn test_generate_config_round_trip() {
    let temp_dir = TempDir::new().unwrap();
    let config = temp_dir.path().join("wordstream.toml");

    Command::cargo_bin("wordstream")
        .unwrap()
        .arg("generate-config")
        .arg("-o")
        .arg(&config)
        .assert()
        .success()
        .stdout(predicate::str::contains("Configuration template written"));

    Command::cargo_bin("wordstream")
        .unwrap()
        .arg("process")
        .arg("-i")
        .arg(fixture_path("sample.txt"))
        .arg("-c")
        .arg(&config)
        .assert()
        .success()
        .stdout(predicate::str::contains("Words:          24"));
}

#[test]
fn test_invalid_file() {
    let mut cmd = Command::cargo_bin("wordstream").unwrap();
    cmd.arg("process").arg("-i").arg("nonexistent.txt");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("no input matches 'nonexistent.txt'"));
}

#[test]
fn test_unknown_encoding() {
    let mut cmd = Command::cargo_bin("wordstream").unwrap();
    cmd.arg("process")
        .arg("-i")
        .arg(fixture_path("sample.txt"))
        .arg("--encoding")
        .arg("no-such-encoding");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("invalid [stream] settings: unsupported encoding 'no-such-encoding'"));
}

#[test]
fn test_help_command() {
    let mut cmd = Command::cargo_bin("wordstream").unwrap();
    cmd.arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("word statistics"));
}

#[test]
fn test_list_stats() {
    let mut cmd = Command::cargo_bin("wordstream").unwrap();
    cmd.arg("list").arg("stats");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("most_frequent"))
        .stdout(predicate::str::contains("shortest"));
}
