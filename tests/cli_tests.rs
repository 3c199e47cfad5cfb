//! CLI tests running the bevscope binary

#![allow(deprecated)] // Command::cargo_bin deprecation - no stable replacement yet

mod common;

use assert_cmd::Command;
use common::write_projection_workbook;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn bevscope() -> Command {
    Command::cargo_bin("bevscope").unwrap()
}

// ═══════════════════════════════════════════════════════════════════════════
// ARGUMENT HANDLING
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn test_no_arguments_prints_usage() {
    bevscope()
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn test_report_requires_question() {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("projection.xlsx");
    write_projection_workbook(&input);

    bevscope()
        .arg("report")
        .arg(&input)
        .assert()
        .failure()
        .stderr(predicate::str::contains("--question"));
}

#[test]
fn test_report_rejects_question_out_of_range() {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("projection.xlsx");
    write_projection_workbook(&input);

    bevscope()
        .args(["report", input.to_str().unwrap(), "--question", "7"])
        .assert()
        .failure();
}

// ═══════════════════════════════════════════════════════════════════════════
// MALFORMED INPUT
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn test_report_missing_file_fails_with_diagnostic() {
    bevscope()
        .args(["report", "nonexistent.xlsx", "--question", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Format"));
}

#[test]
fn test_report_garbage_file_fails_with_diagnostic() {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("garbage.xlsx");
    fs::write(&input, b"not a spreadsheet").unwrap();

    bevscope()
        .args(["report", input.to_str().unwrap(), "--question", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Format"));
}

// ═══════════════════════════════════════════════════════════════════════════
// REPORT COMMAND
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn test_report_question_two_prints_ranking() {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("projection.xlsx");
    write_projection_workbook(&input);

    bevscope()
        .args(["report", input.to_str().unwrap(), "--question", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("G2L2W1"))
        .stdout(predicate::str::contains("Thüringen"))
        .stdout(predicate::str::contains("Report complete"));
}

#[test]
fn test_report_question_five_shows_groups() {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("projection.xlsx");
    write_projection_workbook(&input);

    bevscope()
        .args(["report", input.to_str().unwrap(), "--question", "5", "--verbose"])
        .assert()
        .success()
        .stdout(predicate::str::contains("East"))
        .stdout(predicate::str::contains("West"))
        .stdout(predicate::str::contains("Found 6 scenarios"));
}

#[test]
fn test_report_exports_yaml() {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("projection.xlsx");
    let output = temp_dir.path().join("report.yaml");
    write_projection_workbook(&input);

    bevscope()
        .args([
            "report",
            input.to_str().unwrap(),
            "--question",
            "2",
            "--output",
            output.to_str().unwrap(),
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Report exported"));

    let yaml = fs::read_to_string(&output).unwrap();
    assert!(yaml.contains("kind: growth"));
    assert!(yaml.contains("G2L2W1"));
}

#[test]
fn test_report_exports_xlsx() {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("projection.xlsx");
    let output = temp_dir.path().join("report.xlsx");
    write_projection_workbook(&input);

    bevscope()
        .args([
            "report",
            input.to_str().unwrap(),
            "--question",
            "4",
            "--output",
            output.to_str().unwrap(),
        ])
        .assert()
        .success();

    assert!(output.exists());
}

#[test]
fn test_report_rejects_unsupported_output_format() {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("projection.xlsx");
    let output = temp_dir.path().join("report.txt");
    write_projection_workbook(&input);

    bevscope()
        .args([
            "report",
            input.to_str().unwrap(),
            "--question",
            "2",
            "--output",
            output.to_str().unwrap(),
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unsupported output format"));
}

// ═══════════════════════════════════════════════════════════════════════════
// SCENARIOS COMMAND
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn test_scenarios_lists_codes_and_assumptions() {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("projection.xlsx");
    write_projection_workbook(&input);

    bevscope()
        .args(["scenarios", input.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("G1L1W1"))
        .stdout(predicate::str::contains("16 states, 2022-2070"))
        .stdout(predicate::str::contains("Birth rate 1.44"))
        .stdout(predicate::str::contains("6 scenarios found"));
}

// ═══════════════════════════════════════════════════════════════════════════
// SPLIT COMMAND
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn test_split_writes_output_workbook() {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("projection.xlsx");
    let output = temp_dir.path().join("split.xlsx");
    write_projection_workbook(&input);

    bevscope()
        .args([
            "split",
            input.to_str().unwrap(),
            output.to_str().unwrap(),
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Split workbook written"));

    assert!(output.exists());
}

#[test]
fn test_split_missing_input_fails() {
    let temp_dir = TempDir::new().unwrap();
    let output = temp_dir.path().join("split.xlsx");

    bevscope()
        .args(["split", "nonexistent.xlsx", output.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Format"));
}
