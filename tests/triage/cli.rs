//! Command-line surface: exit codes and report layout.

use std::process::{Command, Output};

use crate::common::shipped_db_path;
use crate::common::test_data::{PLAIN_TEXT, SH_SCRIPT};
use crate::common::test_utils::fixture;

fn run_cli(args: &[String]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_fafnir"))
        .args(args)
        .output()
        .expect("run fafnir")
}

fn stdout(out: &Output) -> String {
    String::from_utf8_lossy(&out.stdout).into_owned()
}

#[test]
fn test_no_arguments_prints_usage() {
    let out = run_cli(&[]);
    assert_eq!(out.status.code(), Some(1));
    assert!(stdout(&out).contains("Usage"));
    assert!(String::from_utf8_lossy(&out.stderr).contains("[!] Usage error:"));
}

#[test]
fn test_too_many_arguments_prints_usage() {
    let out = run_cli(&["a.txt".to_string(), "b.txt".to_string()]);
    assert_eq!(out.status.code(), Some(1));
    assert!(stdout(&out).contains("Usage"));
}

#[test]
fn test_missing_file() {
    let db = shipped_db_path();
    let out = run_cli(&[
        "--db".to_string(),
        db.display().to_string(),
        "/no/such/file.bin".to_string(),
    ]);
    assert_eq!(out.status.code(), Some(1));
    assert!(stdout(&out).contains("[!] File not found"));
}

#[test]
fn test_bad_database_is_fatal() {
    let target = fixture("notes.txt", PLAIN_TEXT);
    let bad_db = fixture("magic_number.json", br#"{"X": {"magic": "ABC", "offset": 0}}"#);
    let out = run_cli(&[
        "--db".to_string(),
        bad_db.path.display().to_string(),
        target.path.display().to_string(),
    ]);
    assert_eq!(out.status.code(), Some(2));
    assert!(!stdout(&out).contains("Analysis Report"));
}

#[test]
fn test_text_report() {
    let target = fixture("deploy.sh", SH_SCRIPT);
    let db = shipped_db_path();
    let out = run_cli(&[
        "--db".to_string(),
        db.display().to_string(),
        target.path.display().to_string(),
    ]);
    assert_eq!(out.status.code(), Some(0));
    let text = stdout(&out);
    // one blank line on each side of the report
    assert!(text.starts_with("\n--- File Type Analysis Report ---\n"));
    assert!(text.ends_with("--------------------------------\n\n"));
    assert!(text.contains("File Name     : deploy.sh\n"));
    assert!(text.contains("Extension     : SH\n"));
    assert!(text.contains("Magic Number  : Text-based detection (heuristic)\n"));
    assert!(text.contains("Detected Type : SCRIPT FILE (#!/bin/sh)\n"));
    assert!(text.contains("Risk Level    : HIGH\n"));
    assert!(text.contains("Reason        : Executable script masquerading detected\n"));
}

#[test]
fn test_json_report() {
    let target = fixture("notes.txt", PLAIN_TEXT);
    let db = shipped_db_path();
    let out = run_cli(&[
        "--json".to_string(),
        "--db".to_string(),
        db.display().to_string(),
        target.path.display().to_string(),
    ]);
    assert_eq!(out.status.code(), Some(0));
    let report = fafnir::core::triage::AnalysisReport::from_json_str(&stdout(&out)).unwrap();
    assert_eq!(report.detection.detected_type, "ASCII / UTF-8 TEXT");
    assert_eq!(report.verdict.level, fafnir::core::triage::RiskLevel::Low);
}
