//! End-to-end detection and risk properties.

use fafnir::core::triage::{Evidence, RiskLevel};
use fafnir::triage::api::{analyze_path, detect_file_type};
use fafnir::triage::config::TriageConfig;
use fafnir::triage::score::{REASON_MASQUERADE, REASON_SCRIPT, REASON_TEXT};

use crate::common::shipped_db;
use crate::common::test_data::*;
use crate::common::test_utils::fixture;

#[test]
fn test_zero_length_file_is_unknown_medium() {
    let fx = fixture("empty.png", b"");
    let report = analyze_path(&fx.path, &shipped_db(), &TriageConfig::default()).unwrap();
    assert_eq!(report.detection.detected_type, "UNKNOWN");
    assert_eq!(report.detection.evidence, Evidence::None);
    assert_eq!(report.verdict.level, RiskLevel::Medium);
}

#[test]
fn test_bom_text() {
    let mut content = vec![0xEF, 0xBB, 0xBF];
    content.extend_from_slice(PLAIN_TEXT);
    let fx = fixture("notes.txt", &content);
    let d = detect_file_type(&fx.path, &shipped_db(), &TriageConfig::default());
    assert_eq!(d.detected_type, "UTF-8 TEXT (BOM)");
    assert_eq!(d.evidence, Evidence::Heuristic);
}

#[test]
fn test_shell_script_is_high_risk() {
    let fx = fixture("install.sh", SH_SCRIPT);
    let report = analyze_path(&fx.path, &shipped_db(), &TriageConfig::default()).unwrap();
    assert_eq!(report.extension, "SH");
    assert_eq!(report.detection.detected_type, "SCRIPT FILE (#!/bin/sh)");
    assert_eq!(report.verdict.level, RiskLevel::High);
    assert_eq!(report.verdict.reason, REASON_SCRIPT);

    // extension does not matter for scripts
    let fx = fixture("install.txt", SH_SCRIPT);
    let report = analyze_path(&fx.path, &shipped_db(), &TriageConfig::default()).unwrap();
    assert_eq!(report.verdict.reason, REASON_SCRIPT);
}

#[test]
fn test_plain_text_extension_decides_risk() {
    let txt = fixture("notes.txt", PLAIN_TEXT);
    let report = analyze_path(&txt.path, &shipped_db(), &TriageConfig::default()).unwrap();
    assert_eq!(report.detection.detected_type, "ASCII / UTF-8 TEXT");
    assert_eq!(report.verdict.level, RiskLevel::Low);

    let exe = fixture("notes.exe", PLAIN_TEXT);
    let report = analyze_path(&exe.path, &shipped_db(), &TriageConfig::default()).unwrap();
    assert_eq!(report.detection.detected_type, "ASCII / UTF-8 TEXT");
    assert_eq!(report.verdict.level, RiskLevel::High);
    assert_eq!(report.verdict.reason, REASON_TEXT);
}

#[test]
fn test_signature_extension_equality() {
    let ok = fixture("invoice.pdf", PDF_HEADER);
    let report = analyze_path(&ok.path, &shipped_db(), &TriageConfig::default()).unwrap();
    assert_eq!(report.detection.detected_type, "PDF");
    assert_eq!(report.verdict.level, RiskLevel::Low);

    let disguised = fixture("invoice.pdf", ELF_HEADER);
    let report = analyze_path(&disguised.path, &shipped_db(), &TriageConfig::default()).unwrap();
    assert_eq!(report.detection.detected_type, "ELF");
    assert_eq!(report.verdict.level, RiskLevel::High);
    assert_eq!(report.verdict.reason, REASON_MASQUERADE);

    // lowercase extensions are normalised before comparison
    let png = fixture("logo.png", PNG_HEADER);
    let report = analyze_path(&png.path, &shipped_db(), &TriageConfig::default()).unwrap();
    assert_eq!(report.extension, "PNG");
    assert_eq!(report.verdict.level, RiskLevel::Low);
}

#[test]
fn test_binary_noise_is_unknown() {
    let noise: Vec<u8> = (0u8..32).cycle().take(400).collect();
    let fx = fixture("blob.dat", &noise);
    let report = analyze_path(&fx.path, &shipped_db(), &TriageConfig::default()).unwrap();
    assert_eq!(report.detection.detected_type, "UNKNOWN");
    assert_eq!(report.verdict.level, RiskLevel::Medium);
}

#[test]
fn test_detection_is_idempotent() {
    let db = shipped_db();
    let cfg = TriageConfig::default();
    for (name, content) in [
        ("a.sh", SH_SCRIPT),
        ("b.pdf", PDF_HEADER),
        ("c.txt", PLAIN_TEXT),
        ("d.bin", &b""[..]),
    ] {
        let fx = fixture(name, content);
        let first = analyze_path(&fx.path, &db, &cfg).unwrap();
        let second = analyze_path(&fx.path, &db, &cfg).unwrap();
        assert_eq!(first, second, "{} changed between runs", name);
    }
}
