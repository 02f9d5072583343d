//! Triage runtime: load signatures, detect a file's type, score the risk.

pub mod api;
pub mod config;
pub mod heuristics;
pub mod io;
pub mod report;
pub mod score;
pub mod signatures;
pub mod sniffers;

// Re-export key types from core for convenience
pub use crate::core::triage::{
    AnalysisReport, DetectionResult, Evidence, RiskLevel, RiskVerdict, SignatureDatabase,
    SignatureRecord,
};
pub use api::{analyze_path, detect_file_type};
pub use score::{assess_risk, extension_of, RiskClassifier};
pub use sniffers::{Probe, SignatureMatcher};
