//! Content-based file type identification with masquerade risk scoring.
//!
//! A file is matched against an ordered magic-number database; when no
//! signature fits, a text heuristic and shebang check take over. The
//! detected type is then compared with the file's extension to produce a
//! risk verdict.

/// Core data types module
pub mod core;
pub mod error;
pub mod logging;
pub mod triage;

pub use crate::core::triage::{
    AnalysisReport, DetectionResult, Evidence, RiskLevel, RiskVerdict, SignatureDatabase,
    SignatureRecord,
};
pub use crate::error::{FafnirError, Result};
