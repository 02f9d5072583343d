//! Core triage data types organized by submodule.

pub mod detection;
pub mod signature;
pub mod verdict;

// Re-exports for convenient access under crate::core::triage::*
pub use detection::{DetectionResult, Evidence, SCRIPT_PREFIX, UNKNOWN_TYPE};
pub use signature::{SignatureDatabase, SignatureRecord};
pub use verdict::{AnalysisReport, RiskLevel, RiskVerdict};
