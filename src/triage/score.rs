//! Risk scoring: extension versus detected content type.
//!
//! Rules are evaluated in order and the first match decides. Rule 4 compares
//! the extension with the detected label verbatim, so it only ever agrees for
//! signature detections whose type name equals the extension.

use crate::core::triage::{RiskLevel, RiskVerdict, SCRIPT_PREFIX, UNKNOWN_TYPE};
use crate::triage::config::RiskConfig;
use std::path::Path;
use tracing::debug;

pub const REASON_UNKNOWN: &str = "Unknown file signature";
pub const REASON_SCRIPT: &str = "Executable script masquerading detected";
pub const REASON_TEXT: &str = "Text-based file masquerading detected";
pub const REASON_MASQUERADE: &str = "File masquerading detected";
pub const REASON_LEGITIMATE: &str = "File appears legitimate";

/// Uppercased text after the last `.` of the file name, or empty.
///
/// Names whose only dot is leading (`.bashrc`) have no extension.
pub fn extension_of(path: &Path) -> String {
    path.extension()
        .map(|ext| ext.to_string_lossy().to_uppercase())
        .unwrap_or_default()
}

/// Rule engine mapping (extension, detected type) to a verdict.
#[derive(Debug, Clone, Default)]
pub struct RiskClassifier {
    config: RiskConfig,
}

impl RiskClassifier {
    pub fn new(config: RiskConfig) -> Self {
        Self { config }
    }

    fn is_text_extension(&self, extension: &str) -> bool {
        self.config.text_extensions.iter().any(|e| e == extension)
    }

    pub fn assess(&self, extension: &str, detected_type: &str) -> RiskVerdict {
        let verdict = if detected_type == UNKNOWN_TYPE {
            RiskVerdict::new(RiskLevel::Medium, REASON_UNKNOWN)
        } else if detected_type.starts_with(SCRIPT_PREFIX) {
            RiskVerdict::new(RiskLevel::High, REASON_SCRIPT)
        } else if detected_type.contains("TEXT") && !self.is_text_extension(extension) {
            RiskVerdict::new(RiskLevel::High, REASON_TEXT)
        } else if extension != detected_type && !detected_type.starts_with("ASCII") {
            RiskVerdict::new(RiskLevel::High, REASON_MASQUERADE)
        } else {
            RiskVerdict::new(RiskLevel::Low, REASON_LEGITIMATE)
        };
        debug!(
            "Risk for extension {:?} / type {:?}: {} ({})",
            extension, detected_type, verdict.level, verdict.reason
        );
        verdict
    }
}

/// Assess risk with the default text-extension whitelist.
pub fn assess_risk(extension: &str, detected_type: &str) -> RiskVerdict {
    RiskClassifier::default().assess(extension, detected_type)
}
