//! Detection results produced by the matcher and heuristic stages.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Label reported when neither a signature nor the text heuristic fires.
pub const UNKNOWN_TYPE: &str = "UNKNOWN";

/// Prefix of the label reported for shebang scripts.
pub const SCRIPT_PREFIX: &str = "SCRIPT FILE";

/// How a detection was reached.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Evidence {
    /// A database record matched at its offset.
    Signature {
        #[serde(with = "hex::serde")]
        pattern: Vec<u8>,
        offset: u64,
    },
    /// Text or script heuristic fired.
    Heuristic,
    /// Nothing matched.
    None,
}

/// Outcome of running the detection pipeline on one file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DetectionResult {
    pub detected_type: String,
    pub evidence: Evidence,
}

impl DetectionResult {
    pub fn signature(type_name: impl Into<String>, pattern: Vec<u8>, offset: u64) -> Self {
        Self {
            detected_type: type_name.into(),
            evidence: Evidence::Signature { pattern, offset },
        }
    }

    pub fn heuristic(label: impl Into<String>) -> Self {
        Self {
            detected_type: label.into(),
            evidence: Evidence::Heuristic,
        }
    }

    /// Script detection, labelled with its interpreter directive.
    pub fn script(directive: &str) -> Self {
        Self::heuristic(format!("{} ({})", SCRIPT_PREFIX, directive))
    }

    pub fn unknown() -> Self {
        Self {
            detected_type: UNKNOWN_TYPE.to_string(),
            evidence: Evidence::None,
        }
    }

    pub fn matched_pattern(&self) -> Option<&[u8]> {
        match &self.evidence {
            Evidence::Signature { pattern, .. } => Some(pattern),
            _ => None,
        }
    }

    pub fn matched_offset(&self) -> Option<u64> {
        match &self.evidence {
            Evidence::Signature { offset, .. } => Some(*offset),
            _ => None,
        }
    }

    pub fn is_signature_match(&self) -> bool {
        matches!(self.evidence, Evidence::Signature { .. })
    }
}

impl fmt::Display for DetectionResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.detected_type)
    }
}
