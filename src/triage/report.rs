//! Human-readable report rendering.

use crate::core::triage::{AnalysisReport, Evidence};
use std::fmt;

pub const HEADER: &str = "--- File Type Analysis Report ---";
pub const FOOTER: &str = "--------------------------------";

/// Format bytes as `"XX XX XX"`.
pub fn spaced_hex(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|b| format!("{:02X}", b))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Value of the `Magic Number` line.
pub fn magic_line(evidence: &Evidence) -> String {
    match evidence {
        Evidence::Signature { pattern, offset } => {
            format!("{} (offset {})", spaced_hex(pattern), offset)
        }
        Evidence::Heuristic => "Text-based detection (heuristic)".to_string(),
        Evidence::None => "Not found".to_string(),
    }
}

/// Fixed-layout text rendering of an [`AnalysisReport`].
pub struct TextReport<'a>(pub &'a AnalysisReport);

impl fmt::Display for TextReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let r = self.0;
        writeln!(f, "{}", HEADER)?;
        writeln!(f, "File Name     : {}", r.file_name)?;
        writeln!(f, "Extension     : {}", r.extension)?;
        writeln!(f, "Magic Number  : {}", magic_line(&r.detection.evidence))?;
        writeln!(f, "Detected Type : {}", r.detection.detected_type)?;
        writeln!(f, "Risk Level    : {}", r.verdict.level)?;
        writeln!(f, "Reason        : {}", r.verdict.reason)?;
        write!(f, "{}", FOOTER)
    }
}
