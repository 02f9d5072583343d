//! Detection pipeline entry points.
//!
//! Signature evidence outranks heuristic evidence, and a shebang outranks a
//! plain text label.

use crate::core::triage::{AnalysisReport, DetectionResult, SignatureDatabase};
use crate::error::{FafnirError, Result};
use crate::span_trace;
use crate::triage::config::TriageConfig;
use crate::triage::heuristics::{classify_as_text, detect_shebang, TextClass};
use crate::triage::io::IOUtils;
use crate::triage::score::{extension_of, RiskClassifier};
use crate::triage::sniffers::SignatureMatcher;
use std::path::Path;
use tracing::{debug, info};

/// Run the matcher, then the text and shebang heuristics on a total miss.
pub fn detect_file_type(
    path: &Path,
    db: &SignatureDatabase,
    cfg: &TriageConfig,
) -> DetectionResult {
    if let Some(hit) = SignatureMatcher::match_file(path, db) {
        return hit;
    }

    match classify_as_text(path, &cfg.io, &cfg.heuristics) {
        TextClass::Text { label } => {
            if let Some(directive) = detect_shebang(path, &cfg.io) {
                debug!("Shebang {:?} found", directive);
                DetectionResult::script(&directive)
            } else {
                DetectionResult::heuristic(label)
            }
        }
        TextClass::NotText => DetectionResult::unknown(),
    }
}

/// Analyse one file end to end.
///
/// Fails only when `path` is not an existing regular file.
pub fn analyze_path<P: AsRef<Path>>(
    path: P,
    db: &SignatureDatabase,
    cfg: &TriageConfig,
) -> Result<AnalysisReport> {
    let path = path.as_ref();
    let span = span_trace!("analyze", path = %path.display());
    let _guard = span.enter();

    if !IOUtils::is_regular_file(path) {
        return Err(FafnirError::NotFound(path.to_path_buf()));
    }

    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let extension = extension_of(path);
    let detection = detect_file_type(path, db, cfg);
    let verdict =
        RiskClassifier::new(cfg.risk.clone()).assess(&extension, &detection.detected_type);

    info!(
        file = %file_name,
        detected = %detection.detected_type,
        risk = %verdict.level,
        "Analysis complete"
    );

    Ok(AnalysisReport {
        file_name,
        extension,
        detection,
        verdict,
    })
}
