//! Heuristics for classification when no signature matches.

use crate::triage::config::{HeuristicsConfig, IOConfig};
use crate::triage::io::IOUtils;
use std::path::Path;
use tracing::{debug, warn};

/// Printable-text detection over a leading sample.
pub mod text {
    use super::*;

    /// UTF-8 byte-order mark.
    pub const UTF8_BOM: &[u8] = &[0xEF, 0xBB, 0xBF];

    /// Outcome of the text heuristic.
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub enum TextClass {
        Text { label: String },
        NotText,
    }

    impl TextClass {
        pub fn is_text(&self) -> bool {
            matches!(self, TextClass::Text { .. })
        }

        pub fn label(&self) -> Option<&str> {
            match self {
                TextClass::Text { label } => Some(label),
                TextClass::NotText => None,
            }
        }
    }

    /// BEL, BS, TAB, LF, FF, CR, ESC and everything from 0x20 up.
    pub fn is_text_byte(b: u8) -> bool {
        matches!(b, 7 | 8 | 9 | 10 | 12 | 13 | 27) || b >= 0x20
    }

    /// Fraction of bytes outside the printable set; 0.0 for an empty sample.
    pub fn non_text_ratio(sample: &[u8]) -> f64 {
        if sample.is_empty() {
            return 0.0;
        }
        let non_text = sample.iter().filter(|&&b| !is_text_byte(b)).count();
        non_text as f64 / sample.len() as f64
    }

    /// Classify an in-memory sample.
    pub fn classify_bytes(sample: &[u8], cfg: &HeuristicsConfig) -> TextClass {
        if sample.is_empty() {
            return TextClass::NotText;
        }
        if sample.starts_with(UTF8_BOM) {
            return TextClass::Text {
                label: cfg.bom_label.clone(),
            };
        }
        let ratio = non_text_ratio(sample);
        debug!("Non-text ratio {:.4} over {} bytes", ratio, sample.len());
        if ratio < cfg.max_non_text_ratio {
            TextClass::Text {
                label: cfg.text_label.clone(),
            }
        } else {
            TextClass::NotText
        }
    }

    /// Sample the start of a file and classify it; read failures are not text.
    pub fn classify_as_text(path: &Path, io: &IOConfig, cfg: &HeuristicsConfig) -> TextClass {
        match IOUtils::read_prefix(path, io.text_sample_size) {
            Ok(sample) => classify_bytes(&sample, cfg),
            Err(e) => {
                warn!("Text sampling failed for {:?}: {}", path, e);
                TextClass::NotText
            }
        }
    }
}

/// Interpreter directive (`#!`) detection.
pub mod shebang {
    use super::*;

    pub const MARKER: &[u8] = b"#!";

    /// Extract the directive from a first line; invalid UTF-8 is dropped.
    pub fn shebang_line(first_line: &[u8]) -> Option<String> {
        if !first_line.starts_with(MARKER) {
            return None;
        }
        let decoded: String = first_line.utf8_chunks().map(|c| c.valid()).collect();
        Some(decoded.trim().to_string())
    }

    /// Read the first line of a file and return its directive, if any.
    pub fn detect_shebang(path: &Path, io: &IOConfig) -> Option<String> {
        match IOUtils::read_first_line(path, io.shebang_max_len) {
            Ok(line) => shebang_line(&line),
            Err(e) => {
                warn!("Shebang read failed for {:?}: {}", path, e);
                None
            }
        }
    }
}

pub use shebang::detect_shebang;
pub use text::{classify_as_text, TextClass};
