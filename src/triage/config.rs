//! Configuration for the triage module.
//!
//! Provides centralized configuration for all triage components with
//! defaults that reproduce the reference classification behavior.

use serde::{Deserialize, Serialize};

/// Default location of the signature definition file.
pub const DEFAULT_SIGNATURE_DB: &str = "magic_number.json";

/// Master configuration for the triage pipeline.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TriageConfig {
    /// I/O configuration for sampling reads.
    pub io: IOConfig,
    /// Text and shebang heuristic configuration.
    pub heuristics: HeuristicsConfig,
    /// Risk classification configuration.
    pub risk: RiskConfig,
}

/// I/O configuration for sampling reads.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IOConfig {
    /// Bytes sampled from the file start for text detection (default: 512).
    pub text_sample_size: usize,
    /// Longest shebang line considered, in bytes (default: 128).
    pub shebang_max_len: usize,
}

impl Default for IOConfig {
    fn default() -> Self {
        Self {
            text_sample_size: 512,
            shebang_max_len: 128,
        }
    }
}

/// Text heuristic configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeuristicsConfig {
    /// A sample is text when the non-text byte ratio is strictly below this.
    pub max_non_text_ratio: f64,
    /// Label for samples starting with a UTF-8 byte-order mark.
    pub bom_label: String,
    /// Label for samples passing the printable ratio check.
    pub text_label: String,
}

impl Default for HeuristicsConfig {
    fn default() -> Self {
        Self {
            max_non_text_ratio: 0.05,
            bom_label: "UTF-8 TEXT (BOM)".to_string(),
            text_label: "ASCII / UTF-8 TEXT".to_string(),
        }
    }
}

/// Risk classification configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskConfig {
    /// Uppercased extensions allowed to carry text content.
    pub text_extensions: Vec<String>,
}

impl Default for RiskConfig {
    fn default() -> Self {
        Self {
            text_extensions: ["TXT", "MD", "CSV", "LOG"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }
}
