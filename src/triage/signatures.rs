//! Signature database loading.
//!
//! The definition source is a JSON object mapping a type name to
//! `{"magic": "<hex>", "offset": <int>}`. Document order is kept and becomes
//! match priority.

use crate::core::triage::{SignatureDatabase, SignatureRecord};
use crate::error::{FafnirError, Result};
use crate::log_error;
use serde::Deserialize;
use std::fs;
use std::path::Path;
use tracing::{debug, info};

/// One raw entry of the definition document.
#[derive(Debug, Deserialize)]
struct RawSignature {
    magic: String,
    offset: u64,
}

/// Decode a hex magic string, rejecting empty and odd-length input.
pub fn decode_magic(magic: &str) -> std::result::Result<Vec<u8>, String> {
    if magic.is_empty() {
        return Err("magic is empty".to_string());
    }
    if magic.len() % 2 != 0 {
        return Err(format!("magic {:?} has odd length {}", magic, magic.len()));
    }
    hex::decode(magic).map_err(|e| format!("magic {:?} is not valid hex: {}", magic, e))
}

impl SignatureDatabase {
    /// Load the database from a JSON file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let source_name = path.display().to_string();
        info!("Loading signature database from {:?}", path);

        let text = fs::read_to_string(path).map_err(|e| {
            log_error!(FafnirError::config(
                source_name.clone(),
                format!("cannot read definition source: {}", e)
            ))
        })?;
        Self::parse_named(&text, &source_name)
    }

    /// Parse the database from JSON text.
    pub fn from_json_str(text: &str) -> Result<Self> {
        Self::parse_named(text, "<inline>")
    }

    fn parse_named(text: &str, source_name: &str) -> Result<Self> {
        let raw: serde_json::Map<String, serde_json::Value> = serde_json::from_str(text)
            .map_err(|e| {
                log_error!(FafnirError::config(
                    source_name,
                    format!("expected a JSON object of signatures: {}", e)
                ))
            })?;

        let mut records = Vec::with_capacity(raw.len());
        for (type_name, value) in raw {
            let entry: RawSignature = serde_json::from_value(value).map_err(|e| {
                log_error!(FafnirError::config(
                    source_name,
                    format!("signature {:?}: {}", type_name, e)
                ))
            })?;
            let pattern = decode_magic(&entry.magic).map_err(|msg| {
                log_error!(FafnirError::config(
                    source_name,
                    format!("signature {:?}: {}", type_name, msg)
                ))
            })?;
            debug!(
                "Signature {} = {} at offset {}",
                type_name,
                hex::encode_upper(&pattern),
                entry.offset
            );
            // decode_magic never yields an empty pattern
            if let Some(record) = SignatureRecord::new(type_name, pattern, entry.offset) {
                records.push(record);
            }
        }

        info!("Loaded {} signatures from {}", records.len(), source_name);
        Ok(SignatureDatabase::from_records(records))
    }
}
