//! Signature sniffer: offset-aware magic-number matching.
//!
//! Records are probed in database order and the first hit wins, so the
//! database order is the tie-break when several patterns fit the same bytes.

use crate::core::triage::{DetectionResult, SignatureDatabase, SignatureRecord};
use crate::triage::io::IOUtils;
use std::path::Path;
use tracing::{debug, info, trace};

/// Outcome of probing one record against a file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Probe {
    Match,
    NoMatch,
}

/// Sniffer for content-based detection against a signature database.
pub struct SignatureMatcher;

impl SignatureMatcher {
    /// Compare bytes read at a record's offset against its pattern.
    pub fn probe_bytes(window: &[u8], record: &SignatureRecord) -> Probe {
        if window.starts_with(&record.pattern) {
            Probe::Match
        } else {
            Probe::NoMatch
        }
    }

    /// Probe one record against a file.
    ///
    /// Short reads, seeks past the end and open failures are all `NoMatch`.
    pub fn probe(path: &Path, record: &SignatureRecord) -> Probe {
        match IOUtils::read_at(path, record.offset, record.pattern.len()) {
            Ok(window) => Self::probe_bytes(&window, record),
            Err(e) => {
                debug!(
                    "Probe for {} at offset {} failed: {}",
                    record.type_name, record.offset, e
                );
                Probe::NoMatch
            }
        }
    }

    /// Return the first record in database order that matches the file.
    pub fn match_file(path: &Path, db: &SignatureDatabase) -> Option<DetectionResult> {
        for record in db {
            match Self::probe(path, record) {
                Probe::Match => {
                    info!(
                        "Signature {} matched at offset {}",
                        record.type_name, record.offset
                    );
                    return Some(DetectionResult::signature(
                        record.type_name.clone(),
                        record.pattern.clone(),
                        record.offset,
                    ));
                }
                Probe::NoMatch => trace!("No match for {}", record.type_name),
            }
        }
        debug!("No signature out of {} matched {:?}", db.len(), path);
        None
    }

    /// In-memory variant of [`match_file`](Self::match_file) over a full buffer.
    pub fn match_bytes(data: &[u8], db: &SignatureDatabase) -> Option<DetectionResult> {
        db.iter()
            .find(|record| {
                let start = usize::try_from(record.offset).unwrap_or(usize::MAX);
                let window = data.get(start..).unwrap_or(&[]);
                Self::probe_bytes(window, record) == Probe::Match
            })
            .map(|record| {
                DetectionResult::signature(
                    record.type_name.clone(),
                    record.pattern.clone(),
                    record.offset,
                )
            })
    }
}
