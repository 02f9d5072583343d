//! Signature records and the ordered signature database.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A single magic-number definition: `pattern` expected at byte `offset`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignatureRecord {
    pub type_name: String,
    #[serde(with = "hex::serde")]
    pub pattern: Vec<u8>,
    pub offset: u64,
}

impl SignatureRecord {
    /// Create a record; returns `None` for an empty pattern.
    pub fn new(type_name: impl Into<String>, pattern: Vec<u8>, offset: u64) -> Option<Self> {
        if pattern.is_empty() {
            return None;
        }
        Some(Self {
            type_name: type_name.into(),
            pattern,
            offset,
        })
    }

    /// Pattern rendered as uppercase hex without separators.
    pub fn pattern_hex(&self) -> String {
        hex::encode_upper(&self.pattern)
    }
}

impl fmt::Display for SignatureRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({} @ {})",
            self.type_name,
            self.pattern_hex(),
            self.offset
        )
    }
}

/// Ordered, read-only collection of signature records.
///
/// Iteration order is match priority: the first record whose pattern is
/// found wins, even when a later record would also match.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SignatureDatabase {
    records: Vec<SignatureRecord>,
}

impl SignatureDatabase {
    /// Build a database from records already in priority order.
    pub fn from_records(records: Vec<SignatureRecord>) -> Self {
        Self { records }
    }

    pub fn iter(&self) -> std::slice::Iter<'_, SignatureRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Look up the first record with the given type name.
    pub fn get(&self, type_name: &str) -> Option<&SignatureRecord> {
        self.records.iter().find(|r| r.type_name == type_name)
    }

    pub fn records(&self) -> &[SignatureRecord] {
        &self.records
    }
}

impl<'a> IntoIterator for &'a SignatureDatabase {
    type Item = &'a SignatureRecord;
    type IntoIter = std::slice::Iter<'a, SignatureRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
