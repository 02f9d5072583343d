//! Common test utilities and helpers.


use fafnir::core::triage::SignatureDatabase;
use std::path::PathBuf;

/// Path of the signature database shipped with the crate.
pub fn shipped_db_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("magic_number.json")
}

/// Load the shipped database, panicking on failure.
pub fn shipped_db() -> SignatureDatabase {
    SignatureDatabase::load(shipped_db_path()).expect("shipped magic_number.json should load")
}

/// Build a database from inline JSON, panicking on failure.
pub fn db_from_json(json: &str) -> SignatureDatabase {
    SignatureDatabase::from_json_str(json).expect("inline database should parse")
}

/// Common test data and constants
pub mod test_data {
    pub const PLAIN_TEXT: &[u8] = b"Quarterly numbers look fine.\nNothing to see here.\n";

    pub const SH_SCRIPT: &[u8] = b"#!/bin/sh\necho \"hello\"\nexit 0\n";

    pub const PDF_HEADER: &[u8] = b"%PDF-1.7\n%\xe2\xe3\xcf\xd3\n1 0 obj\n";

    pub const PNG_HEADER: &[u8] = b"\x89PNG\r\n\x1a\n\x00\x00\x00\rIHDR";

    pub const ELF_HEADER: &[u8] = b"\x7fELF\x02\x01\x01\x00\x00\x00\x00\x00\x00\x00\x00\x00";
}
