#![no_main]
use fafnir::triage::sniffers::SignatureMatcher;
use fafnir::triage::SignatureDatabase;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(text) = std::str::from_utf8(data) {
        if let Ok(db) = SignatureDatabase::from_json_str(text) {
            let _ = SignatureMatcher::match_bytes(data, &db);
        }
    }
});
