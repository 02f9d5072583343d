#![no_main]
use fafnir::triage::config::HeuristicsConfig;
use fafnir::triage::heuristics::{shebang::shebang_line, text::classify_bytes};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let _ = classify_bytes(data, &HeuristicsConfig::default());
    let _ = shebang_line(data);
});
