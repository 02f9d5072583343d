//! Core data types for fafnir.
//!
//! Plain values shared by the detection pipeline: signature records, the
//! ordered database, detection results and risk verdicts.

pub mod triage;
